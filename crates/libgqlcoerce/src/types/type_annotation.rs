use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use thiserror::Error;

/// Represents the annotated type of an [`InputField`](crate::types::InputField)
/// or of any other input position (e.g. an operation variable) that a value
/// is coerced against.
///
/// Mirrors GraphQL's type reference grammar: a named type, a list of some
/// inner type, or a non-null wrapper of some inner type. Named references are
/// [`NamedRef`](crate::NamedRef)s and are only bound to a definition when
/// resolved against a [`Schema`].
///
/// Serializes to (and deserializes from) GraphQL syntax, e.g. `"[Int!]!"`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(NamedGraphQLTypeRef),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    pub fn named(type_name: impl AsRef<str>) -> Self {
        Self::Named(NamedGraphQLTypeRef::new(type_name))
    }

    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap this annotation in [`TypeAnnotation::NonNull`]. Already non-null
    /// annotations are returned unchanged.
    pub fn non_null(self) -> Self {
        if self.is_non_null() {
            self
        } else {
            Self::NonNull(Box::new(self))
        }
    }

    /// Parse a type reference written in GraphQL syntax (e.g. `[String!]!`).
    pub fn parse(source: &str) -> Result<Self, TypeAnnotationParseError> {
        let source = source.trim();
        let (annot, rest) = Self::parse_impl(source)?;
        if !rest.trim().is_empty() {
            return Err(TypeAnnotationParseError::TrailingInput {
                annotation: source.to_string(),
                trailing: rest.trim().to_string(),
            });
        }
        Ok(annot)
    }

    fn parse_impl(source: &str) -> Result<(Self, &str), TypeAnnotationParseError> {
        let source = source.trim_start();
        let (annot, rest) =
            if let Some(inner_source) = source.strip_prefix('[') {
                let (inner, rest) = Self::parse_impl(inner_source)?;
                let rest = rest.trim_start();
                let Some(rest) = rest.strip_prefix(']') else {
                    return Err(TypeAnnotationParseError::UnclosedList {
                        annotation: source.to_string(),
                    });
                };
                (Self::list(inner), rest)
            } else {
                let name_len = source
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(source.len());
                let (name, rest) = source.split_at(name_len);
                if !crate::types::is_valid_name(name) {
                    return Err(TypeAnnotationParseError::InvalidTypeName {
                        annotation: source.to_string(),
                    });
                }
                (Self::named(name), rest)
            };

        let rest_trimmed = rest.trim_start();
        if let Some(rest) = rest_trimmed.strip_prefix('!') {
            Ok((Self::NonNull(Box::new(annot)), rest))
        } else {
            Ok((annot, rest))
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::list(Self::from_ast_type(inner)),

            ast::schema::Type::NamedType(name) =>
                Self::named(name),

            ast::schema::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast_type(inner))),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// named type reference.
    pub fn innermost_named_type_ref(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) =>
                inner.innermost_named_type_ref(),
            Self::Named(type_ref) =>
                type_ref,
        }
    }

    /// The name of the type at the core of this annotation once every list
    /// and non-null wrapper has been stripped.
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_ref().name()
    }

    /// Resolve the inner-most named type against a [`Schema`].
    pub fn innermost_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.innermost_named_type_ref().deref(schema).ok()
    }

    /// Indicates if this annotation contains a list wrapper at any depth.
    pub fn contains_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.contains_list(),
            Self::Named(_) => false,
        }
    }

    /// Indicates if there is a `NonNull` directly wrapping another `NonNull`
    /// anywhere within this annotation (e.g. a hand-built `Int!!`).
    pub fn has_nested_non_null(&self) -> bool {
        match self {
            Self::NonNull(inner) =>
                inner.is_non_null() || inner.has_nested_non_null(),
            Self::List(inner) =>
                inner.has_nested_non_null(),
            Self::Named(_) =>
                false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null) at its
    /// outermost level.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn nullable(&self) -> bool {
        !self.is_non_null()
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(type_ref) => write!(f, "{}", type_ref.name()),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
impl std::str::FromStr for TypeAnnotation {
    type Err = TypeAnnotationParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}
impl std::convert::TryFrom<String> for TypeAnnotation {
    type Error = TypeAnnotationParseError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Self::parse(source.as_str())
    }
}
impl std::convert::From<TypeAnnotation> for String {
    fn from(annot: TypeAnnotation) -> Self {
        annot.to_string()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeAnnotationParseError {
    #[error("Invalid type name in type annotation `{annotation}`")]
    InvalidTypeName {
        annotation: String,
    },

    #[error("Unexpected trailing input `{trailing}` after type annotation `{annotation}`")]
    TrailingInput {
        annotation: String,
        trailing: String,
    },

    #[error("List type annotation `{annotation}` is missing a closing `]`")]
    UnclosedList {
        annotation: String,
    },
}
