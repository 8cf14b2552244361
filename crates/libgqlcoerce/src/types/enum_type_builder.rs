use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumTypeDeclaration;
use crate::types::EnumValue;
use crate::types::EnumValueDeclaration;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::type_builder::TypeBuilder;
use crate::types::type_builder;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Declares an [`EnumType`].
///
/// ```
/// use libgqlcoerce::types::EnumTypeBuilder;
/// use libgqlcoerce::types::EnumValueDeclaration;
///
/// let color = EnumTypeBuilder::new("Color")
///     .value("RED")
///     .value("GREEN")
///     .value(EnumValueDeclaration::new("BLUE").deprecated("Use NAVY"))
///     .value("NAVY");
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeBuilder {
    #[serde(skip, default = "type_builder::host_declared")]
    def_location: loc::SourceLocation,
    #[serde(default)]
    description: Option<String>,
    name: String,
    values: Vec<EnumValueDeclaration>,
}
impl EnumTypeBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::HostDeclared,
            description: None,
            name: name.as_ref().to_string(),
            values: vec![],
        }
    }

    /// Copy any host [`EnumTypeDeclaration`] into an owned builder.
    pub fn from_declaration(decl: &(impl EnumTypeDeclaration + ?Sized)) -> Self {
        Self {
            def_location: loc::SourceLocation::HostDeclared,
            description: decl.description().map(str::to_string),
            name: decl.name().to_string(),
            values: decl.values().to_vec(),
        }
    }

    pub fn value(mut self, value: impl Into<EnumValueDeclaration>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }
}

#[inherent]
impl EnumTypeDeclaration for EnumTypeBuilder {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn values(&self) -> &[EnumValueDeclaration] {
        self.values.as_slice()
    }
}

impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;

    fn from_ast(
        file_path: &Path,
        def: &Self::AstTypeDef,
    ) -> Result<Self, SchemaBuildError> {
        Ok(Self {
            def_location: type_builder::ast_def_location(file_path, def.position),
            description: def.description.to_owned(),
            name: def.name.to_string(),
            values: def.values.iter().map(|value_def| EnumValueDeclaration {
                deprecation_reason: deprecation_reason_from_ast(&value_def.directives),
                description: value_def.description.to_owned(),
                name: value_def.name.to_string(),
            }).collect(),
        })
    }

    fn into_definition(self) -> (GraphQLType, Vec<SchemaBuildError>) {
        let mut errors = vec![];
        if self.values.is_empty() {
            errors.push(SchemaBuildError::EmptyEnum {
                type_name: self.name.to_string(),
                def_location: self.def_location.to_owned(),
            });
        }

        let mut values = IndexMap::with_capacity(self.values.len());
        for value_decl in self.values {
            // https://spec.graphql.org/October2021/#EnumValue
            let is_reserved = matches!(value_decl.name.as_str(), "true" | "false" | "null");
            if is_reserved || !type_builder::is_valid_member_name(&value_decl.name) {
                errors.push(SchemaBuildError::InvalidEnumValueName {
                    type_name: self.name.to_string(),
                    value_name: value_decl.name,
                });
                continue;
            }

            if values.contains_key(&value_decl.name) {
                errors.push(SchemaBuildError::DuplicateEnumValue {
                    type_name: self.name.to_string(),
                    value_name: value_decl.name,
                });
                continue;
            }

            values.insert(value_decl.name.to_string(), EnumValue {
                deprecation_reason: value_decl.deprecation_reason,
                description: value_decl.description,
                name: value_decl.name,
                type_ref: NamedGraphQLTypeRef::new(self.name.as_str()),
            });
        }

        let enum_type = EnumType {
            def_location: self.def_location,
            description: self.description,
            name: self.name,
            values,
        };
        (GraphQLType::Enum(Box::new(enum_type)), errors)
    }
}

fn deprecation_reason_from_ast(directives: &[ast::schema::Directive]) -> Option<String> {
    let deprecated = directives.iter().find(|directive| directive.name == "deprecated")?;
    let reason = deprecated.arguments.iter().find_map(|(arg_name, arg_value)| {
        if arg_name != "reason" {
            return None;
        }
        Value::from_const_ast(arg_value).ok()?.as_str().map(str::to_string)
    });
    Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
}
