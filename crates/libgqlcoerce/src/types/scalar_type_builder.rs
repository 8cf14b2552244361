use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ScalarCoercer;
use crate::types::ScalarType;
use crate::types::ScalarTypeDeclaration;
use crate::types::scalar_type;
use crate::types::type_builder::TypeBuilder;
use crate::types::type_builder;
use inherent::inherent;
use std::path::Path;
use std::sync::Arc;

/// Declares a custom [`ScalarType`] together with the host function that
/// coerces its raw input values.
///
/// ```
/// use libgqlcoerce::Value;
/// use libgqlcoerce::types::ScalarTypeBuilder;
///
/// let email = ScalarTypeBuilder::new("Email").with_coercer(|raw: &Value| {
///     match raw.as_str() {
///         Some(s) if s.contains('@') => Ok(raw.clone()),
///         _ => Err("not an email address".to_string()),
///     }
/// });
/// ```
#[derive(Clone)]
pub struct ScalarTypeBuilder {
    coercer: Option<Arc<dyn ScalarCoercer>>,
    def_location: loc::SourceLocation,
    description: Option<String>,
    name: String,
}
impl ScalarTypeBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            coercer: None,
            def_location: loc::SourceLocation::HostDeclared,
            description: None,
            name: name.as_ref().to_string(),
        }
    }

    /// Copy any host [`ScalarTypeDeclaration`] into an owned builder.
    pub fn from_declaration(decl: &(impl ScalarTypeDeclaration + ?Sized)) -> Self {
        Self {
            coercer: decl.coercer(),
            def_location: loc::SourceLocation::HostDeclared,
            description: decl.description().map(str::to_string),
            name: decl.name().to_string(),
        }
    }

    pub fn with_coercer(mut self, coercer: impl ScalarCoercer + 'static) -> Self {
        self.coercer = Some(Arc::new(coercer));
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub(crate) fn has_coercer(&self) -> bool {
        self.coercer.is_some()
    }

    pub(crate) fn set_coercer(&mut self, coercer: Arc<dyn ScalarCoercer>) {
        self.coercer = Some(coercer);
    }
}
impl std::fmt::Debug for ScalarTypeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarTypeBuilder")
            .field("has_coercer", &self.coercer.is_some())
            .field("def_location", &self.def_location)
            .field("description", &self.description)
            .field("name", &self.name)
            .finish()
    }
}

#[inherent]
impl ScalarTypeDeclaration for ScalarTypeBuilder {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn coercer(&self) -> Option<Arc<dyn ScalarCoercer>> {
        self.coercer.clone()
    }
}

impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;

    fn from_ast(
        file_path: &Path,
        def: &Self::AstTypeDef,
    ) -> Result<Self, SchemaBuildError> {
        Ok(Self {
            coercer: None,
            def_location: type_builder::ast_def_location(file_path, def.position),
            description: def.description.to_owned(),
            name: def.name.to_string(),
        })
    }

    fn into_definition(self) -> (GraphQLType, Vec<SchemaBuildError>) {
        let scalar_type = ScalarType {
            coercer: self.coercer.unwrap_or_else(scalar_type::passthrough_coercer),
            def_location: self.def_location,
            description: self.description,
            name: self.name,
        };
        (GraphQLType::Scalar(Box::new(scalar_type)), vec![])
    }
}
