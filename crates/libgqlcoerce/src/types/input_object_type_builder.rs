use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputFieldDeclaration;
use crate::types::InputObjectType;
use crate::types::InputObjectTypeDeclaration;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;
use crate::types::type_builder::TypeBuilder;
use crate::types::type_builder;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

/// Declares an [`InputObjectType`].
///
/// ```
/// use libgqlcoerce::types::InputFieldDeclaration;
/// use libgqlcoerce::types::InputObjectTypeBuilder;
/// use libgqlcoerce::types::TypeAnnotation;
///
/// let point = InputObjectTypeBuilder::new("InputPoint")
///     .field(InputFieldDeclaration::new("x", TypeAnnotation::named("Int")).required())
///     .field(InputFieldDeclaration::new("y", TypeAnnotation::named("Int")).required())
///     .field(
///         InputFieldDeclaration::new("label", TypeAnnotation::named("String"))
///             .with_default_value("origin"),
///     );
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeBuilder {
    #[serde(skip, default = "type_builder::host_declared")]
    def_location: loc::SourceLocation,
    #[serde(default)]
    description: Option<String>,
    fields: Vec<InputFieldDeclaration>,
    name: String,
}
impl InputObjectTypeBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            def_location: loc::SourceLocation::HostDeclared,
            description: None,
            fields: vec![],
            name: name.as_ref().to_string(),
        }
    }

    /// Copy any host [`InputObjectTypeDeclaration`] into an owned builder.
    pub fn from_declaration(decl: &(impl InputObjectTypeDeclaration + ?Sized)) -> Self {
        Self {
            def_location: loc::SourceLocation::HostDeclared,
            description: decl.description().map(str::to_string),
            fields: decl.fields().to_vec(),
            name: decl.name().to_string(),
        }
    }

    pub fn field(mut self, field: InputFieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }
}

#[inherent]
impl InputObjectTypeDeclaration for InputObjectTypeBuilder {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[InputFieldDeclaration] {
        self.fields.as_slice()
    }
}

impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::schema::InputObjectType;

    fn from_ast(
        file_path: &Path,
        def: &Self::AstTypeDef,
    ) -> Result<Self, SchemaBuildError> {
        let mut fields = Vec::with_capacity(def.fields.len());
        for field_def in &def.fields {
            let default_value = match &field_def.default_value {
                Some(ast_value) => Some(
                    Value::from_const_ast(ast_value).map_err(|variable_name| {
                        SchemaBuildError::VariableInDefaultValue {
                            type_name: def.name.to_string(),
                            field_name: field_def.name.to_string(),
                            variable_name,
                        }
                    })?
                ),
                None => None,
            };

            fields.push(InputFieldDeclaration {
                default_value,
                description: field_def.description.to_owned(),
                name: field_def.name.to_string(),
                required: false,
                type_annotation: TypeAnnotation::from_ast_type(&field_def.value_type),
            });
        }

        Ok(Self {
            def_location: type_builder::ast_def_location(file_path, def.position),
            description: def.description.to_owned(),
            fields,
            name: def.name.to_string(),
        })
    }

    fn into_definition(self) -> (GraphQLType, Vec<SchemaBuildError>) {
        let mut errors = vec![];
        if self.fields.is_empty() {
            errors.push(SchemaBuildError::EmptyInputObject {
                type_name: self.name.to_string(),
                def_location: self.def_location.to_owned(),
            });
        }

        let mut fields = IndexMap::with_capacity(self.fields.len());
        for field_decl in self.fields {
            if !type_builder::is_valid_member_name(&field_decl.name) {
                errors.push(SchemaBuildError::InvalidFieldName {
                    type_name: self.name.to_string(),
                    field_name: field_decl.name,
                });
                continue;
            }

            if fields.contains_key(&field_decl.name) {
                errors.push(SchemaBuildError::DuplicateInputFieldName {
                    type_name: self.name.to_string(),
                    field_name: field_decl.name,
                });
                continue;
            }

            let type_annotation = field_decl.effective_type_annotation();
            if type_annotation.has_nested_non_null() {
                errors.push(SchemaBuildError::NestedNonNullTypeAnnotation {
                    type_name: self.name.to_string(),
                    field_name: field_decl.name.to_string(),
                    type_annotation: type_annotation.to_owned(),
                });
            }

            fields.insert(field_decl.name.to_string(), InputField {
                default_value: field_decl.default_value,
                description: field_decl.description,
                name: field_decl.name,
                parent_type: NamedGraphQLTypeRef::new(self.name.as_str()),
                type_annotation,
            });
        }

        let input_obj_type = InputObjectType {
            def_location: self.def_location,
            description: self.description,
            fields,
            name: self.name,
        };
        (GraphQLType::InputObject(Box::new(input_obj_type)), errors)
    }
}
