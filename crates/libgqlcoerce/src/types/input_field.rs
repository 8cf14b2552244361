use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [crate::types::InputObjectType].
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(super) default_value: Option<Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parent_type: NamedGraphQLTypeRef,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    /// The raw default value substituted when a caller omits this field.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Indicates if a caller must provide a value for this field: it is
    /// non-null and has no default value to fall back on.
    pub fn is_required(&self) -> bool {
        self.type_annotation.is_non_null() && self.default_value.is_none()
    }

    /// The name of this [`InputField`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.parent_type.deref(schema).ok()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
