use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::EnumType;
use crate::types::NamedGraphQLTypeRef;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_ref: NamedGraphQLTypeRef,
}

impl EnumValue {
    /// Whether this value is deprecated (and why). Deprecation is advisory:
    /// deprecated values still coerce.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.deprecation_reason.as_deref().into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`EnumValue`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`EnumType`] that this [`EnumValue`] belongs to.
    pub fn enum_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema EnumType> {
        self.type_ref.deref(schema).ok()?.as_enum()
    }

    /// The name of the [`EnumType`] type to which this value belongs.
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that's needed.
    pub fn enum_type_name(&self) -> &str {
        self.type_ref.name()
    }
}
