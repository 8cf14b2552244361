use crate::loc;
use crate::types::InputField;
use indexmap::IndexMap;

/// Represents a
/// [GraphQL input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Input objects are closed: coercing a raw object that carries a key with no
/// corresponding [`InputField`] is an error.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, InputField>,
    pub(super) name: String,
}
impl InputObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InputObjectType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    /// The [`InputField`]s of this [`InputObjectType`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    /// The name of this [`InputObjectType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
