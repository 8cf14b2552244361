use crate::Value;
use indexmap::IndexMap;

/// The result of successfully coercing a raw [`Value`] against a type.
///
/// Unlike a raw [`Value`], every part of a [`CoercedValue`] is known to
/// conform to the type it was coerced against: enum members are known
/// members, scalars have passed their scalar's coercion, and input objects
/// carry exactly their declared fields (defaults included).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum CoercedValue {
    Null,
    Scalar(Value),
    Enum(String),
    List(Vec<CoercedValue>),
    InputObject(IndexMap<String, CoercedValue>),
}
impl CoercedValue {
    pub fn as_enum(&self) -> Option<&str> {
        if let Self::Enum(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&IndexMap<String, CoercedValue>> {
        if let Self::InputObject(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[CoercedValue]> {
        if let Self::List(values) = self {
            Some(values.as_slice())
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        if let Self::Scalar(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
