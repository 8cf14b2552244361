use crate::coercion::InputPath;
use thiserror::Error;

/// A single problem found while coercing a raw input value, tagged with the
/// [`InputPath`] at which it was found.
#[derive(Clone, Debug, PartialEq)]
pub struct CoercionError {
    pub(crate) kind: CoercionErrorKind,
    pub(crate) path: InputPath,
}
impl CoercionError {
    pub fn new(path: InputPath, kind: CoercionErrorKind) -> Self {
        Self { kind, path }
    }

    pub fn kind(&self) -> &CoercionErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &InputPath {
        &self.path
    }
}
impl std::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} (at `{}`)", self.kind, self.path)
        }
    }
}
impl std::error::Error for CoercionError {}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionErrorKind {
    #[error(
        "The default value of `{type_name}.{field_name}` expands into itself"
    )]
    DefaultValueCycle {
        type_name: String,
        field_name: String,
    },

    #[error(
        "`{value}` is not a value of the `{enum_name}` enum (expected one of: \
        {})",
        valid_values.join(", "),
    )]
    EnumMismatch {
        enum_name: String,
        value: String,
        valid_values: Vec<String>,
    },

    #[error("Expected an object for the `{type_name}` input object, found {found}")]
    ExpectedInputObject {
        type_name: String,
        found: String,
    },

    #[error("Expected a list for `{type_annotation}`, found {found}")]
    ExpectedList {
        type_annotation: String,
        found: String,
    },

    #[error(
        "Missing value for the required `{type_name}.{field_name}` field of \
        type `{type_annotation}`"
    )]
    MissingRequiredField {
        type_name: String,
        field_name: String,
        type_annotation: String,
    },

    #[error("Expected a non-null value of type `{type_annotation}`, found null")]
    NullValue {
        type_annotation: String,
    },

    #[error("Invalid value for the `{scalar_name}` scalar: {message}")]
    ScalarCoercion {
        scalar_name: String,
        message: String,
    },

    #[error("There is no type defined with the name `{type_name}`")]
    UndefinedType {
        type_name: String,
    },

    #[error("The `{type_name}` input object has no field named `{field_name}`")]
    UnknownField {
        type_name: String,
        field_name: String,
    },
}
