use crate::coercion::CoercionError;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while building a [`Schema`](crate::schema::Schema).
///
/// [`SchemaBuilder::build()`](crate::schema::SchemaBuilder::build) never stops
/// at the first of these; see [`SchemaBuildErrors`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of \
        required fields that no finite input value could satisfy. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
        type_names: Vec<String>,
    },

    #[error("The `{type_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValue {
        type_name: String,
        value_name: String,
    },

    #[error("The `{type_name}` input object defines the `{field_name}` field more than once")]
    DuplicateInputFieldName {
        type_name: String,
        field_name: String,
    },

    #[error("Multiple definitions of the `{type_name}` type: {def1} and {def2}")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` enum must define at least one value")]
    EmptyEnum {
        type_name: String,
        def_location: loc::SourceLocation,
    },

    #[error("The `{type_name}` input object must define at least one field")]
    EmptyInputObject {
        type_name: String,
        def_location: loc::SourceLocation,
    },

    #[error(
        "The default value of `{type_name}.{field_name}` is not a valid value \
        for its type: {}",
        errors.iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("; "),
    )]
    InvalidDefaultValue {
        type_name: String,
        field_name: String,
        errors: Vec<CoercionError>,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
        def_location: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` enum defines an invalid value name: \
        `{value_name}`"
    )]
    InvalidEnumValueName {
        type_name: String,
        value_name: String,
    },

    #[error(
        "The `{type_name}` input object defines a field with an invalid name: \
        `{field_name}`"
    )]
    InvalidFieldName {
        type_name: String,
        field_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is an output type."
    )]
    InvalidInputFieldWithOutputType {
        parent_type_name: String,
        field_name: String,
        invalid_type_name: String,
    },

    #[error("Invalid type name: `{type_name}`")]
    InvalidTypeName {
        type_name: String,
        def_location: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}.{field_name}` field's type annotation \
        `{type_annotation}` wraps a non-null type in another non-null type"
    )]
    NestedNonNullTypeAnnotation {
        type_name: String,
        field_name: String,
        type_annotation: TypeAnnotation,
    },

    #[error("Error parsing schema{}: {err}", file.as_ref().map(|f| format!(" at {}", f.display())).unwrap_or_default())]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Error reading schema file {}: {err}", file.display())]
    SchemaFileReadError {
        file: PathBuf,
        err: String,
    },

    #[error(
        "The `{parent_type_name}.{field_name}` field refers to \
        `{undefined_type_name}`, but there is no type defined with that name"
    )]
    UndefinedTypeName {
        parent_type_name: String,
        field_name: String,
        undefined_type_name: String,
    },

    #[error(
        "The default value of `{type_name}.{field_name}` refers to the \
        `${variable_name}` variable, but default values must be constant"
    )]
    VariableInDefaultValue {
        type_name: String,
        field_name: String,
        variable_name: String,
    },
}

/// Every [`SchemaBuildError`] found by a single
/// [`SchemaBuilder::build()`](crate::schema::SchemaBuilder::build) call.
/// Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaBuildErrors(Vec<SchemaBuildError>);
impl SchemaBuildErrors {
    pub(crate) fn new(errors: Vec<SchemaBuildError>) -> Self {
        Self(errors)
    }

    pub fn as_slice(&self) -> &[SchemaBuildError] {
        self.0.as_slice()
    }

    pub fn into_vec(self) -> Vec<SchemaBuildError> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemaBuildError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl std::fmt::Display for SchemaBuildErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Schema build failed with {} error(s):", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  * {err}")?;
        }
        Ok(())
    }
}
impl std::error::Error for SchemaBuildErrors {}
impl std::convert::From<SchemaBuildError> for SchemaBuildErrors {
    fn from(err: SchemaBuildError) -> Self {
        Self(vec![err])
    }
}
impl IntoIterator for SchemaBuildErrors {
    type Item = SchemaBuildError;
    type IntoIter = std::vec::IntoIter<SchemaBuildError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a SchemaBuildErrors {
    type Item = &'a SchemaBuildError;
    type IntoIter = std::slice::Iter<'a, SchemaBuildError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
