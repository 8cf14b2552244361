//! The contract host code satisfies to declare types to a
//! [`SchemaBuilder`](crate::schema::SchemaBuilder).
//!
//! Any host value can act as a type declaration by implementing one of the
//! traits below; the builder only ever reads a declaration through these
//! accessors. [`EnumTypeBuilder`](crate::types::EnumTypeBuilder),
//! [`InputObjectTypeBuilder`](crate::types::InputObjectTypeBuilder) and
//! [`ScalarTypeBuilder`](crate::types::ScalarTypeBuilder) are ready-made
//! implementations.

use crate::types::ScalarCoercer;
use crate::types::TypeAnnotation;
use crate::Value;
use std::sync::Arc;

pub trait EnumTypeDeclaration {
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    /// The enum's members, in declaration order.
    fn values(&self) -> &[EnumValueDeclaration];
}

pub trait InputObjectTypeDeclaration {
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    /// The input object's fields, in declaration order.
    fn fields(&self) -> &[InputFieldDeclaration];
}

pub trait ScalarTypeDeclaration {
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    /// The coercion function for raw values of this scalar. `None` means raw
    /// values are accepted unchanged.
    fn coercer(&self) -> Option<Arc<dyn ScalarCoercer>>;
}

/// One member of an [`EnumTypeDeclaration`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDeclaration {
    pub name: String,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
impl EnumValueDeclaration {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            deprecation_reason: None,
            description: None,
        }
    }

    pub fn deprecated(mut self, reason: impl AsRef<str>) -> Self {
        self.deprecation_reason = Some(reason.as_ref().to_string());
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }
}
impl std::convert::From<&str> for EnumValueDeclaration {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One field of an [`InputObjectTypeDeclaration`].
///
/// `required` and a non-null `type_annotation` are two spellings of the same
/// thing: a required field's annotation is wrapped in
/// [`TypeAnnotation::NonNull`] when the declaration is built.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputFieldDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub type_annotation: TypeAnnotation,
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}
impl InputFieldDeclaration {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.as_ref().to_string(),
            type_annotation,
            default_value: None,
            description: None,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// The annotation this field is built with once the `required` flag has
    /// been folded in.
    pub fn effective_type_annotation(&self) -> TypeAnnotation {
        if self.required {
            self.type_annotation.clone().non_null()
        } else {
            self.type_annotation.clone()
        }
    }
}
