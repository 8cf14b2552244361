use crate::loc;
use crate::Value;
use std::sync::Arc;

/// The host-supplied capability used to coerce raw input for a custom
/// [`ScalarType`].
///
/// Any `Fn(&Value) -> Result<Value, String> + Send + Sync` closure implements
/// this trait. The returned `String` is the message surfaced in a
/// [`CoercionErrorKind::ScalarCoercion`](crate::coercion::CoercionErrorKind::ScalarCoercion)
/// error.
pub trait ScalarCoercer: Send + Sync {
    fn coerce_scalar(&self, raw: &Value) -> Result<Value, String>;
}
impl<F> ScalarCoercer for F
where
    F: Fn(&Value) -> Result<Value, String> + Send + Sync,
{
    fn coerce_scalar(&self, raw: &Value) -> Result<Value, String> {
        self(raw)
    }
}

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars).
#[derive(Clone)]
pub struct ScalarType {
    pub(super) coercer: Arc<dyn ScalarCoercer>,
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ScalarType {
    pub fn coercer(&self) -> &dyn ScalarCoercer {
        self.coercer.as_ref()
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ScalarType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`ScalarType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("def_location", &self.def_location)
            .field("description", &self.description)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.def_location == other.def_location
            && Arc::ptr_eq(&self.coercer, &other.coercer)
    }
}

/// Coercer for scalars declared without one (e.g. a bare `scalar Foo` in SDL):
/// every non-null raw value passes through unchanged.
pub(crate) fn passthrough_coercer() -> Arc<dyn ScalarCoercer> {
    Arc::new(|raw: &Value| -> Result<Value, String> { Ok(raw.clone()) })
}
