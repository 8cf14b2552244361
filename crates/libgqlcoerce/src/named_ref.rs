use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a
/// "resource" (`TResource`) stored within some other data-store (`TSource`)
/// without holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// As a concrete example, [crate::types::TypeAnnotation::Named] stores a
/// `NamedRef<crate::schema::Schema, crate::types::GraphQLType>` rather than a
/// direct reference to the [crate::types::InputObjectType] it names. This is
/// what allows input objects to refer to each other cyclically while the
/// [crate::schema::Schema] owns every definition exactly once.
pub struct NamedRef<TSource, TResource: DerefByName<Source=TSource>> {
    name: String,
    phantom: PhantomData<fn() -> (TSource, TResource)>,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

// Not derived: `TSource` (e.g. `Schema`) need not implement these.
impl<TSource, TResource: DerefByName<Source=TSource>> Clone for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self::new(self.name.as_str())
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> std::fmt::Debug for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NamedRef").field(&self.name).finish()
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> PartialEq for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> Eq for NamedRef<TSource, TResource> {}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of NamedRef<T> for that type.
pub trait DerefByName: Sized {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError>;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition exists for the name `{0}`")]
    DanglingReference(String),
}
