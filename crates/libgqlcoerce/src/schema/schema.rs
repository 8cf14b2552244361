use crate::coercion::CoercedValue;
use crate::coercion::CoercionError;
use crate::coercion::CoercionOptions;
use crate::coercion::InputValueCoercer;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Represents a fully validated and immutable set of GraphQL input types.
///
/// A [`Schema`] is only ever produced by [`SchemaBuilder::build()`] once every
/// type reference resolves and every structural check has passed. It holds no
/// interior mutability and can be shared freely across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) coercion_options: CoercionOptions,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`], in registration order.
    ///
    /// This map includes both the types defined while building this
    /// [`Schema`] and the built-in scalars like [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Shorthand for `self.coercer().coerce(type_annotation, raw)`.
    pub fn coerce(
        &self,
        type_annotation: &TypeAnnotation,
        raw: &Value,
    ) -> Result<CoercedValue, Vec<CoercionError>> {
        self.coercer().coerce(type_annotation, raw)
    }

    /// An [`InputValueCoercer`] configured with the [`CoercionOptions`] this
    /// schema was built with.
    pub fn coercer(&self) -> InputValueCoercer<'_> {
        InputValueCoercer::new(self)
    }

    pub fn coercion_options(&self) -> &CoercionOptions {
        &self.coercion_options
    }

    pub fn defined_types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values().filter(|type_| !type_.is_builtin())
    }

    /// Look up a type's definition by name.
    pub fn definition_for(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }
}
