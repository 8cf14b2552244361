/// How a non-list raw value is treated when a list type is expected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListCoercion {
    /// Coerce the value as the single element of a one-element list. This is
    /// GraphQL's [input coercion rule for lists
    /// ](https://spec.graphql.org/October2021/#sec-List.Input-Coercion).
    #[default]
    WrapSingleValue,

    /// Reject the value with
    /// [`CoercionErrorKind::ExpectedList`](crate::coercion::CoercionErrorKind::ExpectedList).
    RequireList,
}

/// Knobs for [`InputValueCoercer`](crate::coercion::InputValueCoercer).
///
/// Set once on the [`SchemaBuilder`](crate::schema::SchemaBuilder) and carried
/// by the built [`Schema`](crate::schema::Schema); individual coercers can
/// override them with
/// [`InputValueCoercer::with_options()`](crate::coercion::InputValueCoercer::with_options).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoercionOptions {
    pub list_coercion: ListCoercion,
}
impl CoercionOptions {
    pub fn with_list_coercion(mut self, list_coercion: ListCoercion) -> Self {
        self.list_coercion = list_coercion;
        self
    }
}
