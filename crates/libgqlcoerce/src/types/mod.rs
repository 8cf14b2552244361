mod deprecation_state;
mod enum_type;
mod enum_type_builder;
mod enum_value;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod input_object_type_builder;
mod input_object_type_validator;
mod scalar_type;
mod scalar_type_builder;
mod type_annotation;
mod type_builder;
mod type_declaration;
mod type_registry;

pub use deprecation_state::DeprecationState;
pub use enum_type::EnumType;
pub use enum_type_builder::EnumTypeBuilder;
pub use enum_value::EnumValue;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use input_object_type_builder::InputObjectTypeBuilder;
pub(crate) use input_object_type_validator::InputObjectTypeValidator;
pub use scalar_type::ScalarCoercer;
pub use scalar_type::ScalarType;
pub use scalar_type_builder::ScalarTypeBuilder;
pub use type_annotation::TypeAnnotation;
pub use type_annotation::TypeAnnotationParseError;
pub(crate) use type_builder::TypeBuilder;
pub(crate) use type_builder::ast_def_location;
pub use type_declaration::EnumTypeDeclaration;
pub use type_declaration::EnumValueDeclaration;
pub use type_declaration::InputFieldDeclaration;
pub use type_declaration::InputObjectTypeDeclaration;
pub use type_declaration::ScalarTypeDeclaration;
pub(crate) use type_registry::TypeRegistry;

/// Indicates if `name` is a valid
/// [GraphQL name](https://spec.graphql.org/October2021/#Name):
/// `/[_A-Za-z][_0-9A-Za-z]*/`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
        _ => false,
    }
}
