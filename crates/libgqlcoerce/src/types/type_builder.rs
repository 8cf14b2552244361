use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use std::path::Path;

/// Shared shape of the per-kind type builders: each can be populated from an
/// SDL definition and is eventually turned into its definition object.
pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;

    fn from_ast(
        file_path: &Path,
        def: &Self::AstTypeDef,
    ) -> Result<Self, SchemaBuildError>;

    /// Convert this builder into its definition object, along with every
    /// structural problem found along the way (duplicate members, invalid
    /// names, ...). The definition is always produced so that it can still
    /// take part in later whole-schema checks.
    fn into_definition(self) -> (GraphQLType, Vec<SchemaBuildError>);
}

pub(crate) fn ast_def_location(
    file_path: &Path,
    position: graphql_parser::Pos,
) -> loc::SourceLocation {
    loc::SourceLocation::SchemaFile(
        loc::FilePosition::from_pos(Some(file_path), position),
    )
}

/// Names of input fields and enum values must be valid GraphQL names and must
/// not use the `__` prefix reserved for introspection.
pub(crate) fn is_valid_member_name(name: &str) -> bool {
    crate::types::is_valid_name(name) && !name.starts_with("__")
}

pub(crate) fn host_declared() -> loc::SourceLocation {
    loc::SourceLocation::HostDeclared
}
