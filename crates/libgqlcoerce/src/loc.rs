use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: Option<P>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where a type was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// One of the built-in scalars (`Int`, `Float`, `String`, `Boolean`,
    /// `ID`).
    GraphQLBuiltIn,

    /// Declared programmatically by host code through one of the declaration
    /// traits (e.g. [`EnumTypeDeclaration`](crate::types::EnumTypeDeclaration)).
    HostDeclared,

    /// Loaded from GraphQL SDL text.
    SchemaFile(FilePosition),
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::HostDeclared => write!(f, "<host declaration>"),
            Self::SchemaFile(pos) => write!(f, "{pos}"),
        }
    }
}
