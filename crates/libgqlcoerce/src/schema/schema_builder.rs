use crate::ast;
use crate::coercion::CoercionOptions;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuildErrors;
use crate::types::EnumTypeBuilder;
use crate::types::EnumTypeDeclaration;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeBuilder;
use crate::types::InputObjectTypeDeclaration;
use crate::types::InputObjectTypeValidator;
use crate::types::ScalarCoercer;
use crate::types::ScalarTypeBuilder;
use crate::types::ScalarTypeDeclaration;
use crate::types::TypeBuilder;
use crate::types::TypeRegistry;
use crate::types;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
enum PendingTypeDeclaration {
    Enum(EnumTypeBuilder),
    InputObject(InputObjectTypeBuilder),
    Scalar(ScalarTypeBuilder),
}
impl PendingTypeDeclaration {
    fn into_definition(self) -> (GraphQLType, Vec<SchemaBuildError>) {
        match self {
            Self::Enum(builder) => builder.into_definition(),
            Self::InputObject(builder) => builder.into_definition(),
            Self::Scalar(builder) => builder.into_definition(),
        }
    }
}

/// Utility for building a [`Schema`].
///
/// Types may be declared programmatically (through the declaration traits or
/// their builders) and/or loaded from GraphQL SDL. Nothing is validated until
/// [`SchemaBuilder::build()`], which reports every problem at once.
///
/// ```
/// use libgqlcoerce::schema::SchemaBuilder;
/// use libgqlcoerce::types::EnumTypeBuilder;
///
/// let schema = SchemaBuilder::new()
///     .add_enum_type(&EnumTypeBuilder::new("Color").value("RED").value("GREEN"))
///     .load_str(None, "input Paint { color: Color! }")
///     .expect("parses")
///     .build()
///     .expect("builds");
///
/// assert!(schema.definition_for("Paint").is_some());
/// ```
pub struct SchemaBuilder {
    coercion_options: CoercionOptions,
    declarations: Vec<PendingTypeDeclaration>,
    output_types: Vec<(String, loc::SourceLocation)>,
    scalar_coercers: HashMap<String, Arc<dyn ScalarCoercer>>,
    str_load_counter: u16,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            coercion_options: CoercionOptions::default(),
            declarations: vec![],
            output_types: vec![],
            scalar_coercers: HashMap::new(),
            str_load_counter: 0,
        }
    }

    /// Convenience for `SchemaBuilder::new().load_files(file_paths)`.
    pub fn from_files(
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        Self::new().load_files(file_paths)
    }

    pub fn add_enum_type(mut self, decl: &(impl EnumTypeDeclaration + ?Sized)) -> Self {
        self.declarations.push(PendingTypeDeclaration::Enum(
            EnumTypeBuilder::from_declaration(decl),
        ));
        self
    }

    pub fn add_input_object_type(
        mut self,
        decl: &(impl InputObjectTypeDeclaration + ?Sized),
    ) -> Self {
        self.declarations.push(PendingTypeDeclaration::InputObject(
            InputObjectTypeBuilder::from_declaration(decl),
        ));
        self
    }

    pub fn add_scalar_type(mut self, decl: &(impl ScalarTypeDeclaration + ?Sized)) -> Self {
        self.declarations.push(PendingTypeDeclaration::Scalar(
            ScalarTypeBuilder::from_declaration(decl),
        ));
        self
    }

    /// Attach a coercer to a scalar type that is (or will be) loaded from SDL.
    ///
    /// A scalar declared through [`SchemaBuilder::add_scalar_type()`] with its
    /// own coercer keeps that coercer. SDL scalars without one fall back to
    /// passing raw values through unchanged.
    pub fn with_scalar_coercer(
        mut self,
        scalar_name: impl AsRef<str>,
        coercer: impl ScalarCoercer + 'static,
    ) -> Self {
        self.scalar_coercers.insert(
            scalar_name.as_ref().to_string(),
            Arc::new(coercer),
        );
        self
    }

    pub fn with_coercion_options(mut self, options: CoercionOptions) -> Self {
        self.coercion_options = options;
        self
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files([file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = std::fs::read_to_string(file_path).map_err(|err| {
                SchemaBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    err: err.to_string(),
                }
            })?;
            self = self.load_str(Some(file_path.to_path_buf()), file_content.as_str())?;
        }
        Ok(self)
    }

    /// Parse `content` as GraphQL SDL and queue every enum, input object, and
    /// scalar definition it contains.
    ///
    /// When `file_path` is `None`, definitions are attributed to a synthetic
    /// `str://N` path.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            ast::schema::parse::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: Some(file_path.to_owned()),
                    err: err.to_string(),
                })?.into_static();

        for def in &ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    /// Validate every queued declaration and freeze the result into a
    /// [`Schema`].
    ///
    /// Validation happens in passes: type registration and per-type
    /// structure, then type references, then input-object cycles. Every
    /// problem from those passes is reported together. Default values are
    /// only checked once the schema is otherwise sound, since coercing them
    /// relies on resolvable, acyclic types.
    pub fn build(self) -> std::result::Result<Schema, SchemaBuildErrors> {
        let mut registry = TypeRegistry::new();
        let mut errors = vec![];

        for (type_name, type_loc) in self.output_types {
            if let Err(err) = registry.register_output_type(type_name.as_str(), type_loc) {
                errors.push(err);
            }
        }

        let mut structural_errors = vec![];
        for decl in self.declarations {
            let decl = match decl {
                PendingTypeDeclaration::Scalar(mut builder) => {
                    if !builder.has_coercer()
                        && let Some(coercer) = self.scalar_coercers.get(builder.name()) {
                        builder.set_coercer(coercer.clone());
                    }
                    PendingTypeDeclaration::Scalar(builder)
                },
                decl => decl,
            };

            let (type_, mut type_errors) = decl.into_definition();
            structural_errors.append(&mut type_errors);
            if let Err(err) = registry.register(type_) {
                errors.push(err);
            }
        }

        errors.append(&mut registry.validate_references());

        let mut cycle_errors = InputObjectTypeValidator::new(&registry.types).validate_cycles();
        let cycle_type_names: Vec<String> =
            cycle_errors.iter()
                .filter_map(|err| match err {
                    SchemaBuildError::CircularInputFieldChain { type_names, .. } =>
                        Some(type_names.iter().cloned()),
                    _ => None,
                })
                .flatten()
                .collect();
        errors.append(&mut cycle_errors);
        errors.append(&mut structural_errors);

        // Defaults are checked even when earlier passes failed; only types
        // already implicated in those failures are left out.
        let cycle_type_names: HashSet<&str> =
            cycle_type_names.iter().map(String::as_str).collect();
        errors.append(&mut InputObjectTypeValidator::new(&registry.types).validate_default_values(
            self.coercion_options,
            &cycle_type_names,
        ));

        if !errors.is_empty() {
            log::debug!("Schema build failed with {} error(s).", errors.len());
            return Err(SchemaBuildErrors::new(errors));
        }

        log::debug!("Built a schema with {} type(s).", registry.types.len());
        Ok(registry.into_schema(self.coercion_options))
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: &ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),

            Definition::SchemaDefinition(_) => {
                log::debug!("Ignoring schema definition block in {}.", file_path.display());
                Ok(())
            },

            Definition::TypeExtension(_) => {
                log::warn!(
                    "Type extensions are not supported; ignoring one found in {}.",
                    file_path.display(),
                );
                Ok(())
            },

            Definition::DirectiveDefinition(directive_def) => {
                log::debug!(
                    "Ignoring definition of the `@{}` directive in {}.",
                    directive_def.name,
                    file_path.display(),
                );
                Ok(())
            },
        }
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let decl = match type_def {
            TypeDefinition::Enum(enum_def) => PendingTypeDeclaration::Enum(
                EnumTypeBuilder::from_ast(file_path, enum_def)?,
            ),

            TypeDefinition::InputObject(inputobj_def) => PendingTypeDeclaration::InputObject(
                InputObjectTypeBuilder::from_ast(file_path, inputobj_def)?,
            ),

            TypeDefinition::Scalar(scalar_def) => PendingTypeDeclaration::Scalar(
                ScalarTypeBuilder::from_ast(file_path, scalar_def)?,
            ),

            TypeDefinition::Interface(ast::schema::InterfaceType { name, position, .. })
            | TypeDefinition::Object(ast::schema::ObjectType { name, position, .. })
            | TypeDefinition::Union(ast::schema::UnionType { name, position, .. }) => {
                log::trace!("Skipping output type `{name}`.");
                self.output_types.push((
                    name.to_string(),
                    types::ast_def_location(file_path, *position),
                ));
                return Ok(());
            },
        };

        self.declarations.push(decl);
        Ok(())
    }
}
impl std::fmt::Debug for SchemaBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("coercion_options", &self.coercion_options)
            .field("declarations", &self.declarations)
            .field("output_types", &self.output_types)
            .field("scalar_coercers", &self.scalar_coercers.keys().collect::<Vec<_>>())
            .field("str_load_counter", &self.str_load_counter)
            .finish()
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
