use crate::coercion::CoercionOptions;
use crate::loc;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The in-progress, mutable mapping from type name to definition that a
/// [`SchemaBuilder`](crate::schema::SchemaBuilder) populates. Once every
/// check has passed it is frozen into a [`Schema`] via
/// [`TypeRegistry::into_schema()`].
#[derive(Debug)]
pub(crate) struct TypeRegistry {
    /// Names of output (object, interface, union) types seen while loading
    /// SDL. These aren't modelled, but remembering them lets input fields
    /// that refer to them fail with a more precise error.
    output_types: IndexMap<String, loc::SourceLocation>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            output_types: IndexMap::new(),
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn register(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name().to_string();
        self.check_new_type_name(type_name.as_str(), type_.def_location())?;

        log::trace!("Registered the `{type_name}` type.");
        self.types.insert(type_name, type_);
        Ok(())
    }

    pub fn register_output_type(
        &mut self,
        type_name: &str,
        type_loc: loc::SourceLocation,
    ) -> Result<()> {
        self.check_new_type_name(type_name, &type_loc)?;
        self.output_types.insert(type_name.to_string(), type_loc);
        Ok(())
    }

    fn check_new_type_name(
        &self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if !crate::types::is_valid_name(type_name) {
            return Err(SchemaBuildError::InvalidTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        let conflicting_loc =
            self.types.get(type_name)
                .map(|conflicting_type| conflicting_type.def_location())
                .or_else(|| self.output_types.get(type_name));
        if let Some(conflicting_loc) = conflicting_loc {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_loc.to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        Ok(())
    }

    /// Bind the inner-most named type of `type_annotation` to its
    /// registered definition.
    pub fn resolve(
        &self,
        type_annotation: &TypeAnnotation,
    ) -> std::result::Result<&GraphQLType, DerefByNameError> {
        let type_name = type_annotation.innermost_type_name();
        self.types.get(type_name).ok_or_else(
            || DerefByNameError::DanglingReference(type_name.to_string()),
        )
    }

    /// Resolve every input field's type reference, returning one error per
    /// reference that doesn't name a registered input type.
    pub fn validate_references(&self) -> Vec<SchemaBuildError> {
        let mut errors = vec![];
        for input_obj_type in self.types.values().filter_map(GraphQLType::as_input_object) {
            for (field_name, field) in input_obj_type.fields() {
                let Err(DerefByNameError::DanglingReference(type_name)) =
                    self.resolve(field.type_annotation()) else {
                    continue
                };

                errors.push(
                    if self.output_types.contains_key(type_name.as_str()) {
                        SchemaBuildError::InvalidInputFieldWithOutputType {
                            parent_type_name: input_obj_type.name().to_string(),
                            field_name: field_name.to_string(),
                            invalid_type_name: type_name,
                        }
                    } else {
                        SchemaBuildError::UndefinedTypeName {
                            parent_type_name: input_obj_type.name().to_string(),
                            field_name: field_name.to_string(),
                            undefined_type_name: type_name,
                        }
                    }
                );
            }
        }
        errors
    }

    pub fn into_schema(self, coercion_options: CoercionOptions) -> Schema {
        Schema {
            coercion_options,
            types: self.types,
        }
    }
}
