use crate::coercion::CoercionOptions;
use crate::coercion::InputPath;
use crate::coercion::InputValueCoercer;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
enum VisitState {
    InProgress,
    Done,
}

/// Whole-schema checks over the input object types of a fully populated type
/// map.
pub(crate) struct InputObjectTypeValidator<'a> {
    errors: Vec<SchemaBuildError>,
    /// Stack of (type name, field name) edges followed from the DFS root.
    field_path: Vec<(&'a str, &'a str)>,
    types_map: &'a IndexMap<String, GraphQLType>,
    visit_states: HashMap<&'a str, VisitState>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(types_map: &'a IndexMap<String, GraphQLType>) -> Self {
        Self {
            errors: vec![],
            field_path: vec![],
            types_map,
            visit_states: HashMap::new(),
        }
    }

    /// Look for input-type cycles made up entirely of fields that a caller
    /// must always provide. No finite input value can satisfy such a chain.
    ///
    /// Each back edge found by the DFS is reported once as a
    /// [`SchemaBuildError::CircularInputFieldChain`].
    pub fn validate_cycles(mut self) -> Vec<SchemaBuildError> {
        let types_map = self.types_map;
        for (type_name, type_) in types_map {
            if let GraphQLType::InputObject(input_obj_type) = type_
                && !self.visit_states.contains_key(type_name.as_str()) {
                self.visit(input_obj_type);
            }
        }
        self.errors
    }

    fn visit(&mut self, input_obj_type: &'a InputObjectType) {
        let type_name = input_obj_type.name();
        self.visit_states.insert(type_name, VisitState::InProgress);

        for (field_name, field) in input_obj_type.fields() {
            if !is_unbreakable_edge(field) {
                continue;
            }

            let target_name = field.type_annotation().innermost_type_name();
            let Some(GraphQLType::InputObject(target_type)) =
                self.types_map.get(target_name) else {
                continue
            };

            self.field_path.push((type_name, field_name.as_str()));
            let target_state = self.visit_states.get(target_name).copied();
            match target_state {
                Some(VisitState::InProgress) => self.report_cycle(target_name),
                Some(VisitState::Done) => (),
                None => self.visit(target_type),
            }
            self.field_path.pop();
        }

        self.visit_states.insert(type_name, VisitState::Done);
    }

    fn report_cycle(&mut self, cycle_start: &str) {
        let start_idx =
            self.field_path.iter()
                .position(|(type_name, _)| *type_name == cycle_start)
                .unwrap_or(0);
        let cycle = &self.field_path[start_idx..];

        let mut circular_field_path: Vec<String> =
            cycle.iter()
                .map(|(type_name, field_name)| format!("{type_name}.{field_name}"))
                .collect();
        circular_field_path.push(cycle_start.to_string());

        log::debug!(
            "Found an unbreakable input object cycle: {}",
            circular_field_path.join(" -> "),
        );
        self.errors.push(SchemaBuildError::CircularInputFieldChain {
            circular_field_path,
            type_names: cycle.iter()
                .map(|(type_name, _)| type_name.to_string())
                .collect(),
        });
    }

    /// Coerce every declared default value against its field's type.
    ///
    /// Nested fields left out of a default literal are not filled in from
    /// their own defaults here; those are validated separately.
    ///
    /// Defaults whose type reaches (through input object fields) an
    /// unresolved name or one of `cycle_type_names` are skipped: those types
    /// already have errors of their own.
    pub fn validate_default_values(
        mut self,
        options: CoercionOptions,
        cycle_type_names: &HashSet<&str>,
    ) -> Vec<SchemaBuildError> {
        let unsound_types = self.unsound_input_object_types(cycle_type_names);
        let coercer = InputValueCoercer::from_types_map(self.types_map, options)
            .without_default_expansion();
        let root = InputPath::root();
        for input_obj_type in self.types_map.values().filter_map(GraphQLType::as_input_object) {
            for (field_name, field) in input_obj_type.fields() {
                let Some(default_value) = field.default_value() else {
                    continue
                };

                let field_type_name = field.type_annotation().innermost_type_name();
                if !self.types_map.contains_key(field_type_name)
                    || unsound_types.contains(field_type_name) {
                    log::trace!(
                        "Skipping the default value of `{}.{field_name}`.",
                        input_obj_type.name(),
                    );
                    continue;
                }

                if let Err(errors) = coercer.coerce_at(
                    field.type_annotation(),
                    default_value,
                    &root,
                ) {
                    self.errors.push(SchemaBuildError::InvalidDefaultValue {
                        type_name: input_obj_type.name().to_string(),
                        field_name: field_name.to_string(),
                        errors,
                    });
                }
            }
        }
        self.errors
    }

    /// Input object types that are part of a reported cycle, or that reach an
    /// unresolved name or such a cycle through their fields.
    fn unsound_input_object_types(
        &self,
        cycle_type_names: &HashSet<&str>,
    ) -> HashSet<&'a str> {
        let input_obj_types: Vec<&'a InputObjectType> =
            self.types_map.values()
                .filter_map(GraphQLType::as_input_object)
                .collect();

        let mut unsound: HashSet<&'a str> =
            input_obj_types.iter()
                .map(|input_obj_type| input_obj_type.name())
                .filter(|type_name| cycle_type_names.contains(*type_name))
                .collect();

        loop {
            let newly_unsound: Vec<&'a str> =
                input_obj_types.iter()
                    .filter(|input_obj_type| !unsound.contains(input_obj_type.name()))
                    .filter(|input_obj_type| {
                        input_obj_type.fields().values().any(|field| {
                            let type_name = field.type_annotation().innermost_type_name();
                            !self.types_map.contains_key(type_name)
                                || unsound.contains(type_name)
                        })
                    })
                    .map(|input_obj_type| input_obj_type.name())
                    .collect();

            if newly_unsound.is_empty() {
                return unsound;
            }
            unsound.extend(newly_unsound);
        }
    }
}

/// A field is an unbreakable link in a cycle if callers must always provide
/// it: non-null at the top level and without a default. List wrappers are
/// looked through.
fn is_unbreakable_edge(field: &InputField) -> bool {
    field.type_annotation().is_non_null() && field.default_value().is_none()
}
