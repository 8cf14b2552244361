use crate::coercion::builtin_scalars;
use crate::coercion::CoercedValue;
use crate::coercion::CoercionError;
use crate::coercion::CoercionErrorKind;
use crate::coercion::CoercionOptions;
use crate::coercion::InputPath;
use crate::coercion::ListCoercion;
use crate::coercion::PathSegment;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, Vec<CoercionError>>;

/// Validates and coerces raw input [`Value`]s against the types of a
/// [`Schema`].
///
/// Coercion never stops at the first problem: every invalid field, list
/// element, or scalar anywhere within the raw value is reported, each tagged
/// with its [`InputPath`]. A coercer holds no mutable state, so a single
/// [`Schema`] can be shared by any number of coercers across threads.
#[derive(Clone, Copy, Debug)]
pub struct InputValueCoercer<'schema> {
    expand_defaults: bool,
    options: CoercionOptions,
    types: &'schema IndexMap<String, GraphQLType>,
}
impl<'schema> InputValueCoercer<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self::from_types_map(&schema.types, schema.coercion_options)
    }

    pub(crate) fn from_types_map(
        types: &'schema IndexMap<String, GraphQLType>,
        options: CoercionOptions,
    ) -> Self {
        Self {
            expand_defaults: true,
            options,
            types,
        }
    }

    /// Leave absent fields that carry a default value out of the result
    /// instead of substituting their default. Each default is checked on its
    /// own when a schema is built, so a default literal only has to be valid
    /// for the fields it actually spells out.
    pub(crate) fn without_default_expansion(mut self) -> Self {
        self.expand_defaults = false;
        self
    }

    /// Coerce `raw` against `type_annotation`, reporting errors relative to
    /// the root of `raw`.
    pub fn coerce(
        &self,
        type_annotation: &TypeAnnotation,
        raw: &Value,
    ) -> Result<CoercedValue> {
        self.coerce_at(type_annotation, raw, &InputPath::root())
    }

    /// Like [`InputValueCoercer::coerce()`], except every reported error's
    /// path is prefixed with `path`. Useful when `raw` is itself nested inside
    /// some larger document (e.g. an argument named `input`).
    pub fn coerce_at(
        &self,
        type_annotation: &TypeAnnotation,
        raw: &Value,
        path: &InputPath,
    ) -> Result<CoercedValue> {
        let mut walk = CoercionWalk::new(self, path);
        let coerced = walk.coerce_annotated(type_annotation, raw);
        walk.finish(coerced)
    }

    /// Coerce `raw` directly against a definition object. The definition is
    /// treated as a nullable position: a raw `null` coerces to
    /// [`CoercedValue::Null`].
    pub fn coerce_type(
        &self,
        type_: &GraphQLType,
        raw: &Value,
        path: &InputPath,
    ) -> Result<CoercedValue> {
        let mut walk = CoercionWalk::new(self, path);
        let coerced =
            if raw.is_null() {
                Some(CoercedValue::Null)
            } else {
                walk.coerce_named(type_, raw)
            };
        walk.finish(coerced)
    }

    pub fn options(&self) -> &CoercionOptions {
        &self.options
    }

    pub fn with_options(mut self, options: CoercionOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Clone, Copy, Debug)]
enum PathSegmentRef<'a> {
    Field(&'a str),
    Index(usize),
}

/// State for one recursive coercion walk: the path to the value currently
/// being visited and every error found so far.
///
/// Segments are borrowed from the schema and the raw value; an owned
/// [`InputPath`] is only materialized when an error is recorded.
struct CoercionWalk<'a> {
    /// (type name, field name) pairs whose default values are currently being
    /// expanded.
    active_defaults: Vec<(&'a str, &'a str)>,
    base_path: &'a InputPath,
    errors: Vec<CoercionError>,
    expand_defaults: bool,
    options: CoercionOptions,
    path: Vec<PathSegmentRef<'a>>,
    types: &'a IndexMap<String, GraphQLType>,
}
impl<'a> CoercionWalk<'a> {
    fn new(coercer: &InputValueCoercer<'a>, base_path: &'a InputPath) -> Self {
        Self {
            active_defaults: vec![],
            base_path,
            errors: vec![],
            expand_defaults: coercer.expand_defaults,
            options: coercer.options,
            path: vec![],
            types: coercer.types,
        }
    }

    fn finish(self, coerced: Option<CoercedValue>) -> Result<CoercedValue> {
        match coerced {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }

    fn record_error(&mut self, kind: CoercionErrorKind) {
        let mut path = InputPath::with_capacity(
            self.base_path.segments().len() + self.path.len(),
        );
        for segment in self.base_path.segments() {
            path.push(segment.clone());
        }
        for segment in &self.path {
            path.push(match segment {
                PathSegmentRef::Field(name) => PathSegment::Field(name.to_string()),
                PathSegmentRef::Index(idx) => PathSegment::Index(*idx),
            });
        }
        self.errors.push(CoercionError::new(path, kind));
    }

    fn coerce_annotated(
        &mut self,
        type_annotation: &'a TypeAnnotation,
        raw: &'a Value,
    ) -> Option<CoercedValue> {
        match type_annotation {
            TypeAnnotation::NonNull(inner) => {
                if raw.is_null() {
                    self.record_error(CoercionErrorKind::NullValue {
                        type_annotation: type_annotation.to_string(),
                    });
                    None
                } else {
                    self.coerce_annotated(inner, raw)
                }
            },

            _ if raw.is_null() =>
                Some(CoercedValue::Null),

            TypeAnnotation::List(inner) =>
                self.coerce_list(type_annotation, inner, raw),

            TypeAnnotation::Named(type_ref) => match self.types.get(type_ref.name()) {
                Some(type_) => self.coerce_named(type_, raw),
                None => {
                    self.record_error(CoercionErrorKind::UndefinedType {
                        type_name: type_ref.name().to_string(),
                    });
                    None
                },
            },
        }
    }

    fn coerce_list(
        &mut self,
        list_annotation: &'a TypeAnnotation,
        inner_annotation: &'a TypeAnnotation,
        raw: &'a Value,
    ) -> Option<CoercedValue> {
        let Value::List(raw_items) = raw else {
            return match self.options.list_coercion {
                ListCoercion::WrapSingleValue =>
                    self.coerce_annotated(inner_annotation, raw)
                        .map(|item| CoercedValue::List(vec![item])),

                ListCoercion::RequireList => {
                    self.record_error(CoercionErrorKind::ExpectedList {
                        type_annotation: list_annotation.to_string(),
                        found: raw.kind_name().to_string(),
                    });
                    None
                },
            };
        };

        let mut items = Vec::with_capacity(raw_items.len());
        let mut failed = false;
        for (idx, raw_item) in raw_items.iter().enumerate() {
            self.path.push(PathSegmentRef::Index(idx));
            match self.coerce_annotated(inner_annotation, raw_item) {
                Some(item) => items.push(item),
                None => failed = true,
            }
            self.path.pop();
        }

        (!failed).then_some(CoercedValue::List(items))
    }

    /// Coerce a non-null raw value against a named type.
    fn coerce_named(
        &mut self,
        type_: &'a GraphQLType,
        raw: &'a Value,
    ) -> Option<CoercedValue> {
        let scalar_result = match type_ {
            GraphQLType::Enum(enum_type) =>
                return self.coerce_enum(enum_type, raw),
            GraphQLType::InputObject(input_obj_type) =>
                return self.coerce_input_object(input_obj_type, raw),

            GraphQLType::Bool => builtin_scalars::coerce_boolean(raw),
            GraphQLType::Float => builtin_scalars::coerce_float(raw),
            GraphQLType::ID => builtin_scalars::coerce_id(raw),
            GraphQLType::Int => builtin_scalars::coerce_int(raw),
            GraphQLType::String => builtin_scalars::coerce_string(raw),
            GraphQLType::Scalar(scalar_type) =>
                scalar_type.coercer().coerce_scalar(raw),
        };

        match scalar_result {
            Ok(value) => Some(CoercedValue::Scalar(value)),
            Err(message) => {
                self.record_error(CoercionErrorKind::ScalarCoercion {
                    scalar_name: type_.name().to_string(),
                    message,
                });
                None
            },
        }
    }

    fn coerce_enum(
        &mut self,
        enum_type: &'a EnumType,
        raw: &'a Value,
    ) -> Option<CoercedValue> {
        // Enum literals arrive as `Value::Enum` from GraphQL syntax and as
        // plain strings from JSON-like payloads.
        let raw_name = match raw {
            Value::Enum(name) | Value::String(name) => Some(name.as_str()),
            _ => None,
        };

        if let Some(enum_value) = raw_name.and_then(|name| enum_type.value(name)) {
            return Some(CoercedValue::Enum(enum_value.name().to_string()));
        }

        self.record_error(CoercionErrorKind::EnumMismatch {
            enum_name: enum_type.name().to_string(),
            value: raw_name.map(str::to_string).unwrap_or_else(|| raw.to_string()),
            valid_values: enum_type.values().keys().cloned().collect(),
        });
        None
    }

    fn coerce_input_object(
        &mut self,
        input_obj_type: &'a InputObjectType,
        raw: &'a Value,
    ) -> Option<CoercedValue> {
        let Value::Object(raw_entries) = raw else {
            self.record_error(CoercionErrorKind::ExpectedInputObject {
                type_name: input_obj_type.name().to_string(),
                found: raw.kind_name().to_string(),
            });
            return None;
        };

        let fields = input_obj_type.fields();
        let mut coerced_fields = IndexMap::with_capacity(fields.len());
        let mut failed = false;
        for (field_name, field) in fields {
            self.path.push(PathSegmentRef::Field(field_name.as_str()));
            let coerced_field = match (raw_entries.get(field_name), field.default_value()) {
                (Some(raw_field_value), _) =>
                    Some(self.coerce_annotated(field.type_annotation(), raw_field_value)),

                (None, Some(default_value)) if self.expand_defaults =>
                    Some(self.coerce_default_value(input_obj_type, field, default_value)),

                (None, Some(_)) => None,

                (None, None) if field.type_annotation().is_non_null() => {
                    self.record_error(CoercionErrorKind::MissingRequiredField {
                        type_name: input_obj_type.name().to_string(),
                        field_name: field_name.to_string(),
                        type_annotation: field.type_annotation().to_string(),
                    });
                    Some(None)
                },

                // Absent nullable fields without a default stay absent.
                (None, None) => None,
            };
            self.path.pop();

            match coerced_field {
                Some(Some(value)) => {
                    coerced_fields.insert(field_name.to_string(), value);
                },
                Some(None) => failed = true,
                None => (),
            }
        }

        for raw_field_name in raw_entries.keys() {
            if !fields.contains_key(raw_field_name) {
                self.path.push(PathSegmentRef::Field(raw_field_name.as_str()));
                self.record_error(CoercionErrorKind::UnknownField {
                    type_name: input_obj_type.name().to_string(),
                    field_name: raw_field_name.to_string(),
                });
                self.path.pop();
                failed = true;
            }
        }

        (!failed).then_some(CoercedValue::InputObject(coerced_fields))
    }

    fn coerce_default_value(
        &mut self,
        input_obj_type: &'a InputObjectType,
        field: &'a InputField,
        default_value: &'a Value,
    ) -> Option<CoercedValue> {
        let key = (input_obj_type.name(), field.name());
        if self.active_defaults.contains(&key) {
            self.record_error(CoercionErrorKind::DefaultValueCycle {
                type_name: key.0.to_string(),
                field_name: key.1.to_string(),
            });
            return None;
        }

        self.active_defaults.push(key);
        let coerced = self.coerce_annotated(field.type_annotation(), default_value);
        self.active_defaults.pop();
        coerced
    }
}
