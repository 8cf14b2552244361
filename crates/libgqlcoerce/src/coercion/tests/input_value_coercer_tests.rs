use crate::coercion::CoercedValue;
use crate::coercion::CoercionError;
use crate::coercion::CoercionErrorKind;
use crate::coercion::CoercionOptions;
use crate::coercion::InputPath;
use crate::coercion::ListCoercion;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::EnumTypeBuilder;
use crate::types::EnumValueDeclaration;
use crate::types::GraphQLType;
use crate::types::InputFieldDeclaration;
use crate::types::InputObjectTypeBuilder;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use rayon::prelude::*;

type Result<T> = std::result::Result<T, Vec<CoercionError>>;

fn test_schema(list_coercion: ListCoercion) -> Schema {
    SchemaBuilder::new()
        .with_coercion_options(CoercionOptions::default().with_list_coercion(list_coercion))
        .add_enum_type(&EnumTypeBuilder::new("Color")
            .value("RED")
            .value("GREEN")
            .value(EnumValueDeclaration::new("BLUE").deprecated("Use NAVY"))
            .value("NAVY"))
        .add_scalar_type(&ScalarTypeBuilder::new("Email").with_coercer(|raw: &Value| {
            match raw.as_str() {
                Some(s) if s.contains('@') => Ok(Value::String(s.to_lowercase())),
                Some(s) => Err(format!("`{s}` is not an email address")),
                None => Err(format!("expected a string, found {}", raw.kind_name())),
            }
        }))
        .add_input_object_type(&InputObjectTypeBuilder::new("InputPoint")
            .field(InputFieldDeclaration::new("x", TypeAnnotation::named("Int")).required())
            .field(InputFieldDeclaration::new("y", TypeAnnotation::named("Int")).required()))
        .add_input_object_type(&InputObjectTypeBuilder::new("Shape")
            .field(InputFieldDeclaration::new("name", TypeAnnotation::named("String")).required())
            .field(InputFieldDeclaration::new(
                "points",
                TypeAnnotation::list(TypeAnnotation::named("InputPoint").non_null()).non_null(),
            ))
            .field(
                InputFieldDeclaration::new("color", TypeAnnotation::named("Color"))
                    .with_default_value(Value::Enum("RED".to_string())),
            )
            .field(InputFieldDeclaration::new("tags", TypeAnnotation::list(TypeAnnotation::named("String"))))
            .field(InputFieldDeclaration::new("owner", TypeAnnotation::named("Email"))))
        .build()
        .expect("test schema builds")
}

fn object(entries: &[(&str, Value)]) -> Value {
    Value::Object(
        entries.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect(),
    )
}

fn point(x: i64, y: i64) -> Value {
    object(&[("x", Value::Int(x)), ("y", Value::Int(y))])
}

fn coerce(schema: &Schema, annotation: &str, raw: &Value) -> Result<CoercedValue> {
    let type_annotation = TypeAnnotation::parse(annotation).expect("valid annotation");
    schema.coerce(&type_annotation, raw)
}

fn kinds(errors: &[CoercionError]) -> Vec<(String, &CoercionErrorKind)> {
    errors.iter()
        .map(|err| (err.path().to_string(), err.kind()))
        .collect()
}

mod enums {
    use super::*;

    #[test]
    fn enum_accepts_enum_literals_and_strings() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        assert_eq!(
            coerce(&schema, "Color", &Value::Enum("RED".to_string()))?,
            CoercedValue::Enum("RED".to_string()),
        );
        assert_eq!(
            coerce(&schema, "Color!", &Value::from("GREEN"))?,
            CoercedValue::Enum("GREEN".to_string()),
        );
        Ok(())
    }

    #[test]
    fn deprecated_values_still_coerce() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        assert_eq!(
            coerce(&schema, "Color", &Value::from("BLUE"))?.as_enum(),
            Some("BLUE"),
        );
        Ok(())
    }

    #[test]
    fn unknown_member_lists_valid_values() {
        let schema = test_schema(ListCoercion::default());
        let errors = coerce(&schema, "Color", &Value::from("PURPLE")).unwrap_err();
        assert_eq!(errors, vec![CoercionError::new(
            InputPath::root(),
            CoercionErrorKind::EnumMismatch {
                enum_name: "Color".to_string(),
                value: "PURPLE".to_string(),
                valid_values: vec![
                    "RED".to_string(),
                    "GREEN".to_string(),
                    "BLUE".to_string(),
                    "NAVY".to_string(),
                ],
            },
        )]);
    }

    #[test]
    fn enum_member_names_are_case_sensitive() {
        let schema = test_schema(ListCoercion::default());
        assert!(coerce(&schema, "Color", &Value::from("red")).is_err());
    }

    #[test]
    fn non_string_enum_input_is_rendered_in_error() {
        let schema = test_schema(ListCoercion::default());
        let errors = coerce(&schema, "Color", &Value::Int(1)).unwrap_err();
        assert!(matches!(
            errors[0].kind(),
            CoercionErrorKind::EnumMismatch { value, .. } if value == "1",
        ));
    }
}

mod input_objects {
    use super::*;

    #[test]
    fn valid_point_coerces_in_declared_field_order() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        let raw = object(&[("y", Value::Int(2)), ("x", Value::Int(1))]);
        let coerced = coerce(&schema, "InputPoint!", &raw)?;

        assert_eq!(coerced, CoercedValue::InputObject(IndexMap::from([
            ("x".to_string(), CoercedValue::Scalar(Value::Int(1))),
            ("y".to_string(), CoercedValue::Scalar(Value::Int(2))),
        ])));
        Ok(())
    }

    #[test]
    fn every_field_error_is_reported() {
        let schema = test_schema(ListCoercion::default());
        let raw = object(&[("x", Value::from("one"))]);
        let errors = coerce(&schema, "InputPoint", &raw).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(matches!(
            kinds(&errors).as_slice(),
            [
                (x_path, CoercionErrorKind::ScalarCoercion { scalar_name, .. }),
                (y_path, CoercionErrorKind::MissingRequiredField { field_name, .. }),
            ] if x_path == "x" && scalar_name == "Int" && y_path == "y" && field_name == "y",
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let schema = test_schema(ListCoercion::default());
        let raw = object(&[("x", Value::Int(1)), ("y", Value::Int(2)), ("z", Value::Int(3))]);
        let errors = coerce(&schema, "InputPoint", &raw).unwrap_err();

        assert_eq!(errors, vec![CoercionError::new(
            InputPath::root().field("z"),
            CoercionErrorKind::UnknownField {
                type_name: "InputPoint".to_string(),
                field_name: "z".to_string(),
            },
        )]);
    }

    #[test]
    fn non_object_input_is_rejected() {
        let schema = test_schema(ListCoercion::default());
        let errors = coerce(&schema, "InputPoint", &Value::Int(1)).unwrap_err();
        assert_eq!(errors, vec![CoercionError::new(
            InputPath::root(),
            CoercionErrorKind::ExpectedInputObject {
                type_name: "InputPoint".to_string(),
                found: "integer".to_string(),
            },
        )]);
    }

    #[test]
    fn defaults_fill_absent_fields_and_absent_nullables_are_omitted() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        let raw = object(&[
            ("name", Value::from("triangle")),
            ("points", Value::List(vec![point(0, 0), point(1, 0), point(0, 1)])),
        ]);
        let coerced = coerce(&schema, "Shape", &raw)?;
        let fields = coerced.as_input_object().expect("coerced to an input object");

        assert_eq!(
            fields.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["name", "points", "color"],
        );
        assert_eq!(fields.get("color"), Some(&CoercedValue::Enum("RED".to_string())));
        assert_eq!(fields.get("points").and_then(CoercedValue::as_list).map(<[_]>::len), Some(3));
        Ok(())
    }

    #[test]
    fn explicit_null_is_kept_for_nullable_fields() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        let raw = object(&[
            ("name", Value::from("empty")),
            ("points", Value::List(vec![])),
            ("color", Value::Null),
        ]);
        let coerced = coerce(&schema, "Shape", &raw)?;
        assert_eq!(
            coerced.as_input_object().and_then(|fields| fields.get("color")),
            Some(&CoercedValue::Null),
        );
        Ok(())
    }

    #[test]
    fn explicit_null_for_required_field_is_a_null_value_error() {
        let schema = test_schema(ListCoercion::default());
        let raw = object(&[("x", Value::Null), ("y", Value::Int(1))]);
        let errors = coerce(&schema, "InputPoint", &raw).unwrap_err();
        assert_eq!(errors, vec![CoercionError::new(
            InputPath::root().field("x"),
            CoercionErrorKind::NullValue {
                type_annotation: "Int!".to_string(),
            },
        )]);
    }

    #[test]
    fn nested_errors_carry_full_path() {
        let schema = test_schema(ListCoercion::default());
        let raw = object(&[
            ("name", Value::from("bad")),
            ("points", Value::List(vec![
                point(0, 0),
                object(&[("x", Value::from("nope")), ("y", Value::Int(0))]),
            ])),
            ("owner", Value::from("nobody")),
        ]);
        let errors = coerce(&schema, "Shape", &raw).unwrap_err();

        let paths: Vec<String> = errors.iter().map(|err| err.path().to_string()).collect();
        assert_eq!(paths, vec!["points[1].x", "owner"]);
        assert!(matches!(
            errors[1].kind(),
            CoercionErrorKind::ScalarCoercion { scalar_name, message }
                if scalar_name == "Email" && message == "`nobody` is not an email address",
        ));
    }

    #[test]
    fn coerce_at_prefixes_error_paths() {
        let schema = test_schema(ListCoercion::default());
        let base = InputPath::root().field("input");
        let errors = schema.coercer()
            .coerce_at(&TypeAnnotation::named("InputPoint"), &object(&[]), &base)
            .unwrap_err();

        let paths: Vec<String> = errors.iter().map(|err| err.path().to_string()).collect();
        assert_eq!(paths, vec!["input.x", "input.y"]);
    }
}

mod lists {
    use super::*;

    #[test]
    fn single_value_is_wrapped_by_default() -> Result<()> {
        let schema = test_schema(ListCoercion::WrapSingleValue);
        assert_eq!(
            coerce(&schema, "[Int]", &Value::Int(1))?,
            CoercedValue::List(vec![CoercedValue::Scalar(Value::Int(1))]),
        );
        assert_eq!(
            coerce(&schema, "[[Int]]", &Value::Int(1))?,
            CoercedValue::List(vec![
                CoercedValue::List(vec![CoercedValue::Scalar(Value::Int(1))]),
            ]),
        );
        Ok(())
    }

    #[test]
    fn null_is_not_wrapped() -> Result<()> {
        let schema = test_schema(ListCoercion::WrapSingleValue);
        assert_eq!(coerce(&schema, "[Int]", &Value::Null)?, CoercedValue::Null);
        assert!(coerce(&schema, "[Int]!", &Value::Null).is_err());
        Ok(())
    }

    #[test]
    fn single_value_is_rejected_when_lists_are_required() {
        let schema = test_schema(ListCoercion::RequireList);
        let errors = coerce(&schema, "[Int!]", &Value::Int(1)).unwrap_err();
        assert_eq!(errors, vec![CoercionError::new(
            InputPath::root(),
            CoercionErrorKind::ExpectedList {
                type_annotation: "[Int!]".to_string(),
                found: "integer".to_string(),
            },
        )]);
    }

    #[test]
    fn every_bad_element_is_reported() {
        let schema = test_schema(ListCoercion::default());
        let raw = Value::List(vec![
            Value::Int(1),
            Value::Null,
            Value::from("three"),
        ]);
        let errors = coerce(&schema, "[Int!]!", &raw).unwrap_err();

        let paths: Vec<String> = errors.iter().map(|err| err.path().to_string()).collect();
        assert_eq!(paths, vec!["[1]", "[2]"]);
        assert!(matches!(errors[0].kind(), CoercionErrorKind::NullValue { .. }));
    }

    #[test]
    fn nullable_elements_accept_null() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        let raw = Value::List(vec![Value::from("a"), Value::Null]);
        assert_eq!(
            coerce(&schema, "[String]", &raw)?,
            CoercedValue::List(vec![
                CoercedValue::Scalar(Value::from("a")),
                CoercedValue::Null,
            ]),
        );
        Ok(())
    }

    #[test]
    fn coercer_options_can_be_overridden() {
        let schema = test_schema(ListCoercion::WrapSingleValue);
        let strict = schema.coercer().with_options(
            CoercionOptions::default().with_list_coercion(ListCoercion::RequireList),
        );
        assert!(strict.coerce(&TypeAnnotation::parse("[Int]").unwrap(), &Value::Int(1)).is_err());
        assert!(schema.coerce(&TypeAnnotation::parse("[Int]").unwrap(), &Value::Int(1)).is_ok());
    }
}

mod scalars {
    use super::*;

    #[test]
    fn builtin_scalar_errors_name_the_scalar() {
        let schema = test_schema(ListCoercion::default());
        let errors = coerce(&schema, "Int", &Value::Int(1 << 40)).unwrap_err();
        assert!(matches!(
            errors[0].kind(),
            CoercionErrorKind::ScalarCoercion { scalar_name, .. } if scalar_name == "Int",
        ));
    }

    #[test]
    fn custom_scalar_output_replaces_raw_value() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        assert_eq!(
            coerce(&schema, "Email", &Value::from("Me@Example.com"))?,
            CoercedValue::Scalar(Value::from("me@example.com")),
        );
        Ok(())
    }

    #[test]
    fn undefined_type_in_annotation_is_reported() {
        let schema = test_schema(ListCoercion::default());
        let errors = coerce(&schema, "[Missing]", &Value::List(vec![Value::Int(1)])).unwrap_err();
        assert_eq!(errors, vec![CoercionError::new(
            InputPath::root().index(0),
            CoercionErrorKind::UndefinedType {
                type_name: "Missing".to_string(),
            },
        )]);
    }

    #[test]
    fn coerce_type_treats_definition_as_nullable() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        let color = schema.definition_for("Color").expect("Color is defined");
        let coercer = schema.coercer();
        let root = InputPath::root();
        assert_eq!(coercer.coerce_type(color, &Value::Null, &root)?, CoercedValue::Null);
        assert_eq!(
            coercer.coerce_type(&GraphQLType::Float, &Value::Int(2), &root)?,
            CoercedValue::Scalar(Value::Float(2.0)),
        );
        Ok(())
    }
}

mod external_values {
    use super::*;

    #[test]
    fn json_payloads_deserialize_into_values() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        let raw: Value = serde_json::from_value(serde_json::json!({
            "name": "square",
            "points": [{ "x": 0, "y": 0 }, { "x": 1, "y": 1 }],
            "color": "NAVY",
            "tags": "single",
        })).expect("valid json value");

        let coerced = coerce(&schema, "Shape!", &raw)?;
        assert_eq!(
            serde_json::to_value(&coerced).expect("serializes"),
            serde_json::json!({
                "name": "square",
                "points": [{ "x": 0, "y": 0 }, { "x": 1, "y": 1 }],
                "color": "NAVY",
                "tags": ["single"],
            }),
        );
        Ok(())
    }

    #[test]
    fn coercing_coerced_output_is_idempotent() -> Result<()> {
        let schema = test_schema(ListCoercion::default());
        let raw = object(&[
            ("name", Value::from("line")),
            ("points", point(0, 0)),
            ("tags", Value::from("a")),
        ]);
        let once = coerce(&schema, "Shape", &raw)?;

        let round_tripped: Value = serde_json::from_value(
            serde_json::to_value(&once).expect("serializes"),
        ).expect("deserializes");
        let twice = coerce(&schema, "Shape", &round_tripped)?;
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn schema_is_shareable_across_threads() {
        let schema = test_schema(ListCoercion::default());
        let annotation = TypeAnnotation::parse("InputPoint!").unwrap();

        let results: Vec<Result<CoercedValue>> =
            (0..256i64).into_par_iter()
                .map(|idx| {
                    let raw =
                        if idx % 2 == 0 {
                            point(idx, -idx)
                        } else {
                            object(&[("x", Value::Int(idx))])
                        };
                    schema.coerce(&annotation, &raw)
                })
                .collect();

        for (idx, result) in results.iter().enumerate() {
            assert_eq!(result.is_ok(), idx % 2 == 0, "unexpected result at {idx}");
        }
    }
}

mod default_values {
    use super::*;

    fn labeled_point_schema() -> Schema {
        SchemaBuilder::new()
            .add_input_object_type(&InputObjectTypeBuilder::new("InputPoint")
                .field(InputFieldDeclaration::new("x", TypeAnnotation::named("Int")).required())
                .field(InputFieldDeclaration::new("y", TypeAnnotation::named("Int")).required())
                .field(
                    InputFieldDeclaration::new("label", TypeAnnotation::named("String"))
                        .with_default_value("origin"),
                ))
            .build()
            .expect("schema builds")
    }

    #[test]
    fn absent_field_takes_its_default() -> Result<()> {
        let schema = labeled_point_schema();
        let coerced = coerce(&schema, "InputPoint", &point(1, 2))?;
        assert_eq!(coerced, CoercedValue::InputObject(IndexMap::from([
            ("x".to_string(), CoercedValue::Scalar(Value::Int(1))),
            ("y".to_string(), CoercedValue::Scalar(Value::Int(2))),
            ("label".to_string(), CoercedValue::Scalar(Value::from("origin"))),
        ])));
        Ok(())
    }

    #[test]
    fn missing_required_field_is_reported_once() {
        let schema = labeled_point_schema();
        let errors = coerce(&schema, "InputPoint", &object(&[("x", Value::Int(1))]))
            .unwrap_err();
        assert_eq!(errors, vec![CoercionError::new(
            InputPath::root().field("y"),
            CoercionErrorKind::MissingRequiredField {
                type_name: "InputPoint".to_string(),
                field_name: "y".to_string(),
                type_annotation: "Int!".to_string(),
            },
        )]);
    }

    #[test]
    fn nested_defaults_are_coerced_recursively() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "input Inner { depth: Int = 1 }\n",
                "input Outer { inner: Inner = {} }\n",
            ))
            .expect("parses")
            .build()
            .expect("builds");

        let coerced = coerce(&schema, "Outer", &object(&[]))?;
        let inner = coerced.as_input_object()
            .and_then(|fields| fields.get("inner"))
            .and_then(CoercedValue::as_input_object)
            .expect("inner default applied");
        assert_eq!(inner.get("depth"), Some(&CoercedValue::Scalar(Value::Int(1))));
        Ok(())
    }
}
