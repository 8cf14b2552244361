use crate::ast;
use indexmap::IndexMap;

/// A raw, untyped input value as received from a caller (e.g. a decoded JSON
/// variables payload or a GraphQL literal) before it has been coerced against
/// any type.
///
/// [`Value`] deserializes from any self-describing serde format: `null`,
/// booleans, numbers, strings, sequences and maps map onto the obvious
/// variants. [`Value::Enum`] only ever comes from GraphQL literals (see
/// [`Value::from_const_ast()`]).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    #[serde(skip_deserializing)]
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short, human-readable name for the kind of this value. Used when
    /// rendering diagnostics like "expected an input object, found a list".
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Enum(_) => "enum value",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Convert a constant GraphQL literal (as found in SDL default values)
    /// into a [`Value`].
    ///
    /// Returns `Err` with the variable's name if a variable reference appears
    /// anywhere inside the literal, since those are not constants.
    pub(crate) fn from_const_ast(ast_value: &ast::Value) -> Result<Self, String> {
        Ok(match ast_value {
            ast::Value::Variable(var_name) =>
                return Err(var_name.to_string()),

            ast::Value::Int(value) =>
                Value::Int(value.as_i64().unwrap_or_default()),

            ast::Value::Float(value) =>
                Value::Float(*value),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Boolean(value) =>
                Value::Boolean(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::Value::List(values) =>
                Value::List(
                    values.iter()
                        .map(Value::from_const_ast)
                        .collect::<Result<Vec<_>, _>>()?,
                ),

            ast::Value::Object(entries) =>
                Value::Object(
                    entries.iter()
                        .map(|(key, ast_value)| {
                            Ok((key.clone(), Value::from_const_ast(ast_value)?))
                        })
                        .collect::<Result<IndexMap<_, _>, String>>()?,
                ),
        })
    }
}
impl std::fmt::Display for Value {
    /// Renders this [`Value`] using GraphQL literal syntax.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                if entries.is_empty() {
                    write!(f, "}}")
                } else {
                    write!(f, " }}")
                }
            },
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
