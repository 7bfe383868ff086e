//! Value types for VET arguments.
//!
//! A Value is the dynamic view of one call-site argument. VET supports
//! scalar types (Bool, Int, Float, String), sequences, and structured
//! values with ordered named fields; a structured value may additionally
//! self-report an application type name (see [`Value::Tagged`]).

use std::fmt;

/// Ordered named fields of a structured value.
///
/// Field order is the order the caller supplied. When a record stands in
/// for an argument collection, its field values are the arguments in
/// exactly that order.
pub type Fields = Vec<(String, Value)>;

/// A value checked against a constraint descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Structured value with ordered named fields.
    Record(Fields),
    /// Structured value that self-reports its logical type name.
    ///
    /// The class name must be non-empty; the evaluator reports an empty
    /// name as a broken tag contract.
    Tagged {
        /// Logical type name, matched against `typ` descriptors.
        class: String,
        /// Ordered named fields.
        fields: Fields,
    },
}

impl Value {
    /// Create a tagged value from a class name and fields.
    pub fn tagged(class: impl Into<String>, fields: Fields) -> Self {
        Value::Tagged {
            class: class.into(),
            fields,
        }
    }

    /// Create a tagged value from an application type.
    pub fn of(value: &impl Classed) -> Self {
        Value::tagged(value.class(), value.fields())
    }

    /// Returns true if this is the missing value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a structured value (list, record, or
    /// tagged), as opposed to a scalar or the missing value.
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            Value::List(_) | Value::Record(_) | Value::Tagged { .. }
        )
    }

    /// Returns the runtime type name of this value.
    ///
    /// Tagged values are plain `"object"` here; their class name is a
    /// separate, logical type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "array",
            Value::Record(_) => "object",
            Value::Tagged { .. } => "object",
        }
    }

    /// Look up a named field. Returns `None` for values without fields.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) | Value::Tagged { fields, .. } => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Ordered member values of a structured value: list elements, or
    /// record and tagged field values in field order. Returns `None`
    /// for non-structured values.
    pub fn items(&self) -> Option<Vec<&Value>> {
        match self {
            Value::List(items) => Some(items.iter().collect()),
            Value::Record(fields) | Value::Tagged { fields, .. } => {
                Some(fields.iter().map(|(_, value)| value).collect())
            }
            _ => None,
        }
    }

    /// Single-or-array normalization: a list borrows its elements, any
    /// other value is treated as a one-element list of itself.
    pub fn as_list(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(fields) => write_fields(f, fields),
            Value::Tagged { class, fields } => {
                write!(f, "{} ", class)?;
                write_fields(f, fields)
            }
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &Fields) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (name, value)) in fields.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: {}", name, value)?;
    }
    write!(f, "}}")
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Capability for application types that self-report a logical type
/// name, matched against `typ` descriptors.
pub trait Classed {
    /// The logical type name. Must be non-empty.
    fn class(&self) -> String;

    /// Ordered fields exposed to required-field checks.
    fn fields(&self) -> Fields {
        Fields::new()
    }
}

/// Helper macro to create record values.
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::Record(Vec::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Value::Record(vec![
            $(($key.to_string(), $crate::Value::from($value))),+
        ])
    };
}
