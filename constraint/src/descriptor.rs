//! Descriptor construction.

use vet_core::{Fields, Value};

/// Fluent builder for one constraint descriptor.
///
/// A descriptor is a record value with any subset of the `typ`, `opt`,
/// `not`, and `has` fields, applied to the argument at the same
/// position. The builder produces well-formed records; descriptors can
/// also be assembled by hand when they come from data rather than code.
///
/// An empty `Check` is valid and passes every argument. Use it to skip
/// a position while still checking later ones.
#[derive(Debug, Clone, Default)]
pub struct Check {
    typ: Option<Value>,
    opt: Option<bool>,
    not: Vec<Value>,
    has: Vec<String>,
}

impl Check {
    /// Create an empty check that passes everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the given type: a type-name string, the `"array"`
    /// sentinel, a tagged-class name, or an example value of the
    /// expected type.
    pub fn typ(mut self, expected: impl Into<Value>) -> Self {
        self.typ = Some(expected.into());
        self
    }

    /// Mark the argument optional: a missing value passes the presence
    /// rule. Arguments are required by default.
    pub fn optional(mut self) -> Self {
        self.opt = Some(true);
        self
    }

    /// Forbid a value. May be called repeatedly to forbid several.
    pub fn not(mut self, forbidden: impl Into<Value>) -> Self {
        self.not.push(forbidden.into());
        self
    }

    /// Require a field to be present (not null) on the argument. May be
    /// called repeatedly to require several.
    pub fn has(mut self, field: impl Into<String>) -> Self {
        self.has.push(field.into());
        self
    }
}

impl From<Check> for Value {
    fn from(check: Check) -> Self {
        let mut fields = Fields::new();

        if let Some(typ) = check.typ {
            fields.push(("typ".to_string(), typ));
        }
        if let Some(opt) = check.opt {
            fields.push(("opt".to_string(), Value::Bool(opt)));
        }
        if let Some(not) = single_or_list(check.not) {
            fields.push(("not".to_string(), not));
        }
        let has = check.has.into_iter().map(Value::from).collect();
        if let Some(has) = single_or_list(has) {
            fields.push(("has".to_string(), has));
        }

        Value::Record(fields)
    }
}

/// A single entry stays bare, several become a list, none is omitted.
fn single_or_list(mut values: Vec<Value>) -> Option<Value> {
    match values.len() {
        0 => None,
        1 => values.pop(),
        _ => Some(Value::List(values)),
    }
}
