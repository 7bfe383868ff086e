//! Constraint evaluation.

use vet_core::{Position, Value};

use crate::violation::{Rule, Violation, Violations};

/// Evaluate one argument against one descriptor.
///
/// `index` is the argument's position in the call; `descriptor` is a
/// record with any subset of the `typ`, `opt`, `not`, and `has` fields.
/// The four rules are independent, so a single argument can collect
/// several violations from one descriptor. Structured descriptors
/// without readable fields (lists, tagged values without the rule
/// fields) behave like the empty descriptor and pass.
///
/// Malformed argument values only ever produce violations; a malformed
/// `opt` field produces a violation at a synthetic position and leaves
/// the presence rule unverified for this position.
pub fn evaluate(index: usize, arg: &Value, descriptor: &Value) -> Violations {
    let mut violations = Violations::new();

    check_type(index, arg, descriptor, &mut violations);
    check_presence(index, arg, descriptor, &mut violations);
    check_forbidden(index, arg, descriptor, &mut violations);
    check_required_fields(index, arg, descriptor, &mut violations);

    violations
}

/// Resolve the expected type name from a descriptor's `typ` field.
///
/// A non-empty string is used verbatim: a primitive type name, the
/// `"array"` sentinel, or a tagged-class name. Any other value is an
/// example of the expected type and contributes its runtime type name.
/// The empty string means `"string"`, since a string example would
/// otherwise be read as a type name.
fn expected_type(typ: &Value) -> String {
    match typ {
        Value::String(name) if !name.is_empty() => name.clone(),
        Value::String(_) => "string".to_string(),
        example => example.type_name().to_string(),
    }
}

fn check_type(index: usize, arg: &Value, descriptor: &Value, violations: &mut Violations) {
    let typ = match descriptor.field("typ") {
        Some(typ) => typ,
        None => return,
    };
    let expected = expected_type(typ);

    match arg {
        // Sequences only ever match the array sentinel.
        Value::List(_) => {
            if expected != "array" {
                violations.push(Violation::new(
                    Position::Arg(index),
                    Rule::Type,
                    expected,
                    "array",
                ));
            }
        }
        // A tagged value checked against anything more specific than
        // the generic "object" must match by class name.
        Value::Tagged { class, .. } if expected != "object" => {
            if class.is_empty() {
                // Broken tag contract: the class comparison is skipped
                // for this position.
                violations.push(Violation::new(
                    Position::ClassTag(index),
                    Rule::Type,
                    "class name",
                    "empty string",
                ));
            } else if *class != expected {
                violations.push(Violation::new(
                    Position::Arg(index),
                    Rule::Type,
                    expected,
                    class.clone(),
                ));
            }
        }
        other => {
            if other.type_name() != expected {
                violations.push(Violation::new(
                    Position::Arg(index),
                    Rule::Type,
                    expected,
                    other.type_name(),
                ));
            }
        }
    }
}

fn check_presence(index: usize, arg: &Value, descriptor: &Value, violations: &mut Violations) {
    let mut optional = false;

    if let Some(opt) = descriptor.field("opt") {
        match opt {
            Value::Bool(b) => optional = *b,
            other => {
                // The opt field itself is malformed, so the presence
                // rule stays unverified for this position.
                violations.push(Violation::new(
                    Position::DescriptorOpt(index),
                    Rule::Type,
                    "bool",
                    other.type_name(),
                ));
                return;
            }
        }
    }

    if !optional && arg.is_null() {
        violations.push(Violation::new(
            Position::Arg(index),
            Rule::Optional,
            "present",
            "null",
        ));
    }
}

fn check_forbidden(index: usize, arg: &Value, descriptor: &Value, violations: &mut Violations) {
    let not = match descriptor.field("not") {
        Some(not) => not,
        None => return,
    };

    for forbidden in not.as_list() {
        if arg == forbidden {
            violations.push(Violation::new(
                Position::Arg(index),
                Rule::Forbidden,
                format!("not {}", forbidden),
                arg.to_string(),
            ));
        }
    }
}

fn check_required_fields(
    index: usize,
    arg: &Value,
    descriptor: &Value,
    violations: &mut Violations,
) {
    let has = match descriptor.field("has") {
        Some(has) => has,
        None => return,
    };

    for entry in has.as_list() {
        let name = match entry {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        };

        let present = matches!(arg.field(&name), Some(value) if !value.is_null());
        if !present {
            violations.push(Violation::new(
                Position::Arg(index),
                Rule::RequiredField,
                format!("has {}", name),
                format!("missing {}", name),
            ));
        }
    }
}
