//! Whole-call validation.

use vet_constraint::{evaluate, Rule, Violation, Violations};
use vet_core::{Position, Value};

use crate::error::CheckFailedError;

/// Check every argument in `args` against the descriptor at the same
/// position in `checks`.
///
/// `args` is the argument collection: a list, or a record whose field
/// values are the arguments in field order. Descriptors may cover only
/// a prefix of the arguments; positions beyond the last descriptor are
/// left unchecked. An empty record descriptor passes and skips its
/// position.
///
/// Returns every violation found, in discovery order. Violations at
/// synthetic positions describe misuse of the validation call itself;
/// when the call shape is wrong, the individual arguments are not
/// evaluated and only those violations come back.
pub fn check(args: &Value, checks: &[Value]) -> Violations {
    let mut violations = Violations::new();

    // The argument collection itself must be present and structured.
    if args.is_null() {
        violations.push(Violation::new(
            Position::Args,
            Rule::Optional,
            "present",
            "null",
        ));
        return violations;
    }
    let arg_values = match args.items() {
        Some(values) => values,
        None => {
            violations.push(Violation::new(
                Position::Args,
                Rule::Type,
                "object",
                args.type_name(),
            ));
            return violations;
        }
    };

    // Descriptor shapes are collected, not fatal: a bad descriptor at
    // one index leaves the others scanned.
    for (index, descriptor) in checks.iter().enumerate() {
        if !descriptor.is_structured() {
            violations.push(Violation::new(
                Position::Descriptor(index),
                Rule::Type,
                "object",
                descriptor.type_name(),
            ));
        }
    }

    // Every descriptor needs an argument to apply to.
    if arg_values.len() < checks.len() {
        violations.push(Violation::new(
            Position::Args,
            Rule::Optional,
            format!("at least {} arguments", checks.len()),
            format!("{} arguments", arg_values.len()),
        ));
    }

    // A malformed call is reported on its own; individual arguments
    // are not evaluated.
    if !violations.is_empty() {
        return violations;
    }

    for (index, arg) in arg_values.into_iter().enumerate() {
        if index >= checks.len() {
            break;
        }
        violations.merge(evaluate(index, arg, &checks[index]));
    }

    violations
}

/// Check as [`check`] does, failing when any violation is found.
///
/// The error embeds every violation of the call in the same order
/// [`check`] returns them, plus a report grouped by position.
pub fn ensure(args: &Value, checks: &[Value]) -> Result<(), CheckFailedError> {
    let violations = check(args, checks);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CheckFailedError::new(violations))
    }
}
