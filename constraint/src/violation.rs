//! Constraint violation types.

use std::fmt;
use vet_core::Position;

/// Which rule of a descriptor failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Expected-type rule (`typ`).
    Type,
    /// Presence rule (`opt`).
    Optional,
    /// Forbidden-values rule (`not`).
    Forbidden,
    /// Required-fields rule (`has`).
    RequiredField,
}

impl Rule {
    /// The descriptor field name this rule reads.
    pub fn key(&self) -> &'static str {
        match self {
            Rule::Type => "typ",
            Rule::Optional => "opt",
            Rule::Forbidden => "not",
            Rule::RequiredField => "has",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single failed rule instance.
///
/// Violations never mutate after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Where the violation was found.
    pub position: Position,
    /// The rule that failed.
    pub rule: Rule,
    /// Description of values which would have passed.
    pub expected: String,
    /// Description of what was found instead.
    pub actual: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        position: Position,
        rule: Rule,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            position,
            rule,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed \"{}\" check: expected \"{}\", was \"{}\"",
            self.rule, self.expected, self.actual
        )
    }
}

/// Ordered collection of violations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Append another collection, preserving its order.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Get all violations in discovery order.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Group violations by position, in first-seen group order.
    ///
    /// Relative discovery order is preserved inside each group and
    /// across groups; rendering a report from this mapping never
    /// reorders violations.
    pub fn grouped(&self) -> Vec<(Position, Vec<&Violation>)> {
        let mut groups: Vec<(Position, Vec<&Violation>)> = Vec::new();

        for violation in &self.violations {
            match groups.iter_mut().find(|(p, _)| *p == violation.position) {
                Some((_, group)) => group.push(violation),
                None => groups.push((violation.position, vec![violation])),
            }
        }

        groups
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
