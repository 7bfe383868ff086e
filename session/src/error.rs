//! Aggregated check failure.

use thiserror::Error;
use vet_constraint::Violations;

/// Error returned by [`ensure`](crate::ensure) when any check fails.
///
/// Carries every violation of the failed call plus a report grouped by
/// position, rendered once at construction. Callers handle exactly one
/// error kind however many rules failed.
#[derive(Debug, Error)]
#[error("argument checks failed:\n{report}")]
pub struct CheckFailedError {
    violations: Violations,
    report: String,
}

impl CheckFailedError {
    /// Wrap a violation collection. The collection is expected to be
    /// non-empty; `ensure` never constructs this for a clean call.
    pub fn new(violations: Violations) -> Self {
        let report = render_report(&violations);
        Self { violations, report }
    }

    /// Every violation of the failed call, in discovery order.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// Consume the error, keeping the violations.
    pub fn into_violations(self) -> Violations {
        self.violations
    }

    /// The grouped multi-line report.
    pub fn report(&self) -> &str {
        &self.report
    }
}

/// Render one section per position group in first-seen order: the
/// position label, then one line per violation.
fn render_report(violations: &Violations) -> String {
    let mut report = String::new();

    for (position, group) in violations.grouped() {
        report.push_str(&format!("    {}:\n", position));
        for violation in group {
            report.push_str(&format!("        {}\n", violation));
        }
    }

    report
}
