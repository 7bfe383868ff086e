//! VET Constraint
//!
//! Evaluate one argument value against one declarative descriptor.
//!
//! Responsibilities:
//! - Resolve the expected type from a name, the array sentinel, or an
//!   example value
//! - Check the type, presence, forbidden-value, and required-field rules
//! - Collect every violation instead of stopping at the first
//! - Report malformed descriptor fields at synthetic positions

mod descriptor;
mod evaluator;
mod violation;

pub use descriptor::Check;
pub use evaluator::evaluate;
pub use violation::{Rule, Violation, Violations};
