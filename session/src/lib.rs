//! VET Session
//!
//! Validate a whole call: every argument against its descriptor, all
//! violations collected into one report.
//!
//! Responsibilities:
//! - Verify the shape of the validation call itself before touching
//!   individual arguments
//! - Run the constraint evaluator per position, in order
//! - Surface results as data (`check`) or as one aggregated error
//!   (`ensure`)

mod check;
mod error;

pub use check::{check, ensure};
pub use error::CheckFailedError;
