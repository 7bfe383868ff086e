//! VET Core Types
//!
//! This crate provides the foundational types used throughout the VET system:
//! - The dynamic Value union checked at call sites
//! - Ordered Fields for structured values
//! - The Classed capability for self-describing application values
//! - Position labels identifying where a violation was found

mod position;
mod value;

pub use position::*;
pub use value::*;
