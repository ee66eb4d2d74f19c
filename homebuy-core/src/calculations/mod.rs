//! Financial projection calculations.
//!
//! The projection engine maps one property's raw inputs to its full
//! derived financial profile through a fixed 30-year mortgage
//! amortization formula.

pub mod common;
pub mod projection;

pub use projection::{PropertyProjection, project};
