//! Diagnostics for catching rule-engine bugs at runtime.

pub mod invariants;

pub use invariants::{run_invariants, InvariantReport, InvariantViolation};
