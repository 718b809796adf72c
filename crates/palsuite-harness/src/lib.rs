//! Conformance harness for the platform sinhf primitive.
//!
//! This crate provides:
//! - Reference table: the fixed `(value, expected, variance)` triples the
//!   platform's `sinhf` is held to, spanning `[0, pi]` plus exact infinity
//! - Validators: pointwise tolerance check and NaN-propagation check
//! - Driver: sequential fail-fast run over the table, each entry mirrored
//!   through the odd-function identity `sinh(-x) = -sinh(x)`
//! - Structured logging and report generation for run evidence
//!
//! The process entry point lives in `src/bin/sinhf_test1.rs` and exits with
//! the PAL pass/fail codes from `palsuite-env`.

#![forbid(unsafe_code)]

pub mod driver;
pub mod report;
pub mod structured_log;
pub mod table;
pub mod validate;

pub use driver::{CaseResult, Driver, DriverState, RunError, RunSummary};
pub use report::ConformanceReport;
pub use table::{PAL_EPSILON, TestCase, reference_table};
pub use validate::{ValidationFailure, validate, validate_is_nan};
