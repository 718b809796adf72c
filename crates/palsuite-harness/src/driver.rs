//! Sequential driver for a conformance run.
//!
//! Lifecycle is `Uninitialized -> Running -> Terminated`. The driver brings
//! the environment up, walks the reference table in order (each entry plus
//! its negated mirror, encoding `sinh(-x) = -sinh(x)`), runs the NaN
//! propagation check once, and tears the environment down. The run is
//! fail-fast: the first failing validation aborts it and nothing after that
//! case is evaluated. Teardown still happens on the failure path.

use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::table::reference_table;
use crate::validate::{ValidationFailure, validate, validate_is_nan};
use palsuite_env::{PalEnv, SetupError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a conformance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Terminated,
}

/// Why a run ended with a failure exit.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

/// Outcome of a single case, retained for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Case identifier, e.g. `sinhf(0.318309886)`.
    pub case_name: String,
    /// Input handed to the function under test.
    pub value: f32,
    /// Expected result (NaN for the propagation check).
    pub expected: f32,
    /// Whether the case passed.
    pub passed: bool,
}

/// Aggregate of the cases that ran. Fail-fast means at most one failed case,
/// always the last one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CaseResult>,
}

impl RunSummary {
    /// Build a summary from recorded case results.
    #[must_use]
    pub fn from_results(results: Vec<CaseResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Drives the reference table through the function under test.
pub struct Driver<F> {
    sinhf: F,
    state: DriverState,
    log: Option<LogEmitter>,
    results: Vec<CaseResult>,
}

impl<F> Driver<F>
where
    F: Fn(f32) -> f32,
{
    /// Create a driver over the function under test.
    #[must_use]
    pub fn new(sinhf: F) -> Self {
        Self {
            sinhf,
            state: DriverState::Uninitialized,
            log: None,
            results: Vec::new(),
        }
    }

    /// Attach a structured-log sink.
    #[must_use]
    pub fn with_log(mut self, log: LogEmitter) -> Self {
        self.log = Some(log);
        self
    }

    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Summary of the cases that have run so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_results(self.results.clone())
    }

    /// Execute one full conformance run.
    ///
    /// `args` are forwarded unmodified to environment initialization. A setup
    /// failure aborts before any validation and before the environment exists
    /// to tear down; once initialization succeeds, `terminate` is called
    /// exactly once on both the pass and fail paths.
    pub fn run(&mut self, env: &mut dyn PalEnv, args: &[String]) -> Result<(), RunError> {
        debug_assert_eq!(self.state, DriverState::Uninitialized, "driver is one-shot");

        if let Err(err) = env.initialize(args) {
            self.log_event(
                LogEntry::new(LogLevel::Fatal, "setup_failed").with_message(&err.to_string()),
            );
            return Err(RunError::Setup(err));
        }
        self.state = DriverState::Running;
        self.log_event(LogEntry::new(LogLevel::Info, "run_start"));

        let outcome = self.run_cases();

        env.terminate();
        self.state = DriverState::Terminated;
        self.log_event(LogEntry::new(LogLevel::Info, "run_end"));

        outcome.map_err(RunError::Validation)
    }

    fn run_cases(&mut self) -> Result<(), ValidationFailure> {
        for case in reference_table() {
            self.check(case.value, case.expected, case.variance)?;
            self.check(-case.value, -case.expected, case.variance)?;
        }
        self.check_nan(f32::NAN)
    }

    fn check(&mut self, value: f32, expected: f32, variance: f32) -> Result<(), ValidationFailure> {
        let outcome = validate(&self.sinhf, value, expected, variance);
        self.record(value, expected, &outcome);
        outcome
    }

    fn check_nan(&mut self, value: f32) -> Result<(), ValidationFailure> {
        let outcome = validate_is_nan(&self.sinhf, value);
        self.record(value, f32::NAN, &outcome);
        outcome
    }

    fn record(&mut self, value: f32, expected: f32, outcome: &Result<(), ValidationFailure>) {
        let case_name = format!("sinhf({value})");
        let passed = outcome.is_ok();
        self.results.push(CaseResult {
            case_name: case_name.clone(),
            value,
            expected,
            passed,
        });

        let mut entry = if let Err(failure) = outcome {
            LogEntry::new(LogLevel::Error, "case").with_message(&failure.to_string())
        } else {
            LogEntry::new(LogLevel::Info, "case")
        };
        entry = entry
            .with_case(&case_name, value, expected)
            .with_outcome(if passed { Outcome::Pass } else { Outcome::Fail });
        self.log_event(entry);
    }

    fn log_event(&mut self, entry: LogEntry) {
        // Observability only: a dead log sink must not fail the gate.
        if let Some(log) = &mut self.log {
            let _ = log.emit(&entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Environment double that counts lifecycle calls.
    #[derive(Debug, Default)]
    struct CountingEnv {
        init_calls: usize,
        terminate_calls: usize,
        reject_init: bool,
    }

    impl PalEnv for CountingEnv {
        fn initialize(&mut self, _args: &[String]) -> Result<(), SetupError> {
            self.init_calls += 1;
            if self.reject_init {
                return Err(SetupError::InitFailed(String::from("rejected")));
            }
            Ok(())
        }

        fn terminate(&mut self) {
            self.terminate_calls += 1;
        }
    }

    #[test]
    fn full_run_against_platform_sinh_passes() {
        let mut env = CountingEnv::default();
        let mut driver = Driver::new(|x: f32| x.sinh());
        driver.run(&mut env, &[]).expect("platform sinh conforms");

        let summary = driver.summary();
        // 16 entries, each checked with its negated mirror, plus the NaN case.
        assert_eq!(summary.total, 33);
        assert!(summary.all_passed());
        assert_eq!(driver.state(), DriverState::Terminated);
        assert_eq!(env.terminate_calls, 1);
    }

    #[test]
    fn setup_failure_aborts_before_any_validation() {
        let mut env = CountingEnv {
            reject_init: true,
            ..CountingEnv::default()
        };
        let mut driver = Driver::new(|x: f32| x.sinh());
        let err = driver.run(&mut env, &[]).expect_err("setup must fail");

        assert!(matches!(err, RunError::Setup(_)));
        assert_eq!(driver.summary().total, 0);
        assert_eq!(driver.state(), DriverState::Uninitialized);
        assert_eq!(env.terminate_calls, 0);
    }

    #[test]
    fn first_failure_stops_the_run_and_still_terminates() {
        // Break sinh for inputs beyond 1: the first failing case is the
        // table's eighth entry, sinhf(1).
        let broken = |x: f32| if x.abs() >= 1.0 { 0.0 } else { x.sinh() };
        let mut env = CountingEnv::default();
        let mut driver = Driver::new(broken);
        let err = driver.run(&mut env, &[]).expect_err("broken sinh must fail");

        assert!(matches!(
            err,
            RunError::Validation(ValidationFailure::ValueMismatch { value, .. }) if value == 1.0
        ));
        let summary = driver.summary();
        // Seven passing entries, each with its mirror, then the one failure.
        assert_eq!(summary.total, 15);
        assert_eq!(summary.failed, 1);
        assert!(!summary.results.last().unwrap().passed);
        assert_eq!(driver.state(), DriverState::Terminated);
        assert_eq!(env.terminate_calls, 1);
    }

    #[test]
    fn odd_symmetry_violation_fails_on_the_mirror_case() {
        // Correct for x >= 0, broken for negatives: the direct check of the
        // first nonzero entry passes and its mirror fails.
        let one_sided = |x: f32| if x >= 0.0 { x.sinh() } else { x.sinh() + 0.1 };
        let mut env = CountingEnv::default();
        let mut driver = Driver::new(one_sided);
        let err = driver
            .run(&mut env, &[])
            .expect_err("asymmetric sinh must fail");

        assert!(matches!(
            err,
            RunError::Validation(ValidationFailure::ValueMismatch { value, .. })
                if value < 0.0
        ));
        // Entry 0 passes both directions (0 negates to -0), entry 1 passes
        // forward and fails mirrored.
        assert_eq!(driver.summary().total, 4);
    }

    #[test]
    fn nan_propagation_failure_is_the_last_possible_case() {
        let no_nan = |x: f32| if x.is_nan() { 0.0 } else { x.sinh() };
        let mut env = CountingEnv::default();
        let mut driver = Driver::new(no_nan);
        let err = driver
            .run(&mut env, &[])
            .expect_err("NaN must propagate through sinh");

        assert!(matches!(
            err,
            RunError::Validation(ValidationFailure::NotNaN { actual, .. }) if actual == 0.0
        ));
        assert_eq!(driver.summary().total, 33);
        assert_eq!(driver.summary().failed, 1);
    }

    #[test]
    fn summary_orders_results_by_table_position() {
        let mut env = CountingEnv::default();
        let mut driver = Driver::new(|x: f32| x.sinh());
        driver.run(&mut env, &[]).expect("platform sinh conforms");

        let summary = driver.summary();
        assert_eq!(summary.results[0].case_name, "sinhf(0)");
        assert_eq!(summary.results[1].case_name, "sinhf(-0)");
        assert!(summary.results[summary.total - 1].case_name.contains("NaN"));
    }
}
