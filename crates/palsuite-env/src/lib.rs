//! PAL process-lifecycle collaborators for the palsuite harness.
//!
//! This crate provides the seams a palsuite test binary runs inside:
//! - [`PalEnv`]: environment initialization and teardown around a test run
//! - [`FailureReporter`]: sink for fatal test diagnostics
//! - [`EXIT_PASS`] / [`EXIT_FAIL`]: process exit codes for the pass/fail gate
//!
//! The harness core calls `initialize` before running any validator and
//! `terminate` exactly once before process exit. Neither call is retried.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Process exit code for a fully successful run.
pub const EXIT_PASS: u8 = 0;
/// Process exit code when setup or any validation fails.
pub const EXIT_FAIL: u8 = 1;

/// Environment initialization failed; fatal before any validation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("environment rejected arguments: {0}")]
    BadArguments(String),
    #[error("environment initialization failed: {0}")]
    InitFailed(String),
}

/// Test-environment lifecycle around a conformance run.
pub trait PalEnv {
    /// Bring the environment up. Process arguments are forwarded unmodified.
    fn initialize(&mut self, args: &[String]) -> Result<(), SetupError>;

    /// Tear the environment down. Called exactly once per run that
    /// initialized successfully, on both the pass and fail paths.
    fn terminate(&mut self);
}

/// Default environment: records the forwarded arguments and tracks the
/// initialized flag so double-teardown shows up in debug builds.
#[derive(Debug, Default)]
pub struct ProcessEnv {
    args: Vec<String>,
    initialized: bool,
}

impl ProcessEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments forwarded at initialization.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl PalEnv for ProcessEnv {
    fn initialize(&mut self, args: &[String]) -> Result<(), SetupError> {
        if self.initialized {
            return Err(SetupError::InitFailed(String::from(
                "environment already initialized",
            )));
        }
        self.args = args.to_vec();
        self.initialized = true;
        Ok(())
    }

    fn terminate(&mut self) {
        debug_assert!(self.initialized, "terminate before initialize");
        self.initialized = false;
    }
}

/// Sink for fatal test diagnostics.
///
/// The caller owns process termination; reporting and exiting are separate so
/// the driver stays runnable under test.
pub trait FailureReporter {
    fn report_failure(&mut self, message: &str);
}

/// Default reporter: one diagnostic line on stderr.
#[derive(Debug, Default)]
pub struct StderrReporter;

impl FailureReporter for StderrReporter {
    fn report_failure(&mut self, message: &str) {
        eprintln!("FAIL: {message}");
    }
}
