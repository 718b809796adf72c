//! Process entry point for the sinhf conformance run.
//!
//! Exit status is the gate: `EXIT_PASS` when every case holds, `EXIT_FAIL`
//! when setup or any validation fails.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use palsuite_env::{EXIT_FAIL, EXIT_PASS, FailureReporter, ProcessEnv, StderrReporter};
use palsuite_harness::structured_log::LogEmitter;
use palsuite_harness::{ConformanceReport, Driver};

/// Validates the platform sinhf against reference values.
#[derive(Debug, Parser)]
#[command(name = "sinhf_test1")]
#[command(about = "Validates the platform sinhf against reference values")]
struct Cli {
    /// JSONL structured-log output path.
    #[arg(long)]
    log: Option<PathBuf>,
    /// Markdown report output path (a .json sibling is written next to it).
    #[arg(long)]
    report: Option<PathBuf>,
    /// Arguments forwarded to environment initialization.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    env_args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut reporter = StderrReporter;

    let mut driver = Driver::new(|x: f32| x.sinh());
    if let Some(path) = &cli.log {
        match LogEmitter::to_file(path) {
            Ok(log) => driver = driver.with_log(log),
            Err(err) => {
                reporter.report_failure(&format!(
                    "cannot open log sink {}: {err}",
                    path.display()
                ));
                return ExitCode::from(EXIT_FAIL);
            }
        }
    }

    let mut env = ProcessEnv::new();
    let result = driver.run(&mut env, &cli.env_args);

    if let Some(path) = &cli.report {
        let report = ConformanceReport {
            title: String::from("sinhf Conformance Report"),
            function: String::from("sinhf"),
            timestamp: format!("{:?}", std::time::SystemTime::now()),
            summary: driver.summary(),
        };
        if let Err(err) = std::fs::write(path, report.to_markdown())
            .and_then(|()| std::fs::write(path.with_extension("json"), report.to_json()))
        {
            reporter.report_failure(&format!(
                "cannot write report {}: {err}",
                path.display()
            ));
            return ExitCode::from(EXIT_FAIL);
        }
    }

    match result {
        Ok(()) => ExitCode::from(EXIT_PASS),
        Err(err) => {
            reporter.report_failure(&err.to_string());
            ExitCode::from(EXIT_FAIL)
        }
    }
}
