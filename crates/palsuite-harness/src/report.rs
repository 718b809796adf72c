//! Report generation for conformance runs.

use serde::{Deserialize, Serialize};

use crate::driver::RunSummary;

/// A conformance report for one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Name of the function under test.
    pub function: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Summary of the cases that ran.
    pub summary: RunSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Function: {}\n", self.function));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Expected | Status |\n");
        out.push_str("|------|----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {:.8e} | {} |\n",
                r.case_name, r.expected, status
            ));
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::CaseResult;

    fn sample_report() -> ConformanceReport {
        ConformanceReport {
            title: String::from("sinhf Conformance Report"),
            function: String::from("sinhf"),
            timestamp: String::from("2026-08-24T00:00:00Z"),
            summary: RunSummary::from_results(vec![
                CaseResult {
                    case_name: String::from("sinhf(0)"),
                    value: 0.0,
                    expected: 0.0,
                    passed: true,
                },
                CaseResult {
                    case_name: String::from("sinhf(1)"),
                    value: 1.0,
                    expected: 1.17520119,
                    passed: false,
                },
            ]),
        }
    }

    #[test]
    fn markdown_report_lists_every_case_with_status() {
        let md = sample_report().to_markdown();
        assert!(md.starts_with("# sinhf Conformance Report"));
        assert!(md.contains("- Total: 2"));
        assert!(md.contains("- Failed: 1"));
        assert!(md.contains("| sinhf(0) |"));
        assert!(md.contains("| PASS |"));
        assert!(md.contains("| FAIL |"));
    }

    #[test]
    fn json_report_round_trips() {
        let json = sample_report().to_json();
        let parsed: ConformanceReport = serde_json::from_str(&json).expect("report parses");
        assert_eq!(parsed.summary.total, 2);
        assert_eq!(parsed.summary.failed, 1);
    }
}
