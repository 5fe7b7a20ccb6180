//! Diagnostic checks module.
//!
//! The connectivity check always runs. The generation check runs only when
//! the connectivity check passed.

pub mod connectivity;
pub mod generation;

use crate::services::ollama::OllamaClient;
use colored::Colorize;

/// Result of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub success: bool,
    pub message: String,
    pub hint: Option<String>,
    /// Extra lines shown under the message, in order.
    pub details: Vec<String>,
}

impl CheckResult {
    pub fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            message: message.to_string(),
            hint: None,
            details: Vec::new(),
        }
    }

    pub fn fail(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            message: message.to_string(),
            hint: None,
            details: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

/// Run the checks in order, stopping after a failed connectivity check.
pub async fn run_diagnostics(client: &OllamaClient) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let connectivity = connectivity::check(client).await;
    let reachable = connectivity.success;
    results.push(connectivity);

    if reachable {
        results.push(generation::check(client).await);
    } else {
        tracing::debug!("Skipping generation check: server not reachable");
    }

    results
}

/// Render diagnostic check results as printable lines.
pub fn format_results(results: &[CheckResult]) -> Vec<String> {
    let mut lines = Vec::new();

    for result in results {
        let marker = if result.success {
            "[OK]".green()
        } else {
            "[FAIL]".red()
        };
        lines.push(format!("{} {}: {}", marker, result.name.bold(), result.message));

        for detail in &result.details {
            lines.push(format!("    {}", detail));
        }

        if !result.success {
            if let Some(ref hint) = result.hint {
                lines.push(format!("  {} {}", "->".yellow(), hint));
            }
        }
    }

    lines
}

/// Print diagnostic check results.
pub fn print_results(results: &[CheckResult]) {
    for line in format_results(results) {
        println!("{}", line);
    }
}

/// Check if all checks ran and passed.
///
/// A skipped generation check counts as a failure.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.len() == 2 && results.iter().all(|r| r.success)
}
