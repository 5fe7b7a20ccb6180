//! Connectivity check: can the server list its models.

use super::CheckResult;
use crate::services::ollama::OllamaClient;
use crate::Error;

pub const NAME: &str = "Connectivity";
pub const SERVE_HINT: &str = "Make sure Ollama is installed and running with 'ollama serve'";

/// Check that the Ollama server answers `/api/tags` and list model names.
pub async fn check(client: &OllamaClient) -> CheckResult {
    match client.list_models().await {
        Ok(models) => {
            let names: Vec<String> = models.into_iter().map(|m| m.name).collect();
            tracing::debug!("Found {} models", names.len());

            let message = if names.is_empty() {
                "Ollama is running! (no models installed)"
            } else {
                "Ollama is running!"
            };
            CheckResult::ok(NAME, message).with_details(names)
        }
        Err(Error::UnexpectedStatus { status, url }) => {
            tracing::debug!("{} answered with HTTP {}", url, status);
            CheckResult::fail(NAME, &format!("Ollama is not responding (HTTP {})", status))
                .with_hint(&format!("Check that {} is served by Ollama", client.base_url()))
        }
        Err(e) => {
            tracing::debug!("Connectivity check failed: {}", e);
            CheckResult::fail(NAME, &format!("Cannot connect to Ollama: {}", e))
                .with_hint(SERVE_HINT)
        }
    }
}
