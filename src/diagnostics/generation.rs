//! Generation check: can the server produce a completion.

use super::CheckResult;
use crate::services::ollama::OllamaClient;
use crate::Error;

pub const NAME: &str = "Generation";

/// Number of characters of the completion shown in the report.
pub const EXCERPT_CHARS: usize = 100;

/// Check that `/api/generate` returns a completion for the configured model.
pub async fn check(client: &OllamaClient) -> CheckResult {
    match client.generate().await {
        Ok(resp) => CheckResult::ok(NAME, "LLM Generation working!")
            .with_details(vec![format!("Response: {}", excerpt(&resp.response))]),
        Err(Error::UnexpectedStatus { status, url }) => {
            tracing::debug!("{} answered with HTTP {}", url, status);
            let result =
                CheckResult::fail(NAME, &format!("LLM Generation failed (HTTP {})", status));
            // Ollama answers 404 for models that are not pulled
            if status == 404 {
                result.with_hint(&format!("Pull the model: ollama pull {}", client.config().model))
            } else {
                result
            }
        }
        Err(e) => {
            tracing::debug!("Generation check failed: {}", e);
            CheckResult::fail(NAME, &format!("LLM test failed: {}", e))
        }
    }
}

/// First `EXCERPT_CHARS` characters of `text` followed by `...`.
pub fn excerpt(text: &str) -> String {
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_truncates_to_100_chars() {
        let text = "X".repeat(150);
        assert_eq!(excerpt(&text), format!("{}...", "X".repeat(100)));
    }

    #[test]
    fn test_excerpt_short_text_still_gets_ellipsis() {
        assert_eq!(excerpt("button#login"), "button#login...");
        assert_eq!(excerpt(""), "...");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "登".repeat(120);
        let result = excerpt(&text);
        assert_eq!(result.chars().count(), 103);
        assert!(result.starts_with(&"登".repeat(100)));
    }
}
