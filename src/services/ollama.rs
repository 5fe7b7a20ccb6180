//! Ollama API client.
//!
//! Only the two endpoints the probe needs are covered:
//! - `GET /api/tags` lists installed models
//! - `POST /api/generate` produces a single non-streamed completion

use crate::models::config::ProbeConfig;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Ollama API client.
pub struct OllamaClient {
    config: ProbeConfig,
    base_url: String,
    client: reqwest::Client,
}

/// Generate request payload.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// Generate response.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// Models list response.
#[derive(Debug, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

/// Model information.
#[derive(Debug, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub digest: Option<String>,
}

impl OllamaClient {
    /// Create a new Ollama client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ProbeConfig::default())
    }

    /// Create a new Ollama client with custom configuration.
    pub fn with_config(config: ProbeConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url(),
            config,
            client,
        })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List available models.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}/api/tags", self.base_url);
        tracing::debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let parsed: ModelsResponse = read_json(resp, &url).await?;
        Ok(parsed.models)
    }

    /// Generate text from the configured prompt with the configured model.
    pub async fn generate(&self) -> Result<GenerateResponse> {
        self.generate_with(&self.config.model, &self.config.prompt).await
    }

    /// Generate text from a prompt with a specific model.
    pub async fn generate_with(&self, model: &str, prompt: &str) -> Result<GenerateResponse> {
        let url = format!("{}/api/generate", self.base_url);
        tracing::debug!("POST {} (model: {})", url, model);

        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let resp = self.client.post(&url).json(&request).send().await?;
        read_json(resp, &url).await
    }
}

/// Check the status, then decode the body.
///
/// Only `200 OK` counts as an answer; any other status, including other
/// 2xx codes, is `Error::UnexpectedStatus`.
///
/// The body is read as text first so a malformed payload surfaces as
/// `Error::Json` rather than a transport error.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response, url: &str) -> Result<T> {
    let status = resp.status();
    tracing::debug!("{} -> {}", url, status);

    if status != reqwest::StatusCode::OK {
        return Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_disables_streaming() {
        let request = GenerateRequest {
            model: "llama3",
            prompt: "hi",
            stream: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"model": "llama3", "prompt": "hi", "stream": false})
        );
    }

    #[test]
    fn test_models_response_tolerates_extra_and_missing_fields() {
        let body = r#"{"models":[
            {"name":"llama3:latest","size":4661224676,"details":{"family":"llama"}},
            {"name":"mistral"}
        ]}"#;
        let parsed: ModelsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.models.len(), 2);
        assert_eq!(parsed.models[0].size, Some(4661224676));
        assert_eq!(parsed.models[1].name, "mistral");
        assert_eq!(parsed.models[1].size, None);
    }

    #[test]
    fn test_generate_response_requires_response_field() {
        assert!(serde_json::from_str::<GenerateResponse>(r#"{"done":true}"#).is_err());
        let ok: GenerateResponse = serde_json::from_str(r#"{"response":"a.login"}"#).unwrap();
        assert_eq!(ok.response, "a.login");
        assert_eq!(ok.done, None);
    }

    #[test]
    fn test_client_uses_normalized_base_url() {
        let config = ProbeConfig {
            host: "127.0.0.1:11434/".to_string(),
            ..ProbeConfig::default()
        };
        let client = OllamaClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:11434");
    }
}
