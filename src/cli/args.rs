//! Command line argument definitions.

use crate::models::config::ProbeConfig;
use clap::Parser;

/// Ollama Probe - Check that a local Ollama server can list models and generate text
#[derive(Parser, Debug)]
#[command(name = "ollama-probe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Ollama base URL (default: http://localhost:11434)
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Model used for the generation check (default: llama3)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Prompt used for the generation check
    #[arg(short, long, value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Request timeout in seconds (default: no timeout)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Exit with a non-zero status when a check fails
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Override config values with the flags that were given.
    pub fn apply_to(&self, mut config: ProbeConfig) -> ProbeConfig {
        if let Some(ref host) = self.host {
            config.host = host.clone();
        }
        if let Some(ref model) = self.model {
            config.model = model.clone();
        }
        if let Some(ref prompt) = self.prompt {
            config.prompt = prompt.clone();
        }
        if self.timeout.is_some() {
            config.timeout_secs = self.timeout;
        }
        config
    }
}
