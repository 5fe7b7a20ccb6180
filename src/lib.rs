//! Ollama Probe Library
//!
//! Diagnostic checks for a locally running Ollama server: can it list models,
//! and can it generate text.

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};
