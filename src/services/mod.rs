//! External service clients.

pub mod ollama;
