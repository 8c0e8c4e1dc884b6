// src/gateway/mod.rs
// Model gateway: the single point of contact with the text-generation service

mod http;
mod watsonx;

pub use watsonx::{NO_RESULT_TEXT, WatsonxGateway};

use crate::error::Result;
use async_trait::async_trait;

/// Anything that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Whether the generator has everything it needs to make a call
    fn is_configured(&self) -> bool {
        true
    }
}
