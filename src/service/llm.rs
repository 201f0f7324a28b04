//! Shared OpenAI client for the LLM-backed services

use rig::providers::openai;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("failed to create OpenAI client: {0}")]
    Init(String),
}

/// Thin wrapper around the rig OpenAI client, shared by every service
/// that talks to the API
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    pub fn new(api_key: &str) -> Result<Self, LlmClientError> {
        let client = openai::Client::new(api_key);
        Ok(Self { client })
    }

    /// The underlying client, for building extractors or agents with
    /// service-specific configuration
    pub fn openai_client(&self) -> &openai::Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_errors_carry_the_provider_message() {
        let err = LlmClientError::Init("bad key".to_string());
        assert_eq!(err.to_string(), "failed to create OpenAI client: bad key");
    }
}
