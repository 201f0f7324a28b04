//! Symptom analysis service using LLM
//!
//! Builds a patient prompt from the submitted symptoms and extracts a
//! structured diagnostic-style response via rig-core.

use rig::client::CompletionClient;
use rig::extractor::ExtractionError;
use rig::providers::openai;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::symptoms::{Condition, SymptomRequest, SymptomResponse};
use crate::service::llm::LlmClient;
use crate::service::symptom::prompts::{SYMPTOM_SYSTEM_PROMPT, build_symptom_prompt};

pub mod prompts;
pub mod validation;

/// Environment variable for the analysis model
const ENV_SYMPTOM_MODEL: &str = "SYMPTOM_MODEL";

/// Default model for symptom analysis
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// LLM-extractable analysis. Every field is optional so partial model output
/// survives extraction and can be repaired in validation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedAnalysis {
    #[serde(default)]
    pub possible_conditions: Vec<ExtractedCondition>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub severity_level: Option<String>,
    pub seek_medical_attention: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedCondition {
    pub condition: Option<String>,
    pub probability: Option<String>,
}

/// Error type for symptom analysis
#[derive(Debug, thiserror::Error)]
pub enum SymptomServiceError {
    #[error("OpenAI API key not configured on the server")]
    NotConfigured,

    #[error("OpenAI API error: {0}")]
    AnalysisFailed(String),
}

/// Service for analyzing symptoms via the OpenAI API
pub struct SymptomAnalysisService {
    llm_client: Option<LlmClient>,
    model: String,
}

impl SymptomAnalysisService {
    /// Creates a new analysis service.
    ///
    /// `llm_client` is `None` when no valid API key is configured; analysis
    /// requests then fail with `NotConfigured` while the rest of the API
    /// keeps working.
    pub fn new(llm_client: Option<LlmClient>) -> Self {
        let model = std::env::var(ENV_SYMPTOM_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            configured = llm_client.is_some(),
            "Symptom analysis service initialized"
        );

        Self { llm_client, model }
    }

    /// Analyze symptoms and return possible conditions and recommendations
    pub async fn analyze(
        &self,
        data: &SymptomRequest,
    ) -> Result<SymptomResponse, SymptomServiceError> {
        let llm_client = self
            .llm_client
            .as_ref()
            .ok_or(SymptomServiceError::NotConfigured)?;

        let start_time = std::time::Instant::now();
        let prompt = build_symptom_prompt(data);

        tracing::debug!(
            model = %self.model,
            symptoms_count = data.symptoms.len(),
            "Initiating OpenAI API call for symptom analysis"
        );

        let extractor = llm_client
            .openai_client()
            .extractor::<ExtractedAnalysis>(&self.model)
            .preamble(SYMPTOM_SYSTEM_PROMPT)
            .build();

        match extractor.extract(&prompt).await {
            Ok(extracted) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    "OpenAI API call for symptom analysis completed successfully"
                );
                Ok(validation::normalize(extracted))
            }
            // The API call itself failed
            Err(ExtractionError::CompletionError(e)) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    error = %e,
                    "OpenAI API call for symptom analysis failed"
                );
                Err(SymptomServiceError::AnalysisFailed(e.to_string()))
            }
            // The call succeeded but the output was unusable; answer with
            // the conservative fallback instead of failing the request
            Err(e) => {
                tracing::warn!(
                    model = %self.model,
                    error = %e,
                    "Could not parse model output, returning fallback analysis"
                );
                Ok(validation::fallback_response())
            }
        }
    }

    /// Canned response for the test endpoint; never calls the API
    pub fn test_response() -> SymptomResponse {
        SymptomResponse {
            possible_conditions: vec![Condition {
                condition: "Test Condition".to_string(),
                probability: "Medium".to_string(),
            }],
            recommendations: vec![
                "This is a test recommendation.".to_string(),
                "Please consult with a healthcare professional.".to_string(),
            ],
            severity_level: "Low".to_string(),
            seek_medical_attention: false,
        }
    }

    /// Drop non-printable entries from list fields before prompting
    pub fn sanitize(data: &SymptomRequest) -> SymptomRequest {
        let clean = |items: &[String]| -> Vec<String> {
            items
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        SymptomRequest {
            age: data.age,
            gender: data.gender.clone(),
            symptoms: clean(&data.symptoms),
            medical_history: clean(&data.medical_history),
            allergies: clean(&data.allergies),
            medications: clean(&data.medications),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_blank_entries() {
        let data = SymptomRequest {
            age: 30,
            gender: "male".to_string(),
            symptoms: vec!["cough".to_string(), "  ".to_string(), "fever".to_string()],
            medical_history: vec!["".to_string()],
            allergies: vec![],
            medications: vec![" aspirin ".to_string()],
        };

        let sanitized = SymptomAnalysisService::sanitize(&data);
        assert_eq!(sanitized.symptoms, vec!["cough", "fever"]);
        assert!(sanitized.medical_history.is_empty());
        assert_eq!(sanitized.medications, vec!["aspirin"]);
    }

    #[test]
    fn unconfigured_service_reports_not_configured() {
        let service = SymptomAnalysisService {
            llm_client: None,
            model: "test".to_string(),
        };
        let data = SymptomRequest {
            age: 30,
            gender: "male".to_string(),
            symptoms: vec!["cough".to_string()],
            medical_history: vec![],
            allergies: vec![],
            medications: vec![],
        };

        let result = futures_util::future::FutureExt::now_or_never(service.analyze(&data))
            .expect("resolves immediately without a client");
        assert!(matches!(result, Err(SymptomServiceError::NotConfigured)));
    }
}
