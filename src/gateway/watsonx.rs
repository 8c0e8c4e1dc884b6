// src/gateway/watsonx.rs
// watsonx.ai text-generation client (IAM token exchange + ml/v1 generation)

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::gateway::TextGenerator;
use crate::gateway::http::create_client;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Returned when the service answers with a results list but no text
pub const NO_RESULT_TEXT: &str = "No result found.";

const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    input: &'a str,
    model_id: &'a str,
    project_id: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    decoding_method: &'static str,
    max_new_tokens: u32,
}

/// watsonx.ai client for a single model in a single project
pub struct WatsonxGateway {
    config: GatewayConfig,
    http: reqwest::Client,
}

impl WatsonxGateway {
    /// Create a gateway with its own pooled HTTP client
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = create_client(config.request_timeout, config.connect_timeout)?;
        Ok(Self { config, http })
    }

    fn generation_url(&self, endpoint: &str) -> String {
        format!(
            "{}/ml/v1/text/generation?version={}",
            endpoint.trim_end_matches('/'),
            self.config.api_version
        )
    }

    /// Exchange the API key for a short-lived bearer token
    async fn fetch_token(&self, request_id: &str, api_key: &str) -> Result<String> {
        let response = self
            .http
            .post(&self.config.iam_url)
            .header("Accept", "application/json")
            .form(&[("grant_type", IAM_GRANT_TYPE), ("apikey", api_key)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Auth(format!(
                "token request returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Auth(format!("invalid token response: {}", e)))?;
        debug!(request_id = %request_id, "IAM token acquired");
        Ok(token.access_token)
    }

    /// Generate text for the prompt with the configured decoding policy
    #[instrument(
        skip(self, prompt),
        fields(request_id, model = self.config.model_id.as_deref().unwrap_or("unset"), prompt_len = prompt.len())
    )]
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let api_key = required(&self.config.api_key, "IBM_API_KEY")?;
        let endpoint = required(&self.config.endpoint, "IBM_GRANITE_ENDPOINT")?;
        let model_id = required(&self.config.model_id, "IBM_MODEL_ID")?;
        let project_id = required(&self.config.project_id, "IBM_PROJECT_ID")?;

        let start = Instant::now();
        let token = self.fetch_token(&request_id, api_key).await?;

        let body = GenerationRequest {
            input: prompt,
            model_id,
            project_id,
            parameters: GenerationParameters {
                decoding_method: self.config.decoding.method.as_str(),
                max_new_tokens: self.config.decoding.max_new_tokens,
            },
        };

        let response = self
            .http
            .post(self.generation_url(endpoint))
            .bearer_auth(&token)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let generated = interpret_generation_body(&text)?;
        info!(
            request_id = %request_id,
            duration_ms = start.elapsed().as_millis() as u64,
            output_len = generated.len(),
            "watsonx generation complete"
        );
        Ok(generated)
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    value.as_deref().ok_or(GatewayError::MissingConfig(name))
}

/// Pull the generated text out of a response body.
///
/// A bare JSON string is taken verbatim. An object with a `results` list
/// yields the first result's `generated_text`, or [`NO_RESULT_TEXT`] when
/// there is none. Any other shape is an error carrying the raw body.
pub fn interpret_generation_body(body: &str) -> Result<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => Ok(text),
        Ok(Value::Object(map)) if map.contains_key("results") => {
            let text = map
                .get("results")
                .and_then(Value::as_array)
                .and_then(|results| results.first())
                .and_then(|first| first.get("generated_text"))
                .and_then(Value::as_str);
            Ok(text.unwrap_or(NO_RESULT_TEXT).to_string())
        }
        _ => Err(GatewayError::UnexpectedFormat(body.to_string())),
    }
}

#[async_trait]
impl TextGenerator for WatsonxGateway {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let result = self.generate_text(prompt).await;
        if let Err(ref e) = result {
            warn!(error = %e, "watsonx generation failed");
        }
        result
    }

    fn is_configured(&self) -> bool {
        self.config.is_complete()
    }
}
