//! OpenAI-compatible chat-completions generator.
//!
//! Works with any service exposing `POST {base_url}/chat/completions`; the
//! defaults in [`GeneratorSettings`] target Groq.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{prompts, Generator};
use crate::{
    error::{CadenceError, Result, ResultExt},
    settings::GeneratorSettings,
};

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 500;

fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

/// Generator backed by a chat-completions HTTP API.
pub struct ChatGenerator {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatGenerator {
    /// Creates a generator from settings, reading the API key from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Configuration` if the API key is missing or the
    /// HTTP client cannot be built.
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self> {
        let api_key = settings.api_key()?;
        let http = Client::builder()
            .timeout(settings.timeout())
            .build()
            .with_context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            model: settings.model.clone(),
            api_key,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    /// Sends one system + user exchange and returns the reply text.
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!("Retrying generation request in {backoff}ms (attempt {attempt})");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self
                .http
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    debug!("Generation request failed: {e}");
                    last_error = Some(CadenceError::generation(format!("Request failed: {e}")));
                    continue;
                }
            };

            let status = response.status().as_u16();
            if is_retryable_status(status) && attempt < MAX_RETRIES {
                let text = response.text().await.unwrap_or_default();
                debug!("Retryable status {status}: {text}");
                last_error = Some(CadenceError::generation(format!("API error {status}: {text}")));
                continue;
            }

            if !response.status().is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(CadenceError::generation(format!("API error {status}: {text}")));
            }

            let reply: ChatResponse = response
                .json()
                .await
                .generation_context("Invalid chat completion response")?;
            return Ok(reply
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .unwrap_or_default());
        }

        Err(last_error.unwrap_or_else(|| CadenceError::generation("Max retries exceeded")))
    }
}

#[async_trait]
impl Generator for ChatGenerator {
    async fn generate_plan(&self, goal_title: &str, goal_description: &str) -> Result<String> {
        debug!("Requesting plan from {} using {}", self.endpoint, self.model);
        let request = prompts::plan_request(goal_title, goal_description);
        self.complete(prompts::PLANNER_SYSTEM_PROMPT, &request).await
    }

    async fn generate_refinement(
        &self,
        goal_title: &str,
        goal_description: &str,
        raw_text: &str,
    ) -> Result<String> {
        debug!("Requesting refinement from {} using {}", self.endpoint, self.model);
        let request = prompts::refinement_request(goal_title, goal_description, raw_text);
        self.complete(prompts::REFINER_SYSTEM_PROMPT, &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(429));
        assert!(is_retryable_status(503));
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(401));
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "m",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            max_tokens: 10,
            temperature: 0.5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 10);
    }

    #[test]
    fn test_response_without_content() {
        let reply: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert_eq!(reply.choices[0].message.content, None);

        let empty: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.choices.is_empty());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        std::env::set_var("CADENCE_CHAT_TEST_KEY", "secret");
        let settings = GeneratorSettings {
            base_url: "http://localhost:9/v1/".to_string(),
            api_key_env: "CADENCE_CHAT_TEST_KEY".to_string(),
            ..Default::default()
        };
        let generator = ChatGenerator::from_settings(&settings).unwrap();
        assert_eq!(generator.endpoint, "http://localhost:9/v1/chat/completions");
    }
}
