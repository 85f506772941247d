// AI implementation over an OpenAI-compatible chat completions endpoint
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::BaseAI;

/// Chat model bound to one provider, model id and temperature.
#[derive(Clone)]
pub struct OpenAIAdapter {
    client: OpenAIClient,
    model: String,
    temperature: f32,
}

impl OpenAIAdapter {
    pub fn new(api_key: &str, base_url: &str, model: impl Into<String>) -> Self {
        Self {
            client: OpenAIClient::new(api_key).with_base_url(base_url),
            model: model.into(),
            temperature: 0.0,
        }
    }

    async fn chat(&self, messages: Vec<Message>) -> Result<String> {
        let prompt_length: usize = messages.iter().map(|m| m.content.len()).sum();
        tracing::info!(model = %self.model, prompt_length, "Calling chat completion API");

        let request = messages
            .into_iter()
            .fold(ChatRequest::new(&self.model), ChatRequest::message)
            .temperature(self.temperature);

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "Chat completion failed");
                e
            })
            .context("Failed to call language model")?;

        tracing::info!(
            response_length = response.content.len(),
            model = %self.model,
            "Chat completion received"
        );

        Ok(response.content)
    }
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.chat(vec![Message::user(prompt)]).await
    }

    async fn complete_with_system(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.chat(vec![Message::system(system_prompt), Message::user(user_prompt)])
            .await
    }
}
