//! Shared wrapper around the chat client carrying per-run model settings.

use crate::config::Config;
use crate::error::Result;
use openai_client::{ChatClient, ChatMessage, ChatRequest};

pub struct Generator {
    client: ChatClient,
    model: String,
    temperature: f32,
}

impl Generator {
    pub fn new(config: &Config) -> Self {
        let client = match &config.base_url {
            Some(url) => ChatClient::with_base_url(&config.api_key, url),
            None => ChatClient::new(&config.api_key),
        };
        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Override the sampling temperature (the corrector runs colder than
    /// the generation stages).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// One blocking completion call. Fatal on any provider error.
    pub fn complete(
        &self,
        system: Option<&str>,
        user: &str,
        max_tokens: Option<u32>,
    ) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(user));

        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            max_tokens,
        };
        Ok(self.client.complete(&request)?)
    }
}
