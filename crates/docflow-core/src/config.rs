//! Runtime configuration, built once at startup and passed to each stage.
//!
//! No stage reads ambient environment state after construction: the CLI
//! loads a `Config` up front and hands it (or a [`crate::generator::Generator`]
//! built from it) to whatever it runs.

use crate::error::{DocflowError, Result};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "DOCFLOW_MODEL";
pub const BASE_URL_VAR: &str = "DOCFLOW_BASE_URL";
pub const TEMPERATURE_VAR: &str = "DOCFLOW_TEMPERATURE";

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    /// Override for the provider endpoint; `None` means the client default.
    pub base_url: Option<String>,
    pub temperature: f32,
}

impl Config {
    /// Load `.env` from the working directory (if present), then read
    /// configuration from the process environment. A missing credential is
    /// fatal before any work starts.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Testable core of [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(DocflowError::MissingApiKey)?;

        let temperature = match lookup(TEMPERATURE_VAR) {
            Some(raw) => raw.parse::<f32>().map_err(|_| DocflowError::InvalidEnvValue {
                var: TEMPERATURE_VAR,
                value: raw,
            })?,
            None => DEFAULT_TEMPERATURE,
        };

        Ok(Self {
            api_key,
            model: lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup(BASE_URL_VAR),
            temperature,
        })
    }
}
