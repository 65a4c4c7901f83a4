//! `openai-client` — blocking driver for OpenAI-compatible chat completion
//! endpoints.
//!
//! The whole provider surface used by this workspace is a single request
//! shape: POST a model name and a list of chat messages, get back the first
//! choice's text. Everything else (retries, streaming, tool use) is
//! intentionally out of scope — callers treat any failure as fatal.
//!
//! ```text
//! ChatRequest
//!     │
//!     ▼
//! ChatClient      ← POST {base_url}/chat/completions, bearer auth
//!     │
//!     ▼
//! ChatResponse    ← typed serde structs; first choice content returned
//! ```
//!
//! The base URL is configurable so tests can point the client at a local
//! mock server.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ChatClient, DEFAULT_BASE_URL};
pub use error::ChatClientError;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, TokenUsage};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, ChatClientError>;
