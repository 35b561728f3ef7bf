//! # SleepSense Core
//!
//! Domain types, traits, and error definitions for the SleepSense OSA
//! assistant. This crate has **no framework dependencies**; it defines the
//! vocabulary every other crate speaks.
//!
//! ## Layout
//!
//! - [`intent`] — the six fixed intent labels
//! - [`knowledge`] — knowledge domains and selected sections
//! - [`message`] — conversation turns and roles
//! - [`provider`] — the LLM text-generation abstraction
//! - [`error`] — the error taxonomy

pub mod error;
pub mod intent;
pub mod knowledge;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use intent::IntentLabel;
pub use knowledge::{Domain, RelevantSection};
pub use message::{ConversationTurn, Role};
pub use provider::{GenerateRequest, GenerateResponse, GenerationConfig, Provider, Usage};
