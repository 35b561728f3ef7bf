//! LLM provider implementations for the SleepSense assistant.
//!
//! All providers implement the `sleepsense_core::Provider` trait.
//! [`build_from_config`] constructs the configured one.

pub mod gemini;
pub mod probe;
pub mod router;

pub use gemini::GeminiProvider;
pub use probe::{CANDIDATE_MODELS, ProbeAttempt, ProbeResult, probe_models};
pub use router::{build_from_config, build_gemini};
