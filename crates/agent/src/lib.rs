//! The SleepSense assistant pipeline.
//!
//! Turns a `(user_id, message)` pair into a finished answer:
//!
//! 1. **Classify** the message into one of six intents
//! 2. **Select** the knowledge domains its keywords trigger
//! 3. **Assemble** the knowledge and conversation blocks
//! 4. **Prompt** the model once through the configured provider
//! 5. **Post-process** with fixed disclaimer, support and citation blocks
//!
//! Every step except the provider call is a pure function and lives in
//! its own module.

pub mod context;
pub mod messages;
pub mod pipeline;
pub mod post_process;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use context::{conversation_context, knowledge_context};
pub use messages::{FALLBACK_RESPONSE, SAMPLE_QUERIES, WELCOME_MESSAGE};
pub use pipeline::{AssistantPipeline, InspectReport};
pub use post_process::enhance_response;
pub use prompt::{build_prompt, intent_guidance};
