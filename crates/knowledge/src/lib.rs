//! SleepSense knowledge base, intent classification and relevance selection.
//!
//! Everything here is synchronous and pure apart from loading a knowledge
//! file at startup.

mod builtin;
pub mod classifier;
pub mod selector;
pub mod store;

pub use classifier::classify_intent;
pub use selector::{select_relevant, triggered_domains};
pub use store::{KnowledgeError, KnowledgeStore, Section};
