//! Conversation memory for the SleepSense assistant.

pub mod history;

pub use history::{ConversationHistory, DEFAULT_MAX_TURNS, HistorySession};
