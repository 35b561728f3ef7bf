//! Context assembly: the two text blocks embedded in every prompt.
//!
//! - **Knowledge context**: the selected sections as `key: content`,
//!   separated by blank lines, in selection order.
//! - **Conversation context**: the most recent turns as `role: message`,
//!   one per line, oldest first, each message cut to a fixed number of
//!   characters.
//!
//! Both fall back to a fixed sentence when there is nothing to show.
//! Assembly is deterministic.

use sleepsense_core::{ConversationTurn, RelevantSection};

pub const KNOWLEDGE_FALLBACK: &str = "General information about OSA and SleepSense technology.";

pub const CONVERSATION_START: &str =
    "This is the start of our conversation about OSA and SleepSense.";

/// Turns shown in the conversation block (two exchanges).
pub const DEFAULT_CONTEXT_TURNS: usize = 4;

/// Characters kept from each turn in the conversation block.
pub const DEFAULT_SNIPPET_CHARS: usize = 150;

/// Render selected knowledge sections.
pub fn knowledge_context(sections: &[RelevantSection<'_>]) -> String {
    if sections.is_empty() {
        return KNOWLEDGE_FALLBACK.to_string();
    }

    sections
        .iter()
        .map(|s| format!("{}: {}", s.key, s.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the last `window` turns (at least one), each cut to
/// `snippet_chars` characters.
pub fn conversation_context(
    turns: &[ConversationTurn],
    window: usize,
    snippet_chars: usize,
) -> String {
    if turns.is_empty() {
        return CONVERSATION_START.to_string();
    }

    let start = turns.len().saturating_sub(window.max(1));
    turns[start..]
        .iter()
        .map(|t| format!("{}: {}", t.role, truncate_chars(&t.message, snippet_chars)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The first `max` characters of `s` (never splits a character).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sections_use_fallback() {
        assert_eq!(knowledge_context(&[]), KNOWLEDGE_FALLBACK);
    }

    #[test]
    fn sections_joined_with_blank_line() {
        let sections = [
            RelevantSection {
                key: "overview",
                content: "SleepSense adalah sistem diagnosis OSA.",
            },
            RelevantSection {
                key: "sensors",
                content: "ECG, SpO2, Motion.",
            },
        ];
        assert_eq!(
            knowledge_context(&sections),
            "overview: SleepSense adalah sistem diagnosis OSA.\n\nsensors: ECG, SpO2, Motion."
        );
    }

    #[test]
    fn empty_history_is_conversation_start() {
        assert_eq!(
            conversation_context(&[], DEFAULT_CONTEXT_TURNS, DEFAULT_SNIPPET_CHARS),
            CONVERSATION_START
        );
    }

    #[test]
    fn zero_window_shows_latest_turn() {
        let turns = [ConversationTurn::user("q0"), ConversationTurn::assistant("a0")];
        assert_eq!(conversation_context(&turns, 0, DEFAULT_SNIPPET_CHARS), "assistant: a0");
    }

    #[test]
    fn only_last_four_turns_shown() {
        let turns: Vec<ConversationTurn> = (0..6)
            .map(|i| {
                if i % 2 == 0 {
                    ConversationTurn::user(format!("q{i}"))
                } else {
                    ConversationTurn::assistant(format!("a{i}"))
                }
            })
            .collect();

        let ctx = conversation_context(&turns, DEFAULT_CONTEXT_TURNS, DEFAULT_SNIPPET_CHARS);
        assert_eq!(ctx, "user: q2\nassistant: a3\nuser: q4\nassistant: a5");
    }

    #[test]
    fn fewer_turns_than_window() {
        let turns = vec![ConversationTurn::user("Halo")];
        assert_eq!(
            conversation_context(&turns, DEFAULT_CONTEXT_TURNS, DEFAULT_SNIPPET_CHARS),
            "user: Halo"
        );
    }

    #[test]
    fn long_messages_truncated_to_150_chars() {
        let long = "x".repeat(400);
        let turns = vec![ConversationTurn::assistant(long)];
        let ctx = conversation_context(&turns, DEFAULT_CONTEXT_TURNS, DEFAULT_SNIPPET_CHARS);
        assert_eq!(ctx.len(), "assistant: ".len() + 150);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("SpO₂ naik", 4), "SpO₂");
        assert_eq!(truncate_chars("😴😴😴", 2), "😴😴");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
