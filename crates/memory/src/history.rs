//! Per-user conversation history.
//!
//! Each user gets an independent, bounded, append-only log of turns. The
//! map of users sits behind an `RwLock` that is only held long enough to
//! find or create a user's slot; the slot itself is a `Mutex`, so requests
//! for the same user serialize while different users proceed in parallel.
//!
//! Nothing is persisted. History lives as long as the owning
//! [`ConversationHistory`] value.

use sleepsense_core::ConversationTurn;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Turns kept per user (six user/assistant pairs).
pub const DEFAULT_MAX_TURNS: usize = 12;

type Slot = Arc<Mutex<Vec<ConversationTurn>>>;

/// `user_id -> ordered turns`, capped per user.
pub struct ConversationHistory {
    max_turns: usize,
    users: RwLock<HashMap<String, Slot>>,
}

impl ConversationHistory {
    /// Create an empty history keeping at most `max_turns` turns per user.
    ///
    /// The cap is clamped to `1..=DEFAULT_MAX_TURNS`.
    pub fn new(max_turns: usize) -> Self {
        Self {
            max_turns: max_turns.clamp(1, DEFAULT_MAX_TURNS),
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    async fn slot(&self, user_id: &str) -> Slot {
        if let Some(slot) = self.users.read().await.get(user_id) {
            return Arc::clone(slot);
        }

        let mut users = self.users.write().await;
        let slot = users.entry(user_id.to_string()).or_insert_with(|| {
            tracing::debug!(user_id, "New conversation history");
            Arc::new(Mutex::new(Vec::new()))
        });
        Arc::clone(slot)
    }

    /// Lock one user's history for a read-modify-write cycle.
    ///
    /// Other callers asking for the same user wait until the returned
    /// session is dropped.
    pub async fn session(&self, user_id: &str) -> HistorySession {
        let slot = self.slot(user_id).await;
        HistorySession {
            max_turns: self.max_turns,
            turns: slot.lock_owned().await,
        }
    }

    /// Append one turn, dropping the oldest turns beyond the cap.
    pub async fn append(&self, user_id: &str, turn: ConversationTurn) {
        self.session(user_id).await.push(turn);
    }

    /// A copy of a user's turns, oldest first. Empty for unknown users.
    pub async fn read(&self, user_id: &str) -> Vec<ConversationTurn> {
        let slot = match self.users.read().await.get(user_id) {
            Some(slot) => Arc::clone(slot),
            None => return Vec::new(),
        };
        let turns = slot.lock().await;
        turns.clone()
    }

    /// Number of users with a history.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}

/// Exclusive access to one user's turns.
pub struct HistorySession {
    max_turns: usize,
    turns: OwnedMutexGuard<Vec<ConversationTurn>>,
}

impl HistorySession {
    /// Append a turn, then drop the oldest until the cap holds.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
        if self.turns.len() > self.max_turns {
            let excess = self.turns.len() - self.max_turns;
            self.turns.drain(..excess);
        }
    }

    /// The user's turns, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sleepsense_core::Role;

    #[tokio::test]
    async fn unknown_user_reads_empty() {
        let history = ConversationHistory::default();
        assert!(history.read("nobody").await.is_empty());
        assert_eq!(history.user_count().await, 0);
    }

    #[tokio::test]
    async fn append_preserves_order() {
        let history = ConversationHistory::default();
        history.append("u1", ConversationTurn::user("Apa itu OSA?")).await;
        history
            .append("u1", ConversationTurn::assistant("OSA adalah ..."))
            .await;

        let turns = history.read("u1").await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(history.user_count().await, 1);
    }

    #[tokio::test]
    async fn cap_drops_oldest() {
        let history = ConversationHistory::default();
        for i in 0..30 {
            history
                .append("u1", ConversationTurn::user(format!("pesan {i}")))
                .await;
            assert!(history.read("u1").await.len() <= DEFAULT_MAX_TURNS);
        }

        let turns = history.read("u1").await;
        assert_eq!(turns.len(), 12);
        assert_eq!(turns[0].message, "pesan 18");
        assert_eq!(turns[11].message, "pesan 29");
    }

    #[tokio::test]
    async fn custom_cap() {
        let history = ConversationHistory::new(3);
        for i in 0..5 {
            history
                .append("u1", ConversationTurn::user(i.to_string()))
                .await;
        }
        let messages: Vec<String> = history
            .read("u1")
            .await
            .into_iter()
            .map(|t| t.message)
            .collect();
        assert_eq!(messages, ["2", "3", "4"]);
    }

    #[tokio::test]
    async fn zero_cap_is_clamped() {
        let history = ConversationHistory::new(0);
        assert_eq!(history.max_turns(), 1);
    }

    #[tokio::test]
    async fn oversized_cap_is_clamped() {
        let history = ConversationHistory::new(40);
        assert_eq!(history.max_turns(), DEFAULT_MAX_TURNS);

        for i in 0..40 {
            history.append("u1", ConversationTurn::user(format!("m{i}"))).await;
        }
        assert_eq!(history.read("u1").await.len(), DEFAULT_MAX_TURNS);
    }

    #[tokio::test]
    async fn users_are_independent() {
        let history = ConversationHistory::default();
        for _ in 0..20 {
            history.append("a", ConversationTurn::user("a")).await;
        }
        history.append("b", ConversationTurn::user("b")).await;

        assert_eq!(history.read("a").await.len(), 12);
        assert_eq!(history.read("b").await.len(), 1);
    }

    #[tokio::test]
    async fn session_sees_its_own_pushes() {
        let history = ConversationHistory::default();
        let mut session = history.session("u1").await;
        assert!(session.is_empty());
        session.push(ConversationTurn::user("Halo"));
        assert_eq!(session.turns()[0].message, "Halo");
        assert_eq!(session.len(), 1);
        drop(session);

        assert_eq!(history.read("u1").await.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_same_user_respect_cap() {
        let history = Arc::new(ConversationHistory::default());
        let mut handles = Vec::new();
        for i in 0..64 {
            let history = Arc::clone(&history);
            handles.push(tokio::spawn(async move {
                history
                    .append("shared", ConversationTurn::user(i.to_string()))
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(history.read("shared").await.len(), 12);
        assert_eq!(history.user_count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn session_serializes_same_user() {
        let history = Arc::new(ConversationHistory::default());
        let mut handles = Vec::new();
        for i in 0..16 {
            let history = Arc::clone(&history);
            handles.push(tokio::spawn(async move {
                let mut session = history.session("u1").await;
                session.push(ConversationTurn::user(format!("q{i}")));
                tokio::task::yield_now().await;
                session.push(ConversationTurn::assistant(format!("a{i}")));
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Pairs are never interleaved.
        let turns = history.read("u1").await;
        for pair in turns.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
            assert_eq!(pair[0].message[1..], pair[1].message[1..]);
        }
    }

    #[tokio::test]
    async fn different_users_do_not_block() {
        let history = ConversationHistory::default();
        let _held = history.session("a").await;

        let other = tokio::time::timeout(
            std::time::Duration::from_secs(1),
            history.session("b"),
        )
        .await;
        assert!(other.is_ok());
    }
}
