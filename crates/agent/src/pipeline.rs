//! The assistant pipeline: one user message in, one finished answer out.
//!
//! # Flow
//!
//! 1. Classify the intent and select knowledge sections
//! 2. Lock the user's history and append their message
//! 3. Assemble the knowledge and conversation blocks
//! 4. Render the prompt and call the provider (once, no retry)
//! 5. Append the suffix blocks to the model's text
//! 6. Append the finished answer to history and release the lock
//!
//! The history lock is held from step 2 to step 6, so messages from the
//! same user are answered one at a time. Other users are unaffected.

use crate::context::{
    DEFAULT_CONTEXT_TURNS, DEFAULT_SNIPPET_CHARS, conversation_context, knowledge_context,
    truncate_chars,
};
use crate::messages::FALLBACK_RESPONSE;
use crate::post_process::enhance_response;
use crate::prompt::build_prompt;
use serde::Serialize;
use sleepsense_config::AppConfig;
use sleepsense_core::{
    ConversationTurn, Domain, Error, GenerateRequest, GenerationConfig, IntentLabel, Provider,
};
use sleepsense_knowledge::{KnowledgeStore, classify_intent, select_relevant, triggered_domains};
use sleepsense_memory::ConversationHistory;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Characters of the user's message kept in the per-turn log event.
const LOGGED_MESSAGE_CHARS: usize = 100;

/// Knowledge-grounded question answering over a single provider.
pub struct AssistantPipeline {
    provider: Arc<dyn Provider>,
    knowledge: Arc<KnowledgeStore>,
    history: Arc<ConversationHistory>,
    model: String,
    generation: GenerationConfig,
    context_turns: usize,
    snippet_chars: usize,
}

/// Everything the pipeline would send for a message, without sending it.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub intent: IntentLabel,
    pub domains: Vec<Domain>,
    pub section_keys: Vec<String>,
    pub knowledge_context: String,
    pub conversation_context: String,
    pub prompt: String,
}

impl AssistantPipeline {
    /// Create a pipeline with the default context window (4 turns, 150 chars).
    pub fn new(
        provider: Arc<dyn Provider>,
        knowledge: Arc<KnowledgeStore>,
        history: Arc<ConversationHistory>,
        model: impl Into<String>,
        generation: GenerationConfig,
    ) -> Self {
        Self {
            provider,
            knowledge,
            history,
            model: model.into(),
            generation,
            context_turns: DEFAULT_CONTEXT_TURNS,
            snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }

    /// Wire a pipeline from configuration; history is created fresh.
    pub fn from_config(
        config: &AppConfig,
        provider: Arc<dyn Provider>,
        knowledge: Arc<KnowledgeStore>,
    ) -> Self {
        Self::new(
            provider,
            knowledge,
            Arc::new(ConversationHistory::new(config.history.max_turns)),
            config.gemini.model.clone(),
            config.gemini.generation(),
        )
        .with_context_window(config.history.context_turns, config.history.snippet_chars)
    }

    /// Set how many recent turns appear in the prompt and how long each may be.
    ///
    /// Both are at least 1, so the current message always shows up.
    pub fn with_context_window(mut self, turns: usize, snippet_chars: usize) -> Self {
        self.context_turns = turns.max(1);
        self.snippet_chars = snippet_chars.max(1);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn knowledge(&self) -> &Arc<KnowledgeStore> {
        &self.knowledge
    }

    pub fn history(&self) -> &Arc<ConversationHistory> {
        &self.history
    }

    /// Answer one message, propagating any failure.
    ///
    /// If the provider fails, the user's turn stays in history and no
    /// assistant turn is recorded.
    pub async fn process(&self, user_id: &str, message: &str) -> Result<String, Error> {
        if message.trim().is_empty() {
            return Err(Error::InvalidRequest("message must not be empty".into()));
        }

        let started = Instant::now();
        let intent = classify_intent(message);
        let sections = select_relevant(&self.knowledge, message);
        debug!(user_id, %intent, sections = sections.len(), "Message classified");

        let knowledge_ctx = knowledge_context(&sections);

        let mut session = self.history.session(user_id).await;
        session.push(ConversationTurn::user(message));
        let conversation_ctx =
            conversation_context(session.turns(), self.context_turns, self.snippet_chars);

        let prompt = build_prompt(&knowledge_ctx, &conversation_ctx, message, intent);

        debug!(user_id, model = %self.model, prompt_len = prompt.len(), "Calling provider");
        let response = self
            .provider
            .generate(GenerateRequest {
                model: self.model.clone(),
                prompt,
                generation: self.generation.clone(),
            })
            .await?;

        let text = enhance_response(&response.text, intent, !sections.is_empty());
        session.push(ConversationTurn::assistant(text.clone()));
        drop(session);

        info!(
            user_id,
            %intent,
            user_message = truncate_chars(message, LOGGED_MESSAGE_CHARS),
            sections = sections.len(),
            model = %response.model,
            response_len = text.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            api_provider = self.provider.name(),
            "Conversation logged"
        );

        Ok(text)
    }

    /// Answer one message; on failure, log and return the fixed fallback.
    pub async fn respond(&self, user_id: &str, message: &str) -> String {
        match self.process(user_id, message).await {
            Ok(text) => text,
            Err(e) => {
                error!(user_id, error = %e, "Failed to process message");
                FALLBACK_RESPONSE.to_string()
            }
        }
    }

    /// Build the prompt for a message as `process` would, without calling
    /// the provider or touching history.
    pub async fn inspect(&self, user_id: &str, message: &str) -> InspectReport {
        let intent = classify_intent(message);
        let sections = select_relevant(&self.knowledge, message);
        let knowledge_ctx = knowledge_context(&sections);

        let mut turns = self.history.read(user_id).await;
        turns.push(ConversationTurn::user(message));
        let excess = turns.len().saturating_sub(self.history.max_turns());
        let conversation_ctx = conversation_context(
            &turns[excess..],
            self.context_turns,
            self.snippet_chars,
        );

        let prompt = build_prompt(&knowledge_ctx, &conversation_ctx, message, intent);

        InspectReport {
            intent,
            domains: triggered_domains(message),
            section_keys: sections.iter().map(|s| s.key.to_string()).collect(),
            knowledge_context: knowledge_ctx,
            conversation_context: conversation_ctx,
            prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{CONVERSATION_START, KNOWLEDGE_FALLBACK};
    use crate::post_process::{CITATION, MEDICAL_DISCLAIMER, TECHNICAL_SUPPORT};
    use crate::test_helpers::{FailingProvider, ScriptedProvider};
    use sleepsense_core::{ProviderError, Role};

    fn pipeline(provider: Arc<dyn Provider>) -> AssistantPipeline {
        AssistantPipeline::new(
            provider,
            Arc::new(KnowledgeStore::builtin()),
            Arc::new(ConversationHistory::default()),
            "gemini-1.5-flash",
            GenerationConfig::default(),
        )
    }

    #[tokio::test]
    async fn troubleshooting_scenario() {
        let provider = Arc::new(ScriptedProvider::texts(&["Coba restart ESP32."]));
        let p = pipeline(provider.clone());

        let answer = p
            .process("u1", "Device saya error, bagaimana troubleshoot?")
            .await
            .unwrap();

        assert!(answer.starts_with("Coba restart ESP32."));
        assert!(answer.contains(TECHNICAL_SUPPORT));
        assert!(answer.contains(CITATION));
        assert!(!answer.contains(MEDICAL_DISCLAIMER));

        let prompt = provider.prompts().remove(0);
        assert!(prompt.contains("DETECTED INTENT: device_troubleshooting"));
        assert!(prompt.contains("setup_guide: "));
        assert!(prompt.contains("troubleshooting: "));
        assert!(prompt.contains("maintenance: "));
    }

    #[tokio::test]
    async fn medical_education_scenario() {
        let provider = Arc::new(ScriptedProvider::texts(&["OSA adalah gangguan napas."]));
        let p = pipeline(provider.clone());

        let answer = p.process("u1", "Apa itu OSA?").await.unwrap();
        assert!(answer.contains(MEDICAL_DISCLAIMER));
        assert!(!answer.contains(TECHNICAL_SUPPORT));
        assert!(
            provider.prompts()[0].contains("DETECTED INTENT: medical_education")
        );
    }

    #[tokio::test]
    async fn unmatched_greeting_scenario() {
        let provider = Arc::new(ScriptedProvider::texts(&["Halo! Ada yang bisa dibantu?"]));
        let p = pipeline(provider.clone());

        let answer = p.process("u1", "Halo").await.unwrap();
        assert_eq!(answer, "Halo! Ada yang bisa dibantu?");

        let prompt = provider.prompts().remove(0);
        assert!(prompt.contains(&format!(
            "KNOWLEDGE BASE dari Research Paper SleepSense:\n{KNOWLEDGE_FALLBACK}\n"
        )));
        assert!(prompt.contains("DETECTED INTENT: general_inquiry"));
    }

    #[tokio::test]
    async fn first_message_context_includes_itself() {
        let provider = Arc::new(ScriptedProvider::texts(&["Halo!"]));
        let p = pipeline(provider.clone());
        p.process("new-user", "Halo").await.unwrap();

        let prompt = provider.prompts().remove(0);
        assert!(prompt.contains("CONVERSATION CONTEXT:\nuser: Halo\n"));
    }

    #[tokio::test]
    async fn inspect_on_empty_history_shows_start_sentence() {
        let p = AssistantPipeline::new(
            Arc::new(ScriptedProvider::texts(&[])),
            Arc::new(KnowledgeStore::builtin()),
            Arc::new(ConversationHistory::default()),
            "m",
            GenerationConfig::default(),
        )
        .with_context_window(4, 150);
        let empty = p.history().read("nobody").await;
        assert_eq!(
            conversation_context(&empty, 4, 150),
            CONVERSATION_START
        );

        let report = p.inspect("nobody", "Halo").await;
        assert_eq!(report.intent, IntentLabel::GeneralInquiry);
        assert!(report.section_keys.is_empty());
        assert_eq!(report.knowledge_context, KNOWLEDGE_FALLBACK);
        assert_eq!(report.conversation_context, "user: Halo");
        assert_eq!(p.history().user_count().await, 0);
    }

    #[tokio::test]
    async fn history_records_both_turns() {
        let provider = Arc::new(ScriptedProvider::texts(&["Jawaban satu", "Jawaban dua"]));
        let p = pipeline(provider.clone());

        p.process("u1", "Halo").await.unwrap();
        p.process("u1", "Apa itu OSA?").await.unwrap();

        let turns = p.history().read("u1").await;
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].message, "Jawaban satu");
        assert!(turns[3].message.contains(MEDICAL_DISCLAIMER));

        let second = &provider.prompts()[1];
        assert!(second.contains(
            "CONVERSATION CONTEXT:\nuser: Halo\nassistant: Jawaban satu\nuser: Apa itu OSA?\n"
        ));
    }

    #[tokio::test]
    async fn history_cap_holds_across_many_messages() {
        let replies: Vec<String> = (0..10).map(|i| format!("r{i}")).collect();
        let refs: Vec<&str> = replies.iter().map(String::as_str).collect();
        let provider = Arc::new(ScriptedProvider::texts(&refs));
        let p = pipeline(provider.clone());

        for i in 0..10 {
            p.process("u1", &format!("pesan {i}")).await.unwrap();
        }
        assert_eq!(p.history().read("u1").await.len(), 12);

        let last = provider.prompts().pop().unwrap();
        assert!(last.contains("CONVERSATION CONTEXT:\nassistant: r7\nuser: pesan 8\nassistant: r8\nuser: pesan 9\n"));
    }

    #[tokio::test]
    async fn provider_failure_propagates_and_keeps_user_turn() {
        let p = pipeline(Arc::new(FailingProvider::new(ProviderError::RateLimited {
            retry_after_secs: 5,
        })));

        let err = p.process("u1", "Apa itu OSA?").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Provider(ProviderError::RateLimited { .. })
        ));

        let turns = p.history().read("u1").await;
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::User);
    }

    #[tokio::test]
    async fn respond_returns_fallback_on_failure() {
        let p = pipeline(Arc::new(FailingProvider::new(ProviderError::Network(
            "connection refused".into(),
        ))));
        assert_eq!(p.respond("u1", "Halo").await, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn blank_message_rejected_before_provider() {
        let provider = Arc::new(ScriptedProvider::texts(&[]));
        let p = pipeline(provider.clone());
        let err = p.process("u1", "   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert!(provider.prompts().is_empty());
        assert_eq!(p.history().user_count().await, 0);
    }

    #[tokio::test]
    async fn sampling_parameters_are_forwarded() {
        let provider = Arc::new(ScriptedProvider::texts(&["ok"]));
        let mut config = AppConfig::default();
        config.gemini.model = "gemini-pro".into();
        let p = AssistantPipeline::from_config(
            &config,
            provider.clone(),
            Arc::new(KnowledgeStore::builtin()),
        );

        p.process("u1", "Halo").await.unwrap();
        let request = provider.requests().remove(0);
        assert_eq!(request.model, "gemini-pro");
        assert_eq!(request.generation.top_k, Some(40));
        assert_eq!(p.model(), "gemini-pro");
    }

    #[tokio::test]
    async fn zero_context_window_still_shows_current_message() {
        let provider = Arc::new(ScriptedProvider::texts(&["ok"]));
        let p = pipeline(provider.clone()).with_context_window(0, 0);

        let report = p.inspect("u1", "Halo").await;
        assert_eq!(report.conversation_context, "user: H");

        p.process("u1", "Halo").await.unwrap();
        assert!(provider.prompts()[0].contains("user: H"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_users_are_independent() {
        let replies: Vec<String> = (0..20).map(|i| format!("jawaban {i}")).collect();
        let refs: Vec<&str> = replies.iter().map(String::as_str).collect();
        let p = Arc::new(pipeline(Arc::new(ScriptedProvider::texts(&refs))));

        let mut handles = Vec::new();
        for i in 0..20 {
            let p = Arc::clone(&p);
            handles.push(tokio::spawn(async move {
                let user = format!("user-{}", i % 2);
                p.process(&user, "Halo").await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        for user in ["user-0", "user-1"] {
            let turns = p.history().read(user).await;
            assert_eq!(turns.len(), 12);
            for pair in turns.chunks(2) {
                assert_eq!(pair[0].role, Role::User);
                assert_eq!(pair[1].role, Role::Assistant);
            }
        }
    }
}
