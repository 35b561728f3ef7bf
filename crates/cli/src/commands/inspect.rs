//! `sleepsense inspect` — Show how a message would be answered.
//!
//! Runs classification, knowledge selection and prompt construction
//! exactly as the pipeline does, but never calls the model, so no API
//! key is needed.

use std::sync::Arc;

use sleepsense_agent::{AssistantPipeline, InspectReport};
use sleepsense_core::error::ProviderError;
use sleepsense_core::provider::{GenerateRequest, GenerateResponse, Provider};

/// Stand-in provider; `inspect` never reaches it.
struct Offline;

#[async_trait::async_trait]
impl Provider for Offline {
    fn name(&self) -> &str {
        "offline"
    }

    async fn generate(&self, _request: GenerateRequest) -> Result<GenerateResponse, ProviderError> {
        Err(ProviderError::NotConfigured("inspect does not call the model".into()))
    }
}

pub async fn run(message: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let knowledge = Arc::new(super::load_knowledge(&config)?);
    let pipeline = AssistantPipeline::from_config(&config, Arc::new(Offline), knowledge);

    let report = pipeline.inspect("inspect", &message).await;
    print_report(&report);

    Ok(())
}

fn print_report(report: &InspectReport) {
    println!("🔎 SleepSense Inspect");
    println!("=====================");
    println!("  Intent:    {}", report.intent);

    let domains: Vec<&str> = report.domains.iter().map(|d| d.as_str()).collect();
    if domains.is_empty() {
        println!("  Domains:   (none)");
    } else {
        println!("  Domains:   {}", domains.join(", "));
    }
    println!("  Sections:  {}", report.section_keys.len());
    for key in &report.section_keys {
        println!("    - {key}");
    }

    println!("\n── Knowledge context ──\n{}", report.knowledge_context);
    println!("\n── Conversation context ──\n{}", report.conversation_context);
    println!("\n── Prompt ──\n{}", report.prompt);
}
