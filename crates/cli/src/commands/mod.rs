pub mod chat;
pub mod doctor;
pub mod inspect;
pub mod knowledge;
pub mod models;
pub mod serve;
pub mod status;

use sleepsense_config::AppConfig;
use sleepsense_knowledge::KnowledgeStore;

pub(crate) fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    Ok(AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?)
}

pub(crate) fn load_knowledge(config: &AppConfig) -> Result<KnowledgeStore, Box<dyn std::error::Error>> {
    Ok(KnowledgeStore::load(config.knowledge.path.as_deref())
        .map_err(|e| format!("Failed to load knowledge base: {e}"))?)
}

/// Print setup instructions for a missing key and return the fatal error.
pub(crate) fn missing_api_key() -> Box<dyn std::error::Error> {
    eprintln!();
    eprintln!("  ERROR: No Gemini API key configured!");
    eprintln!();
    eprintln!("  Set the environment variable:");
    eprintln!("    export GEMINI_API_KEY='...'");
    eprintln!();
    eprintln!("  Or add it to your config file:");
    eprintln!("    {}", AppConfig::config_path().display());
    eprintln!("    [gemini]");
    eprintln!("    api_key = \"...\"");
    eprintln!();
    eprintln!("  Get a key at: https://makersuite.google.com/app/apikey");
    eprintln!();
    "No API key found. See above for setup instructions.".into()
}
