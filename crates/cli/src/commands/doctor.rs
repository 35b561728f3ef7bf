//! `sleepsense doctor` — Diagnose configuration and connectivity.

use sleepsense_config::AppConfig;
use sleepsense_core::provider::Provider;
use sleepsense_knowledge::KnowledgeStore;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 SleepSense Doctor — System Diagnostics");
    println!("========================================\n");

    let mut issues = 0;

    let config = match AppConfig::load() {
        Ok(config) => {
            if AppConfig::config_path().exists() {
                println!("  ✅ Config file valid");
            } else {
                println!("  ✅ Using default configuration (no config file)");
            }
            config
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            println!("\n  ⚠️  1 issue(s) found. Fix the config and run doctor again.");
            return Ok(());
        }
    };

    match KnowledgeStore::load(config.knowledge.path.as_deref()) {
        Ok(store) => println!("  ✅ Knowledge base loaded ({} sections)", store.len()),
        Err(e) => {
            println!("  ❌ Knowledge base failed to load: {e}");
            issues += 1;
        }
    }

    if config.has_api_key() {
        println!("  ✅ API key configured");

        let provider = sleepsense_providers::build_gemini(&config)?;
        match provider.health_check().await {
            Ok(true) => println!("  ✅ Gemini API reachable"),
            Ok(false) => {
                println!("  ⚠️  Gemini API answered but reported unhealthy");
                issues += 1;
            }
            Err(e) => {
                println!("  ❌ Gemini API check failed: {e}");
                issues += 1;
            }
        }
    } else {
        println!("  ❌ No API key configured — set GEMINI_API_KEY");
        issues += 1;
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
