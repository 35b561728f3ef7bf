//! `sleepsense status` — Show configuration.

use sleepsense_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;

    println!("🩺 SleepSense Status");
    println!("====================");
    println!("  Config file:  {}", AppConfig::config_path().display());
    println!("  API key:      {}", if config.has_api_key() { "configured" } else { "missing" });
    println!("  Model:        {}", config.gemini.model);
    println!(
        "  Generation:   temperature {}, top_p {}, top_k {}, max {} tokens",
        config.gemini.temperature,
        config.gemini.top_p,
        config.gemini.top_k,
        config.gemini.max_output_tokens
    );
    println!("  Timeout:      {}s", config.gemini.timeout_secs);
    println!("  Gateway:      {}:{}", config.gateway.host, config.gateway.port);
    println!(
        "  History:      {} turns kept, {} in prompt, {} chars each",
        config.history.max_turns, config.history.context_turns, config.history.snippet_chars
    );
    match &config.knowledge.path {
        Some(path) => println!("  Knowledge:    {}", path.display()),
        None => println!("  Knowledge:    built-in"),
    }

    if AppConfig::config_path().exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file, using defaults and environment");
    }

    Ok(())
}
