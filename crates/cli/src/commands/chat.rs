//! `sleepsense chat` — Interactive or single-message chat mode.

use std::io::Write;
use std::sync::Arc;

use sleepsense_agent::{AssistantPipeline, WELCOME_MESSAGE};
use tokio::io::{self, AsyncBufReadExt, BufReader};

pub async fn run(
    message: Option<String>,
    user: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;

    if !config.has_api_key() {
        return Err(super::missing_api_key());
    }

    let provider = sleepsense_providers::build_from_config(&config)?;
    let knowledge = Arc::new(super::load_knowledge(&config)?);
    let pipeline = AssistantPipeline::from_config(&config, provider, knowledge);

    let user_id = user.unwrap_or_else(|| format!("cli-{}", uuid::Uuid::new_v4()));

    if let Some(msg) = message {
        eprint!("  Thinking...");
        let response = pipeline.process(&user_id, &msg).await;
        eprint!("\r              \r");
        println!("{}", response?);
        return Ok(());
    }

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║     SleepSense Assistant — Interactive Mode    ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Model:     {}", pipeline.model());
    println!("  User:      {user_id}");
    println!("  Knowledge: {} sections", pipeline.knowledge().len());
    println!();
    for line in WELCOME_MESSAGE.lines() {
        println!("  {line}");
    }
    println!();
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            print!("  You > ");
            std::io::stdout().flush()?;
            continue;
        }
        if matches!(line, "exit" | "quit" | "/exit" | "/quit" | ":q") {
            break;
        }

        eprint!("  ...");
        // Same fallback text the bot endpoint sends on failure.
        let response = pipeline.respond(&user_id, line).await;
        eprint!("\r     \r");

        println!();
        for line in response.lines() {
            println!("  Assistant > {line}");
        }
        println!();

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Sampai jumpa! 👋");
    println!();

    Ok(())
}
