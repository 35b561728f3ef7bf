//! `sleepsense serve` — Start the HTTP gateway.

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config()?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    if !config.has_api_key() {
        return Err(super::missing_api_key());
    }

    println!("🩺 SleepSense Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Model:     {}", config.gemini.model);
    println!("   Bot:       POST /api/messages");
    println!("   Test:      POST /api/chat/test");

    sleepsense_gateway::start(config).await?;

    Ok(())
}
