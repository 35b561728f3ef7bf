//! `sleepsense knowledge` — List the knowledge base.

use sleepsense_core::Domain;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let store = super::load_knowledge(&config)?;

    println!("📚 SleepSense Knowledge Base");
    println!("============================");
    match &config.knowledge.path {
        Some(path) => println!("  Source:   {}", path.display()),
        None => println!("  Source:   built-in"),
    }
    println!("  Sections: {}", store.len());
    println!();

    for domain in Domain::ALL {
        let keys = store.keys(domain);
        println!("  {domain} ({})", keys.len());
        for key in keys {
            println!("    - {key}");
        }
    }

    Ok(())
}
