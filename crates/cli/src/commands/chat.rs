//! `autocli chat` — Interactive or single-message chat mode.

use autocli_agent::Agent;
use autocli_config::AppConfig;
use autocli_providers::OllamaProvider;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(message: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let provider = Arc::new(OllamaProvider::new(&config.host));
    let tools = autocli_tools::default_registry();
    let mut agent = Agent::new(&config, provider, tools);

    // Streamed fragments and status markers print live, unbuffered.
    let mut sink = |text: &str| {
        print!("{text}");
        let _ = std::io::stdout().flush();
    };

    if let Some(msg) = message {
        // Single message mode
        let display = agent.process(&msg, &mut sink).await;
        if !display.is_empty() {
            println!("{display}");
        } else {
            println!();
        }
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║         AutoCLI — Interactive Mode           ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Host:   {}", config.host);
    println!("  Model:  {}", config.model);
    println!("  Tools:  file, shell, git, self_modify");
    println!();
    println!("  Commands: /status  /clear  /improve  /exit");
    println!("  Type your message and press Enter.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        match input {
            "" => {}
            "/exit" | "exit" | "quit" => break,
            "/status" => {
                println!();
                println!("{}", agent.status_report());
            }
            "/clear" => {
                agent.clear();
                println!("  История очищена.");
                println!();
            }
            "/improve" => {
                println!();
                agent.self_improve(&mut sink).await;
                println!();
                println!();
            }
            _ => {
                println!();
                let display = agent.process(input, &mut sink).await;
                if !display.is_empty() {
                    println!("{display}");
                }
                println!();
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  До встречи! 👋");
    println!();

    Ok(())
}
