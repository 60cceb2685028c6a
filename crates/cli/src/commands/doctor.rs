//! `autocli doctor` — Diagnose the Ollama connection.

use autocli_config::AppConfig;
use autocli_core::provider::Provider;
use autocli_providers::OllamaProvider;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 AutoCLI Doctor — System Diagnostics");
    println!("======================================\n");

    let mut issues = 0;

    // Check config
    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Config valid");
            config
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            return Err(e.into());
        }
    };

    // Check Ollama reachability
    let provider = OllamaProvider::new(&config.host);
    match provider.health_check().await {
        Ok(true) => println!("  ✅ Ollama reachable at {}", config.host),
        _ => {
            println!("  ❌ Ollama not reachable at {} — is it running?", config.host);
            issues += 1;
        }
    }

    // Check the configured model is available
    match provider.list_models().await {
        Ok(models) => {
            if models.iter().any(|m| m == &config.model) {
                println!("  ✅ Model '{}' available", config.model);
            } else {
                println!(
                    "  ⚠️  Model '{}' not found — run `ollama pull {}`",
                    config.model, config.model
                );
                if !models.is_empty() {
                    println!("     Available: {}", models.join(", "));
                }
                issues += 1;
            }
        }
        Err(e) => {
            println!("  ❌ Could not list models: {e}");
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
