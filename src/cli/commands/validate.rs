//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Recognizer Endpoint: {}", config.recognizer.endpoint);
        println!("  Recognizer Model: {}", config.recognizer.model);
        println!(
            "  Recognizer Timeout: {}s",
            config.recognizer.timeout_seconds
        );
        println!(
            "  Overlap Policy: {}",
            config.masking.overlap_policy.label()
        );
        println!("  Dry Run: {}", config.masking.dry_run);
        match config.masking.pattern_library {
            Some(ref path) => println!("  Pattern Library: {}", path.display()),
            None => println!("  Pattern Library: built-in"),
        }
        println!("  Audit Enabled: {}", config.audit.enabled);
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validate_missing_file_exits_with_config_error() {
        let args = ValidateArgs {};
        let code = args.execute("/nonexistent/prahari.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
