//! Mask command implementation
//!
//! Reads a text from the argument, a file, or stdin, runs the masking
//! pipeline, and prints the original text, the masked text, and the
//! identified values per kind.

use crate::config::load_config;
use crate::engine::MaskingEngine;
use crate::recognizer::HttpRecognizer;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Text to mask; reads from --file or stdin when omitted
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Emit the full result as JSON instead of the readable report
    #[arg(long)]
    pub json: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let text = self.read_input()?;

        // Recognizer construction is fatal on failure: pattern masking alone
        // does not cover names, organizations, or locations
        let recognizer = Arc::new(HttpRecognizer::new(&config.recognizer)?);
        let engine = MaskingEngine::new(config, recognizer)?;

        let result = engine.analyze(&text).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(0);
        }

        println!("Original Text:");
        println!("{text}");
        println!();
        println!("Masked Text:");
        println!("{}", result.masked_text);
        println!();
        println!("Identified sensitive information:");
        for (kind, values) in &result.found_by_kind {
            println!("{kind}: {values:?}");
        }

        Ok(0)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }
        if let Some(ref path) = self.file {
            return Ok(std::fs::read_to_string(path)?);
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
