//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PrahariConfig;
use crate::domain::{PrahariError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file.
///
/// Reads the file, substitutes `${VAR}` references from the environment,
/// parses the TOML, applies `PRAHARI_*` environment overrides, and
/// validates the result.
pub fn load_config(path: impl AsRef<Path>) -> Result<PrahariConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PrahariError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PrahariError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PrahariConfig = toml::from_str(&contents).map_err(|e| {
        PrahariError::Configuration(format!(
            "Failed to parse configuration file {}: {e}",
            path.display()
        ))
    })?;

    config.apply_env_overrides()?;
    config.validate()?;

    Ok(config)
}

/// Substitute `${VAR}` references with environment variable values.
///
/// Unset variables are an error; configuration files should not silently
/// produce empty credentials.
fn substitute_env_vars(contents: &str) -> Result<String> {
    // Pattern is a fixed constant; compile failure would be a build defect
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .map_err(|e| PrahariError::Configuration(format!("Invalid substitution pattern: {e}")))?;

    let mut result = String::with_capacity(contents.len());
    let mut last_end = 0;

    for caps in re.captures_iter(contents) {
        let Some(whole) = caps.get(0) else { continue };
        let var_name = &caps[1];

        let value = std::env::var(var_name).map_err(|_| {
            PrahariError::Configuration(format!(
                "Environment variable {var_name} referenced in configuration is not set"
            ))
        })?;

        result.push_str(&contents[last_end..whole.start()]);
        result.push_str(&value);
        last_end = whole.end();
    }
    result.push_str(&contents[last_end..]);

    Ok(result)
}
