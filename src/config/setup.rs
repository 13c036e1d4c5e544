//! First-run configuration
//!
//! When shelfr starts with no config file, a single prompt asks where the
//! catalog store should live; the entry is registered under the name
//! "catalog" and made the default. Further stores are added by editing the
//! config file.

use super::ShelfrConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

const INITIAL_STORE_NAME: &str = "catalog";

/// Prompt for a store location and save the initial configuration
///
/// # Errors
///
/// Returns `ConfigError` if the system data directory cannot be
/// determined, the prompt cannot be read, or the configuration cannot be
/// saved.
pub fn first_time_setup() -> Result<ShelfrConfig, ConfigError> {
    let default_path = dirs::data_local_dir()
        .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?
        .join("shelfr")
        .join(INITIAL_STORE_NAME);

    println!("No configuration found; setting up the first catalog store.");
    let store_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Store location")
        .default(default_path.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = ShelfrConfig::default();
    config
        .stores
        .insert(INITIAL_STORE_NAME.to_string(), PathBuf::from(store_path));
    config.default_store = Some(INITIAL_STORE_NAME.to_string());
    config.save()?;

    if let Ok(path) = ShelfrConfig::config_path() {
        println!("Saved {}", path.display());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_module_compiles() {
        // Ensures the module compiles and the function signature is correct
        let _: fn() -> Result<ShelfrConfig, ConfigError> = first_time_setup;
    }
}
