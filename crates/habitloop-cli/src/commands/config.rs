use clap::Subcommand;
use habitloop_core::{AppConfig, CoreError};
use serde_json::json;

use crate::common;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the whole configuration
    Show,
    /// Print one configuration value
    Get { key: String },
    /// Set one configuration value and persist it
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load_or_default();
            common::print_json(&config)?;
        }
        ConfigAction::Get { key } => {
            let config = AppConfig::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{}", json!({ "key": key, "value": value })),
                None => return Err(CoreError::Custom(format!("unknown config key: {key}"))),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = AppConfig::load_or_default();
            config.set(&key, &value)?;
            common::print_json(&config)?;
        }
    }
    Ok(())
}
