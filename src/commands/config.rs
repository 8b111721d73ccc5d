//! Config command - read or change configuration values

use crate::{PapershelfError, cli::ConfigCommands, config::ShelfConfig};

type Result<T> = std::result::Result<T, PapershelfError>;

/// Execute the config command
///
/// # Errors
/// Returns an error if the setting is malformed, the key is unknown, or saving fails.
pub fn execute(mut config: ShelfConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => match config.get(key) {
            Some(value) => println!("{value}"),
            None if crate::config::KEYS.contains(&key.as_str()) => {
                if !quiet {
                    println!("{key} is not set");
                }
            }
            None => {
                return Err(PapershelfError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    crate::config::KEYS.join(", ")
                )));
            }
        },
    }
    Ok(())
}

fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| {
            PapershelfError::InvalidInput(
                "Invalid format. Use: papershelf config set key=value".into(),
            )
        })
}
