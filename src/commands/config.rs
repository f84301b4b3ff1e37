//! Configuration commands for managing pressroom settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{PressError, Result};
use crate::types::ResourceKind;

/// Show current configuration, with defaults filled in
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    let timeout = config.request_timeout().map(|t| t.as_secs());
    let json_output = json!({
        "api": { "url": config.api_url() },
        "author": config.author(),
        "posts": { "page_size": config.page_size(ResourceKind::Posts) },
        "publications": { "page_size": config.page_size(ResourceKind::Publications) },
        "download": { "dir": config.download_dir().display().to_string() },
        "toast": { "seconds": config.toast.seconds },
        "request": { "timeout": timeout },
        "config_file": path.display().to_string(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}: {}\n", "api.url".cyan(), config.api_url()));
    text_output.push_str(&format!("{}: {}\n", "author".cyan(), config.author()));
    text_output.push_str(&format!(
        "{}: {}\n",
        "posts.page_size".cyan(),
        config.page_size(ResourceKind::Posts)
    ));
    text_output.push_str(&format!(
        "{}: {}\n",
        "publications.page_size".cyan(),
        config.page_size(ResourceKind::Publications)
    ));
    text_output.push_str(&format!(
        "{}: {}\n",
        "download.dir".cyan(),
        config.download_dir().display()
    ));
    text_output.push_str(&format!(
        "{}: {}\n",
        "toast.seconds".cyan(),
        config.toast.seconds
    ));
    let timeout_text = match timeout {
        Some(secs) => secs.to_string(),
        None => "none".dimmed().to_string(),
    };
    text_output.push_str(&format!("{}: {}\n", "request.timeout".cyan(), timeout_text));
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Get a specific configuration value as stored in the config file
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config
        .get(key)?
        .ok_or_else(|| PressError::Config(format!("{key} not set")))?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
        "configured": true,
    }))
    .with_text(value.clone())
    .print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?;
    let text = match &stored {
        Some(v) => format!("Set {} to {}", key.cyan(), v),
        None => format!("Cleared {}", key.cyan()),
    };

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(text)
    .print(json)
}
