//! Application configuration.
//!
//! Stored as pretty-printed JSON next to the database. A missing file is
//! not an error; every field has a working default so the tool runs
//! unconfigured out of the box.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Prefill values for the interactive entry prompts.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DefaultsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

/// Export destination settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExportConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup; existing values are offered as prompt defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let defaults = config.defaults.clone().unwrap_or_default();
        let project: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Default project name")
            .with_initial_text(defaults.project.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let assignee: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Default assignee")
            .with_initial_text(defaults.assignee.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let export = config.export.clone().unwrap_or_default();
        let output_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Export output directory (blank for current)")
            .with_initial_text(export.output_dir.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        config.defaults = Some(DefaultsConfig {
            project: non_empty(project),
            assignee: non_empty(assignee),
        });
        config.export = Some(ExportConfig {
            output_dir: non_empty(output_dir),
        });

        if let Some(dir) = config.export.as_ref().and_then(|e| e.output_dir.as_deref()) {
            fs::create_dir_all(dir)?;
        }

        config.save()?;
        msg_success!(Message::ConfigSaved);
        Ok(config)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
