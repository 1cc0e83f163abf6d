#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::RemoteCommand;
use crate::domain::models::Trigger;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    DeviceAddress,
    DeviceTimeoutMs,
    LogLevel,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::ConfigFile => {
                return default_config_path()
                    .to_str()
                    .unwrap_or_default()
                    .to_string();
            }
            ConfigKey::DeviceAddress => "",
            ConfigKey::DeviceTimeoutMs => "1000",
            ConfigKey::LogLevel => "info",
        };

        return res.to_string();
    }

    /// Layers defaults, then the `[general]` section of the config file, then
    /// CLI overrides into the process-wide map. A present-but-broken file is
    /// fatal; so is ending up with no device address.
    pub async fn load(config_file: &str, overrides: &[(ConfigKey, String)]) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }
        Config::set(ConfigKey::ConfigFile, config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let doc = read_document(&config_path).await?;
            let general = match doc.get("general") {
                Some(item) => item
                    .as_table()
                    .ok_or_else(|| anyhow!("[general] is not a table"))?,
                None => bail!(
                    "config file {} has no [general] section",
                    config_path.display()
                ),
            };

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = general.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        for (key, val) in overrides {
            if !val.is_empty() {
                Config::set(*key, val);
            }
        }

        if Config::get(ConfigKey::DeviceAddress).is_empty() {
            bail!("no device address is configured; run `roku-term setup`");
        }

        tracing::debug!(
            device_address = Config::get(ConfigKey::DeviceAddress),
            device_timeout_ms = Config::get(ConfigKey::DeviceTimeoutMs),
            "config"
        );

        return Ok(());
    }

    /// Reads the optional `[keymap]` table. Kept out of the scalar map so the
    /// binding table is constructed explicitly at startup. Unknown command
    /// names and unusable trigger spellings are fatal rather than silently
    /// skipped.
    pub async fn load_keymap(config_file: &str) -> Result<Vec<(RemoteCommand, Trigger)>> {
        let config_path = path::PathBuf::from(config_file);
        if !config_path.exists() {
            return Ok(vec![]);
        }

        let doc = read_document(&config_path).await?;
        let keymap = match doc.get("keymap") {
            Some(item) => item
                .as_table()
                .ok_or_else(|| anyhow!("[keymap] is not a table"))?,
            None => return Ok(vec![]),
        };

        let mut overrides = vec![];
        for (name, val) in keymap.iter() {
            let command = match RemoteCommand::parse(name) {
                Some(command) => command,
                None => bail!("[keymap] has an unknown command name: {name}"),
            };

            let spelling = val
                .as_str()
                .ok_or_else(|| anyhow!("[keymap] value for {name} is not a string"))?;
            let trigger = match Trigger::parse(spelling) {
                Some(trigger) => trigger,
                None => bail!("[keymap] has an unusable trigger for {name}: {spelling}"),
            };

            overrides.push((command, trigger));
        }

        return Ok(overrides);
    }
}

fn default_config_path() -> path::PathBuf {
    return dirs::config_dir()
        .unwrap_or_else(|| path::PathBuf::from("."))
        .join("roku-term/config.toml");
}

async fn read_document(config_path: &path::Path) -> Result<toml_edit::Document> {
    let toml_str = fs::read_to_string(config_path).await?;
    return Ok(toml_str.parse::<toml_edit::Document>()?);
}
