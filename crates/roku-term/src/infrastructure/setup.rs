//! Interactive first-run setup: ask for the device address, prove it answers
//! ECP, and only then write the config file.

#[cfg(test)]
#[path = "setup_test.rs"]
mod tests;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use dialoguer::Input;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::DeviceClientBox;
use crate::domain::models::DeviceInfo;
use crate::infrastructure::clients::DeviceClientManager;

pub async fn first_run(config_path: &Path) -> Result<()> {
    println!("{}", Paint::cyan("Welcome to roku-term!"));
    println!("Enter the IP address of the Roku device you wish to control.");
    println!("You can find it under Settings > Network > About, or via your router.");
    println!("You will only need to do this once. To change it later, edit");
    println!("{}", config_path.display());
    println!();

    let address: String = Input::new().with_prompt("IP address").interact_text()?;

    let mut timeout_ms = Config::get(ConfigKey::DeviceTimeoutMs);
    if timeout_ms.is_empty() {
        timeout_ms = Config::default(ConfigKey::DeviceTimeoutMs);
    }
    let timeout = Duration::from_millis(timeout_ms.parse::<u64>()?);

    let device_client = DeviceClientManager::get(&address, timeout);
    let info = probe_and_write(&device_client, &address, config_path).await?;

    println!("Found {}.", Paint::green(&info.model_name));
    println!("Config written to {}", config_path.display());

    return Ok(());
}

/// Probes `query/device-info` and persists the config only on success, so a
/// failed or retried setup never leaves partial state behind.
async fn probe_and_write(
    device_client: &DeviceClientBox,
    address: &str,
    config_path: &Path,
) -> Result<DeviceInfo> {
    let info = device_client
        .device_info()
        .await
        .context("could not reach the device; no config was written")?;

    write_initial_config(config_path, address)?;

    return Ok(info);
}

fn write_initial_config(config_path: &Path, address: &str) -> Result<()> {
    let address_key = ConfigKey::DeviceAddress.to_string();

    let mut doc = toml_edit::Document::new();
    doc["general"] = toml_edit::Item::Table(toml_edit::Table::new());
    doc["general"][address_key.as_str()] = toml_edit::value(address);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(config_path, doc.to_string())?;

    return Ok(());
}
