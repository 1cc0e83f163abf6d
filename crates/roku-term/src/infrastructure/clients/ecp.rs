#[cfg(test)]
#[path = "ecp_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::DeviceClient;
use crate::domain::models::DeviceInfo;

/// Roku devices expose ECP on this fixed port.
pub const ECP_PORT: u16 = 8060;

static MODEL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<model-name>([^<]*)</model-name>").unwrap());

/// HTTP client for the device's External Control Protocol. Every request
/// carries the configured timeout, so a stalled device can never hang a
/// caller indefinitely.
pub struct EcpClient {
    base_url: String,
    timeout: Duration,
}

impl EcpClient {
    pub fn new(address: &str, timeout: Duration) -> EcpClient {
        return EcpClient::with_base_url(format!("http://{address}:{ECP_PORT}"), timeout);
    }

    pub fn with_base_url(base_url: String, timeout: Duration) -> EcpClient {
        return EcpClient { base_url, timeout };
    }
}

#[async_trait]
impl DeviceClient for EcpClient {
    async fn keypress(&self, endpoint: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let res = reqwest::Client::new()
            .post(&url)
            .timeout(self.timeout)
            .body("")
            .send()
            .await?;

        let status = res.status().as_u16();
        if status >= 400 {
            bail!("device rejected {endpoint} with status {status}");
        }

        Ok(())
    }

    async fn device_info(&self) -> Result<DeviceInfo> {
        let url = format!("{}/query/device-info", self.base_url);
        let res = reqwest::Client::new()
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "device is not reachable");
            bail!("device is not reachable");
        }

        let response = res.unwrap();
        let status = response.status().as_u16();
        if status >= 400 {
            bail!("device-info query failed with status {status}");
        }

        let body = response.text().await?;
        let model_name = MODEL_NAME
            .captures(&body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        match model_name {
            Some(model_name) => Ok(DeviceInfo { model_name }),
            None => bail!("device-info response had no model-name element"),
        }
    }
}
