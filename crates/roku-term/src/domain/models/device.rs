use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// POSTs one keypress endpoint with an empty body.
    async fn keypress(&self, endpoint: &str) -> Result<()>;

    /// Queries `query/device-info`, used to validate an address during setup
    /// and to greet in the REPL.
    async fn device_info(&self) -> Result<DeviceInfo>;
}

pub type DeviceClientBox = Box<dyn DeviceClient>;

#[derive(Debug, Clone, Default)]
pub struct DeviceInfo {
    pub model_name: String,
}
