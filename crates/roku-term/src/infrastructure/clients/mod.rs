pub mod ecp;

use std::time::Duration;

use crate::domain::models::DeviceClientBox;

pub struct DeviceClientManager {}

impl DeviceClientManager {
    pub fn get(address: &str, timeout: Duration) -> DeviceClientBox {
        return Box::new(ecp::EcpClient::new(address, timeout));
    }
}
