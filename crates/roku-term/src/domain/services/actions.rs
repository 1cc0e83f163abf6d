#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Action;
use crate::domain::models::DeviceClientBox;
use crate::domain::models::Event;

/// Pause after a press so the device isn't flooded and the highlighted box
/// stays visible for a beat.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Endpoint for one literal on-screen-keyboard character. Percent-encoded,
/// so a space travels as `Lit_%20`.
pub fn literal_endpoint(c: char) -> String {
    return format!("keypress/Lit_{}", urlencoding::encode(&c.to_string()));
}

pub struct ActionsService {}

impl ActionsService {
    /// Worker loop performing the device HTTP calls off the UI loop. Actions
    /// are handled one at a time, so presses are never issued concurrently.
    /// Failed requests are logged and dropped; the press still settles so the
    /// highlight clears.
    pub async fn start(
        device_client: DeviceClientBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            if let Some(action) = rx.recv().await {
                match action {
                    Action::Press(command) => {
                        let endpoint = command.endpoint();
                        match device_client.keypress(endpoint).await {
                            Ok(()) => time::sleep(SETTLE_DELAY).await,
                            Err(err) => {
                                tracing::warn!(error = ?err, endpoint = endpoint, "keypress dropped");
                            }
                        }
                        event_tx.send(Event::PressSettled(command))?;
                    }
                    Action::Literal(c) => {
                        let endpoint = literal_endpoint(c);
                        if let Err(err) = device_client.keypress(&endpoint).await {
                            tracing::warn!(error = ?err, endpoint = %endpoint, "literal keypress dropped");
                        }
                    }
                    Action::Backspace => {
                        if let Err(err) = device_client.keypress("keypress/Backspace").await {
                            tracing::warn!(error = ?err, "backspace keypress dropped");
                        }
                    }
                }
            }
        }
    }
}
