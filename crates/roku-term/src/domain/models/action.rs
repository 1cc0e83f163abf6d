use super::RemoteCommand;

/// Work handed to the actions worker over the channel. Everything here ends
/// in an HTTP request against the device.
#[derive(Debug, Clone)]
pub enum Action {
    Press(RemoteCommand),
    Literal(char),
    Backspace,
}
