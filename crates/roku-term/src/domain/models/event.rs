use super::KeyPress;
use super::RemoteCommand;

#[derive(Debug)]
pub enum Event {
    Keyboard(KeyPress),
    PressSettled(RemoteCommand),
    UIResize(u16, u16),
    UITick,
}
