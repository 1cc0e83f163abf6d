//! Terminal remote control for Roku devices.
//!
//! Renders the remote face in the terminal, translates keyboard input into
//! ECP keypress commands, and sends them to the device over HTTP. Also ships
//! a line-based REPL mode and an interactive first-run setup.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::destruct_terminal_for_panic;
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Action, Binding, BindingTable, DeviceClient, DeviceClientBox, Effect, Event, InputMode,
    KeyPress, RemoteCommand, Slot, Trigger,
};
pub use domain::services::{AppState, AppStateProps};
