use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;

/// Every device command the remote can issue. The first twelve make up the
/// rendered remote face; the rest have no default trigger and only become
/// usable through a `[keymap]` binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum RemoteCommand {
    Back,
    Home,
    InstantReplay,
    Info,
    Up,
    Down,
    Left,
    Right,
    Select,
    Rewind,
    FastForward,
    Play,
    VolumeUp,
    VolumeDown,
    VolumeMute,
    PowerOff,
    ChannelUp,
    ChannelDown,
}

impl RemoteCommand {
    pub fn parse(s: &str) -> Option<RemoteCommand> {
        RemoteCommand::iter().find(|e| e.to_string() == s)
    }

    /// Path segment appended to the device's base URL for one keypress.
    pub fn endpoint(&self) -> &'static str {
        match self {
            RemoteCommand::Back => "keypress/back",
            RemoteCommand::Home => "keypress/home",
            RemoteCommand::InstantReplay => "keypress/instantreplay",
            RemoteCommand::Info => "keypress/info",
            RemoteCommand::Up => "keypress/up",
            RemoteCommand::Down => "keypress/down",
            RemoteCommand::Left => "keypress/left",
            RemoteCommand::Right => "keypress/right",
            RemoteCommand::Select => "keypress/select",
            RemoteCommand::Rewind => "keypress/rev",
            RemoteCommand::FastForward => "keypress/fwd",
            RemoteCommand::Play => "keypress/play",
            RemoteCommand::VolumeUp => "keypress/volumeup",
            RemoteCommand::VolumeDown => "keypress/volumedown",
            RemoteCommand::VolumeMute => "keypress/volumemute",
            RemoteCommand::PowerOff => "keypress/poweroff",
            RemoteCommand::ChannelUp => "keypress/channelup",
            RemoteCommand::ChannelDown => "keypress/channeldown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RemoteCommand::Back => "Back",
            RemoteCommand::Home => "Home",
            RemoteCommand::InstantReplay => "Repl",
            RemoteCommand::Info => "Star",
            RemoteCommand::Up => "^",
            RemoteCommand::Down => "v",
            RemoteCommand::Left => "<",
            RemoteCommand::Right => ">",
            RemoteCommand::Select => "OK!",
            RemoteCommand::Rewind => "<<",
            RemoteCommand::FastForward => ">>",
            RemoteCommand::Play => "P",
            RemoteCommand::VolumeUp => "Vol+",
            RemoteCommand::VolumeDown => "Vol-",
            RemoteCommand::VolumeMute => "Mute",
            RemoteCommand::PowerOff => "Power",
            RemoteCommand::ChannelUp => "Ch+",
            RemoteCommand::ChannelDown => "Ch-",
        }
    }
}
