use super::RemoteCommand;

/// Result of dispatching one keyboard event. The loop applies the effect to
/// the app state; nothing else mutates mode or the press highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Press(RemoteCommand),
    EnterSearch,
    Literal(char),
    EraseLast,
    ExitSearch,
    ShowHelp,
    DismissHelp,
    Quit,
    Ignore,
}
