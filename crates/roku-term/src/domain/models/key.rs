use super::Trigger;

/// One keyboard event as seen by the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    CtrlC,
}

impl KeyPress {
    /// The trigger this key would match in the binding table, if any. Esc,
    /// Backspace, Delete, and Ctrl-C are loop keys and never triggers.
    pub fn as_trigger(&self) -> Option<Trigger> {
        match self {
            KeyPress::Char(c) => Some(Trigger::Char(*c)),
            KeyPress::Enter => Some(Trigger::Enter),
            KeyPress::Up => Some(Trigger::Up),
            KeyPress::Down => Some(Trigger::Down),
            KeyPress::Left => Some(Trigger::Left),
            KeyPress::Right => Some(Trigger::Right),
            _ => None,
        }
    }
}
