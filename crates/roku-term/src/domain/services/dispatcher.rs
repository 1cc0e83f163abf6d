#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;

use crate::domain::models::BindingTable;
use crate::domain::models::Effect;
use crate::domain::models::InputMode;
use crate::domain::models::KeyPress;

/// Resolves one keyboard event against the binding table for the current
/// mode. Pure; the loop applies the returned effect.
pub fn dispatch(mode: InputMode, key: KeyPress, table: &BindingTable) -> Effect {
    if key == KeyPress::CtrlC {
        return Effect::Quit;
    }

    match mode {
        InputMode::Normal => dispatch_normal(key, table),
        InputMode::SearchEntry => dispatch_search(key),
        InputMode::HelpDisplay => Effect::DismissHelp,
    }
}

// Table lookup comes before the reserved keys, so a `[keymap]` override may
// shadow them. The merge step has already warned about that.
fn dispatch_normal(key: KeyPress, table: &BindingTable) -> Effect {
    if let Some(trigger) = key.as_trigger() {
        if let Some(binding) = table.resolve(trigger) {
            return Effect::Press(binding.command);
        }
    }

    match key {
        KeyPress::Char('/') => Effect::EnterSearch,
        KeyPress::Char('?') => Effect::ShowHelp,
        KeyPress::Char('q') => Effect::Quit,
        _ => Effect::Ignore,
    }
}

fn dispatch_search(key: KeyPress) -> Effect {
    match key {
        KeyPress::Enter | KeyPress::Esc => Effect::ExitSearch,
        KeyPress::Backspace | KeyPress::Delete => Effect::EraseLast,
        KeyPress::Char(c) if !c.is_control() => Effect::Literal(c),
        _ => Effect::Ignore,
    }
}
