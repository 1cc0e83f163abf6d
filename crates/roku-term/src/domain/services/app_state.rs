#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::BindingTable;
use crate::domain::models::Effect;
use crate::domain::models::InputMode;
use crate::domain::models::RemoteCommand;

pub struct AppStateProps {
    pub bindings: BindingTable,
}

/// Everything the renderer needs, owned by the dispatch loop. The binding
/// table is immutable once here; the rest changes only through
/// `apply_effect` and `settle`.
pub struct AppState {
    pub bindings: BindingTable,
    pub mode: InputMode,
    pub pressed: Option<RemoteCommand>,
    pub search_entry: String,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            bindings: props.bindings,
            mode: InputMode::default(),
            pressed: None,
            search_entry: String::new(),
        };
    }

    /// Applies one dispatch effect, forwarding device work to the actions
    /// worker. Returns true when the loop should exit.
    pub fn apply_effect(
        &mut self,
        effect: Effect,
        action_tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match effect {
            Effect::Press(command) => {
                self.pressed = Some(command);
                action_tx.send(Action::Press(command))?;
            }
            Effect::EnterSearch => {
                self.mode = InputMode::SearchEntry;
                self.search_entry.clear();
            }
            Effect::Literal(c) => {
                self.search_entry.push(c);
                action_tx.send(Action::Literal(c))?;
            }
            Effect::EraseLast => {
                // At the start of the entry this is a no-op: nothing echoed,
                // nothing sent.
                if self.search_entry.pop().is_some() {
                    action_tx.send(Action::Backspace)?;
                }
            }
            Effect::ExitSearch => {
                self.mode = InputMode::Normal;
                self.search_entry.clear();
            }
            Effect::ShowHelp => {
                self.mode = InputMode::HelpDisplay;
            }
            Effect::DismissHelp => {
                self.mode = InputMode::Normal;
            }
            Effect::Quit => return Ok(true),
            Effect::Ignore => {}
        }

        return Ok(false);
    }

    /// Clears the press highlight once the worker reports the settle delay
    /// has elapsed. A later press of a different key keeps its own highlight.
    pub fn settle(&mut self, command: RemoteCommand) {
        if self.pressed == Some(command) {
            self.pressed = None;
        }
    }
}
