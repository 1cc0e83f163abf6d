#[cfg(test)]
#[path = "binding_test.rs"]
mod tests;

use super::RemoteCommand;
use super::Trigger;

/// A fixed (row, col) cell on the rendered remote face. Slots belong to the
/// logical command, not the trigger, so remapping a key never moves its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub row: u16,
    pub col: u16,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub command: RemoteCommand,
    pub trigger: Trigger,
    pub label: &'static str,
    pub slot: Option<Slot>,
}

/// The immutable trigger table, built once at startup and passed by reference
/// into the dispatcher and renderer.
pub struct BindingTable {
    bindings: Vec<Binding>,
    warnings: Vec<String>,
}

impl BindingTable {
    pub fn defaults() -> BindingTable {
        return BindingTable::with_overrides(&[]);
    }

    /// Merges `[keymap]` overrides onto the default table. A name present in
    /// the overrides replaces the default trigger for that name only;
    /// extended commands gain a new slot-less binding. Duplicate triggers are
    /// kept, with the later binding winning and a warning recorded for each
    /// collision.
    pub fn with_overrides(overrides: &[(RemoteCommand, Trigger)]) -> BindingTable {
        let mut bindings = default_bindings();

        for (command, trigger) in overrides {
            match bindings.iter_mut().find(|b| b.command == *command) {
                Some(binding) => binding.trigger = *trigger,
                None => bindings.push(Binding {
                    command: *command,
                    trigger: *trigger,
                    label: command.label(),
                    slot: None,
                }),
            }
        }

        let warnings = merge_warnings(&bindings);

        return BindingTable { bindings, warnings };
    }

    /// The later binding wins on duplicate triggers, consistent with user
    /// overrides taking precedence over defaults.
    pub fn resolve(&self, trigger: Trigger) -> Option<&Binding> {
        return self.bindings.iter().rev().find(|b| b.trigger == trigger);
    }

    pub fn bindings(&self) -> &[Binding] {
        return &self.bindings;
    }

    pub fn warnings(&self) -> &[String] {
        return &self.warnings;
    }
}

fn merge_warnings(bindings: &[Binding]) -> Vec<String> {
    let mut warnings = vec![];

    for (i, first) in bindings.iter().enumerate() {
        for second in bindings.iter().skip(i + 1) {
            if first.trigger == second.trigger {
                warnings.push(format!(
                    "trigger '{}' is bound to both {} and {}; {} wins",
                    first.trigger, first.command, second.command, second.command
                ));
            }
        }
    }

    for binding in bindings {
        if let Trigger::Char(c) = binding.trigger {
            let shadowed = match c {
                '/' => Some("search"),
                '?' => Some("help"),
                'q' => Some("quit"),
                _ => None,
            };
            if let Some(name) = shadowed {
                warnings.push(format!(
                    "trigger '{c}' for {} shadows the built-in {name} key",
                    binding.command
                ));
            }
        }
    }

    return warnings;
}

// Layout coordinates of the remote face. Row 20 below is the status line and
// row 22 the search echo line, so everything here stays above row 19.
fn default_bindings() -> Vec<Binding> {
    let defaults = [
        (RemoteCommand::Back, Trigger::Char('b'), Some(Slot { row: 1, col: 1 })),
        (RemoteCommand::Home, Trigger::Char('h'), Some(Slot { row: 1, col: 10 })),
        (RemoteCommand::Up, Trigger::Up, Some(Slot { row: 4, col: 7 })),
        (RemoteCommand::Left, Trigger::Left, Some(Slot { row: 7, col: 1 })),
        (RemoteCommand::Select, Trigger::Enter, Some(Slot { row: 7, col: 6 })),
        (RemoteCommand::Right, Trigger::Right, Some(Slot { row: 7, col: 13 })),
        (RemoteCommand::Down, Trigger::Down, Some(Slot { row: 10, col: 7 })),
        (RemoteCommand::InstantReplay, Trigger::Char('r'), Some(Slot { row: 13, col: 1 })),
        (RemoteCommand::Info, Trigger::Char('*'), Some(Slot { row: 13, col: 10 })),
        (RemoteCommand::Rewind, Trigger::Char('<'), Some(Slot { row: 16, col: 1 })),
        (RemoteCommand::Play, Trigger::Char('p'), Some(Slot { row: 16, col: 7 })),
        (RemoteCommand::FastForward, Trigger::Char('>'), Some(Slot { row: 16, col: 12 })),
    ];

    return defaults
        .into_iter()
        .map(|(command, trigger, slot)| Binding {
            command,
            trigger,
            label: command.label(),
            slot,
        })
        .collect();
}
