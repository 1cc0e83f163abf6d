use super::*;
use crate::domain::models::RemoteCommand;
use crate::domain::models::Trigger;

#[test]
fn test_bound_trigger_dispatches_press() {
    let table = BindingTable::defaults();

    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Char('h'), &table),
        Effect::Press(RemoteCommand::Home)
    );
    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Up, &table),
        Effect::Press(RemoteCommand::Up)
    );
    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Enter, &table),
        Effect::Press(RemoteCommand::Select)
    );
}

#[test]
fn test_reserved_keys_in_normal_mode() {
    let table = BindingTable::defaults();

    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Char('/'), &table),
        Effect::EnterSearch
    );
    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Char('?'), &table),
        Effect::ShowHelp
    );
    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Char('q'), &table),
        Effect::Quit
    );
}

#[test]
fn test_unbound_key_is_ignored() {
    let table = BindingTable::defaults();

    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Char('z'), &table),
        Effect::Ignore
    );
    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Esc, &table),
        Effect::Ignore
    );
}

#[test]
fn test_override_shadows_reserved_key() {
    let table = BindingTable::with_overrides(&[(RemoteCommand::Home, Trigger::Char('q'))]);

    assert_eq!(
        dispatch(InputMode::Normal, KeyPress::Char('q'), &table),
        Effect::Press(RemoteCommand::Home)
    );
}

#[test]
fn test_search_mode_forwards_printables() {
    let table = BindingTable::defaults();

    assert_eq!(
        dispatch(InputMode::SearchEntry, KeyPress::Char('A'), &table),
        Effect::Literal('A')
    );
    assert_eq!(
        dispatch(InputMode::SearchEntry, KeyPress::Char(' '), &table),
        Effect::Literal(' ')
    );
    // Bound triggers mean nothing while typing.
    assert_eq!(
        dispatch(InputMode::SearchEntry, KeyPress::Char('h'), &table),
        Effect::Literal('h')
    );
}

#[test]
fn test_search_mode_exit_and_erase() {
    let table = BindingTable::defaults();

    assert_eq!(
        dispatch(InputMode::SearchEntry, KeyPress::Enter, &table),
        Effect::ExitSearch
    );
    assert_eq!(
        dispatch(InputMode::SearchEntry, KeyPress::Esc, &table),
        Effect::ExitSearch
    );
    assert_eq!(
        dispatch(InputMode::SearchEntry, KeyPress::Backspace, &table),
        Effect::EraseLast
    );
    assert_eq!(
        dispatch(InputMode::SearchEntry, KeyPress::Delete, &table),
        Effect::EraseLast
    );
    assert_eq!(
        dispatch(InputMode::SearchEntry, KeyPress::Up, &table),
        Effect::Ignore
    );
}

#[test]
fn test_help_mode_dismisses_on_any_key() {
    let table = BindingTable::defaults();

    assert_eq!(
        dispatch(InputMode::HelpDisplay, KeyPress::Char('x'), &table),
        Effect::DismissHelp
    );
    assert_eq!(
        dispatch(InputMode::HelpDisplay, KeyPress::Enter, &table),
        Effect::DismissHelp
    );
}

#[test]
fn test_ctrl_c_quits_in_every_mode() {
    let table = BindingTable::defaults();

    for mode in [
        InputMode::Normal,
        InputMode::SearchEntry,
        InputMode::HelpDisplay,
    ] {
        assert_eq!(dispatch(mode, KeyPress::CtrlC, &table), Effect::Quit);
    }
}
