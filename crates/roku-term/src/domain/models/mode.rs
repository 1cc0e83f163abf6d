/// Input mode of the dispatch loop. Transitions are linear and non-nested;
/// Normal is both the initial and the resting state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    SearchEntry,
    HelpDisplay,
}
