use std::io;
use std::io::Stdout;

use anyhow::bail;
use anyhow::Result;
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Binding;
use crate::domain::models::Event;
use crate::domain::models::InputMode;
use crate::domain::services::dispatch;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;

/// Smallest terminal the fixed remote face fits into. There is no adaptive
/// layout; anything smaller is an error.
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 23;

const STATUS_ROW: u16 = 20;
const WARNING_ROW: u16 = 21;
const SEARCH_ROW: u16 = 22;
// Column of the first echoed character, right after the '/' sigil.
const SEARCH_MIN_COL: u16 = 2;

/// Restores the terminal from raw mode. Called from the panic hook, where
/// the usual teardown path is unreachable.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    props: AppStateProps,
    action_tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_loop(&mut terminal, props, action_tx, event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    execute!(io::stdout(), cursor::Show)?;

    return result;
}

async fn start_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    props: AppStateProps,
    action_tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let size = terminal.size()?;
    ensure_display_size(size.width, size.height)?;

    let mut app_state = AppState::new(props);
    let mut events = EventsService::new(event_rx);

    loop {
        terminal.draw(|frame| render(frame, &app_state))?;

        match events.next().await? {
            Event::Keyboard(key) => {
                let effect = dispatch(app_state.mode, key, &app_state.bindings);
                if app_state.apply_effect(effect, &action_tx)? {
                    break;
                }
            }
            Event::PressSettled(command) => app_state.settle(command),
            Event::UIResize(width, height) => ensure_display_size(width, height)?,
            Event::UITick => {}
        }
    }

    return Ok(());
}

fn ensure_display_size(width: u16, height: u16) -> Result<()> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        bail!(
            "display is too small for the remote; need at least {MIN_WIDTH}x{MIN_HEIGHT} characters"
        );
    }

    return Ok(());
}

fn render(frame: &mut Frame, app_state: &AppState) {
    if app_state.mode == InputMode::HelpDisplay {
        render_help(frame, app_state);
        return;
    }

    for binding in app_state.bindings.bindings() {
        render_key(frame, binding, app_state.pressed == Some(binding.command));
    }

    frame.render_widget(
        Paragraph::new("~*~ roku-term ~*~"),
        Rect::new(1, STATUS_ROW, 18, 1),
    );

    render_warnings(frame, app_state);

    if app_state.mode == InputMode::SearchEntry {
        render_search_line(frame, app_state);
    }
}

fn render_key(frame: &mut Frame, binding: &Binding, pressed: bool) {
    // Config-only commands have no slot on the remote face and are skipped.
    let Some(slot) = binding.slot else {
        return;
    };

    // Label padded by one cell inside a one-cell border, as on the original
    // remote face.
    let width = binding.label.len() as u16 + 4;
    let area = Rect::new(slot.col, slot.row, width, 3);

    let mut style = Style::default();
    if pressed {
        style = style.add_modifier(Modifier::REVERSED);
    }

    frame.render_widget(
        Paragraph::new(binding.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_warnings(frame: &mut Frame, app_state: &AppState) {
    let warnings = app_state.bindings.warnings();
    if warnings.is_empty() {
        return;
    }

    let mut text = warnings[0].clone();
    if warnings.len() > 1 {
        text = format!("{} (+{} more)", text, warnings.len() - 1);
    }

    let width = frame.area().width.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().add_modifier(Modifier::DIM)),
        Rect::new(1, WARNING_ROW, width, 1),
    );
}

fn render_search_line(frame: &mut Frame, app_state: &AppState) {
    let width = frame.area().width.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(format!("/{}", app_state.search_entry)),
        Rect::new(1, SEARCH_ROW, width, 1),
    );

    let entry_len = app_state.search_entry.chars().count() as u16;
    let cursor_col = (SEARCH_MIN_COL + entry_len).min(frame.area().width.saturating_sub(1));
    frame.set_cursor_position((cursor_col, SEARCH_ROW));
}

fn render_help(frame: &mut Frame, app_state: &AppState) {
    let mut lines = vec![Line::from("~*~ roku-term ~*~"), Line::from("")];

    for binding in app_state.bindings.bindings() {
        lines.push(Line::from(format!(
            "'{}' -> {}",
            binding.trigger, binding.command
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("'/' -> typing mode (ENTER or ESC to leave)"));
    lines.push(Line::from("'?' -> show this help screen"));
    lines.push(Line::from("'q' -> quit"));
    lines.push(Line::from(""));
    lines.push(Line::from("Press any key to return to the remote"));

    frame.render_widget(Paragraph::new(lines), frame.area());
}
