use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::KeyPress;

/// Funnels crossterm input and worker feedback into one ordered stream of
/// domain events for the dispatch loop.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Resize(cols, rows) => {
                return Some(Event::UIResize(cols, rows));
            }
            CrosstermEvent::Key(keyevent) => {
                // Kitty-protocol terminals also report releases and repeats.
                if keyevent.kind != KeyEventKind::Press {
                    return None;
                }

                if keyevent.modifiers.contains(KeyModifiers::CONTROL) {
                    if let KeyCode::Char('c') = keyevent.code {
                        return Some(Event::Keyboard(KeyPress::CtrlC));
                    }
                    return None;
                }

                let key = match keyevent.code {
                    KeyCode::Char(c) => KeyPress::Char(c),
                    KeyCode::Enter => KeyPress::Enter,
                    KeyCode::Esc => KeyPress::Esc,
                    KeyCode::Backspace => KeyPress::Backspace,
                    KeyCode::Delete => KeyPress::Delete,
                    KeyCode::Up => KeyPress::Up,
                    KeyCode::Down => KeyPress::Down,
                    KeyCode::Left => KeyPress::Left,
                    KeyCode::Right => KeyPress::Right,
                    _ => return None,
                };

                return Some(Event::Keyboard(key));
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
