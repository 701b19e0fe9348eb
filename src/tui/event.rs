use crossterm::event::{Event as TermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;

/// Input the dashboard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(KeyEvent),
    /// Bracketed paste, delivered as one string (file paths, comment text).
    Paste(String),
    /// Drives the flash timeout, the spinner and the analysis stages.
    Tick,
}

/// Keep key presses and pastes. Releases and repeats (sent on Windows),
/// mouse, focus and resize events are dropped; every loop iteration redraws anyway.
fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Paste(text) => Some(Event::Paste(text)),
        _ => None,
    }
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(forward_events(tx, tick_rate));
        EventHandler { rx }
    }

    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }
}

/// Merge terminal input and ticks into one channel until the receiver goes away.
async fn forward_events(tx: mpsc::UnboundedSender<Event>, tick_rate: Duration) {
    let mut reader = EventStream::new();
    let mut ticks = tokio::time::interval(tick_rate);
    let mut input_open = true;

    loop {
        let event = tokio::select! {
            maybe_event = reader.next(), if input_open => match maybe_event {
                Some(Ok(term_event)) => translate(term_event),
                Some(Err(_)) => None,
                None => {
                    // stdin closed; ticks keep the analysis running
                    input_open = false;
                    None
                }
            },
            _ = ticks.tick() => Some(Event::Tick),
        };

        if let Some(event) = event {
            if tx.send(event).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_translate_keeps_presses_only() {
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(translate(TermEvent::Key(press)), Some(Event::Key(press)));

        let release =
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(TermEvent::Key(release)), None);
    }

    #[test]
    fn test_translate_paste_and_noise() {
        assert_eq!(
            translate(TermEvent::Paste("data.csv".to_string())),
            Some(Event::Paste("data.csv".to_string()))
        );
        assert_eq!(translate(TermEvent::FocusGained), None);
        assert_eq!(translate(TermEvent::Resize(80, 24)), None);
    }
}
