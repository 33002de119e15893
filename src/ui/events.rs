use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// The store dispatched; the view must be redrawn from the new state.
    StateChanged,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
    /// The input thread stopped after a terminal error; no more input will arrive.
    InputClosed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    let _ = event_tx.send(AppEvent::Shutdown);
                    break;
                }

                // Use short poll timeout to check shutdown flag frequently
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        if !forward_input(&event_tx, event::read()) {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        input_failed(&event_tx, "terminal poll failed", &err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Forward one terminal read. Returns false when the input thread must stop.
fn forward_input(tx: &mpsc::Sender<AppEvent>, read: io::Result<Event>) -> bool {
    let event = match read {
        Ok(Event::Key(key)) => AppEvent::Key(key),
        Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
        Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
        Ok(_) => return true,
        Err(err) => return input_failed(tx, "terminal read failed", &err),
    };
    tx.send(event).is_ok()
}

/// Tell the event loop input is gone, so it quits instead of idling.
fn input_failed(tx: &mpsc::Sender<AppEvent>, context: &str, err: &io::Error) -> bool {
    tracing::error!(error = %err, "{context}");
    let _ = tx.send(AppEvent::InputClosed);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_reports_input_closed_and_stops() {
        let (tx, rx) = mpsc::channel();
        let keep_going = forward_input(&tx, Err(io::Error::other("tty gone")));
        assert!(!keep_going);
        assert!(matches!(rx.try_recv(), Ok(AppEvent::InputClosed)));
    }

    #[test]
    fn resize_is_forwarded() {
        let (tx, rx) = mpsc::channel();
        assert!(forward_input(&tx, Ok(Event::Resize(100, 40))));
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Resize(100, 40))));
    }

    #[test]
    fn unhandled_events_are_skipped() {
        let (tx, rx) = mpsc::channel();
        assert!(forward_input(&tx, Ok(Event::FocusGained)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_channel_stops_forwarding() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        assert!(!forward_input(&tx, Ok(Event::Resize(1, 1))));
    }
}
