use crate::timer::TimerHandle;
use crate::ui::controls::{Control, CounterControls};
use crate::ui::counter::Count;
use crate::ui::layout::body_rect;
use crate::ui::view::{control_at, CounterProps};
use ratatui::layout::Rect;

/// View-side state of the running UI.
///
/// The count itself lives in the store; `App` only tracks focus, the body
/// region used for mouse hit-testing, and delayed increments still pending.
pub struct App {
    should_quit: bool,
    focus: Control,
    controls: CounterControls,
    /// Delayed increments not yet fired. Cancelled when the app is dropped.
    pending: Vec<TimerHandle>,
    body: Rect,
}

impl App {
    pub fn new(controls: CounterControls) -> Self {
        Self {
            should_quit: false,
            focus: Control::Increment,
            controls,
            pending: Vec::new(),
            body: Rect::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Run the handler behind `control`. `count` is the currently rendered count.
    pub fn press(&mut self, control: Control, count: Count) {
        self.focus = control;
        match control {
            Control::Increment => self.controls.increment(),
            Control::Decrement => self.controls.decrement(),
            Control::IncrementIfOdd => {
                if !self.controls.increment_if_odd(count) {
                    tracing::debug!(%count, "increment-if-odd skipped on even count");
                }
            }
            Control::IncrementAsync => {
                let handle = self.controls.increment_async();
                tracing::debug!(
                    delay_ms = self.controls.async_delay().as_millis() as u64,
                    "delayed increment scheduled"
                );
                self.pending.push(handle);
            }
        }
    }

    pub fn press_focused(&mut self, count: Count) {
        self.press(self.focus, count);
    }

    /// Press the button under a mouse click. Returns false on a miss.
    pub fn on_click(&mut self, column: u16, row: u16, count: Count) -> bool {
        let Some(control) = control_at(self.body, column, row) else {
            return false;
        };
        self.press(control, count);
        true
    }

    pub fn on_tick(&mut self) {
        self.pending.retain(|handle| !handle.is_finished());
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body = body_rect(Rect::new(0, 0, cols, rows));
    }

    pub fn body(&self) -> Rect {
        self.body
    }

    pub fn pending_async(&self) -> usize {
        self.pending.len()
    }

    pub fn props(&self, count: Count) -> CounterProps {
        CounterProps {
            count,
            focus: self.focus,
            pending_async: self.pending_async(),
        }
    }

    /// Cancel every delayed increment that has not fired yet.
    pub fn cancel_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            tracing::info!(count = pending.len(), "cancelling delayed increments");
        }
        for handle in pending {
            handle.cancel();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
