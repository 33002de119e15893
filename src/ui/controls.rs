//! Interaction handlers bound to the counter view.

use std::sync::Arc;

use crate::store::Store;
use crate::timer::{DelayScheduler, TimerHandle};
use crate::ui::counter::{Count, CounterIntent, CounterReducer};

pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// The four buttons of the counter view, in display order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Control {
    Increment,
    Decrement,
    IncrementIfOdd,
    IncrementAsync,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Increment,
        Control::Decrement,
        Control::IncrementIfOdd,
        Control::IncrementAsync,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::Increment => "+1",
            Control::Decrement => "-1",
            Control::IncrementIfOdd => "+1 if odd",
            Control::IncrementAsync => "+1 async",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Control::Increment => 0,
            Control::Decrement => 1,
            Control::IncrementIfOdd => 2,
            Control::IncrementAsync => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Handlers built from two injected callbacks.
///
/// Holds no counter state; conditional handlers take the current count.
#[derive(Clone)]
pub struct CounterControls {
    on_increment: Callback,
    on_decrement: Callback,
    scheduler: DelayScheduler,
}

impl CounterControls {
    pub fn new(on_increment: Callback, on_decrement: Callback, scheduler: DelayScheduler) -> Self {
        Self {
            on_increment,
            on_decrement,
            scheduler,
        }
    }

    /// Controls whose callbacks dispatch to `store`.
    pub fn connect(store: &Store<CounterReducer>, scheduler: DelayScheduler) -> Self {
        let increment_store = store.clone();
        let decrement_store = store.clone();
        Self::new(
            Arc::new(move || increment_store.dispatch(CounterIntent::Increment)),
            Arc::new(move || decrement_store.dispatch(CounterIntent::Decrement)),
            scheduler,
        )
    }

    pub fn increment(&self) {
        (self.on_increment)();
    }

    pub fn decrement(&self) {
        (self.on_decrement)();
    }

    /// Increment only when `count` is odd. Returns whether it fired.
    pub fn increment_if_odd(&self, count: Count) -> bool {
        if !count.is_odd() {
            return false;
        }
        self.increment();
        true
    }

    /// Schedule one increment after the scheduler's delay.
    ///
    /// Every call schedules an independent timer.
    pub fn increment_async(&self) -> TimerHandle {
        let on_increment = Arc::clone(&self.on_increment);
        self.scheduler.schedule(move || on_increment())
    }

    pub fn async_delay(&self) -> std::time::Duration {
        self.scheduler.delay()
    }
}
