//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use clicker::store::{Store, Subscription};
use clicker::ui::counter::{Count, CounterReducer};
use parking_lot::Mutex;
use std::sync::Arc;

pub type Log = Arc<Mutex<Vec<String>>>;

pub fn store_at(value: i64) -> Store<CounterReducer> {
    Store::with_state(Count::new(value))
}

/// Subscribe a callback that appends `name` to `log` on every notification.
pub fn record(store: &Store<CounterReducer>, log: &Log, name: &str) -> Subscription {
    let log = Arc::clone(log);
    let name = name.to_string();
    store.subscribe(move || log.lock().push(name.clone()))
}

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}
