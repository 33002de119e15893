mod common;

use clicker::store::Store;
use clicker::timer::DelayScheduler;
use clicker::ui::app::App;
use clicker::ui::controls::{Control, CounterControls};
use clicker::ui::counter::{Count, CounterReducer};
use common::{new_log, record, store_at};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(2000);

fn connect(store: &Store<CounterReducer>) -> CounterControls {
    CounterControls::connect(store, DelayScheduler::current(DELAY))
}

#[tokio::test]
async fn increment_and_decrement_dispatch_unconditionally() {
    let store = store_at(0);
    let controls = connect(&store);
    controls.increment();
    controls.increment();
    controls.decrement();
    assert_eq!(store.get(), Count::new(1));
}

#[tokio::test]
async fn increment_if_odd_fires_on_odd_count() {
    let store = store_at(3);
    let controls = connect(&store);
    assert!(controls.increment_if_odd(store.get()));
    assert_eq!(store.get(), Count::new(4));
}

#[tokio::test]
async fn increment_if_odd_skips_even_count_without_dispatch() {
    let store = store_at(4);
    let log = new_log();
    let _subscription = record(&store, &log, "view");
    let controls = connect(&store);

    assert!(!controls.increment_if_odd(store.get()));

    assert_eq!(store.get(), Count::new(4));
    assert!(log.lock().is_empty());
}

#[tokio::test]
async fn increment_if_odd_handles_negative_counts() {
    let store = store_at(-3);
    let controls = connect(&store);
    assert!(controls.increment_if_odd(store.get()));
    assert_eq!(store.get(), Count::new(-2));
    assert!(!controls.increment_if_odd(store.get()));
    assert_eq!(store.get(), Count::new(-2));
}

#[tokio::test]
async fn controls_only_use_injected_callbacks() {
    let increments = Arc::new(AtomicUsize::new(0));
    let decrements = Arc::new(AtomicUsize::new(0));
    let controls = {
        let increments = Arc::clone(&increments);
        let decrements = Arc::clone(&decrements);
        CounterControls::new(
            Arc::new(move || {
                increments.fetch_add(1, Ordering::SeqCst);
            }),
            Arc::new(move || {
                decrements.fetch_add(1, Ordering::SeqCst);
            }),
            DelayScheduler::current(DELAY),
        )
    };

    controls.increment();
    controls.decrement();
    controls.increment_if_odd(Count::new(1));
    controls.increment_if_odd(Count::new(2));

    assert_eq!(increments.load(Ordering::SeqCst), 2);
    assert_eq!(decrements.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn increment_async_lands_after_delay() {
    let store = store_at(0);
    let controls = connect(&store);

    let handle = controls.increment_async();
    assert_eq!(store.get(), Count::new(0));

    tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
    assert_eq!(store.get(), Count::new(0));
    assert!(!handle.is_finished());

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(store.get(), Count::new(1));
}

#[tokio::test(start_paused = true)]
async fn repeated_async_presses_are_not_debounced() {
    let store = store_at(0);
    let log = new_log();
    let _subscription = record(&store, &log, "view");
    let controls = connect(&store);

    let _first = controls.increment_async();
    tokio::time::sleep(Duration::from_millis(500)).await;
    let _second = controls.increment_async();
    let _third = controls.increment_async();

    tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
    tokio::task::yield_now().await;

    assert_eq!(store.get(), Count::new(3));
    assert_eq!(log.lock().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_fires() {
    let store = store_at(0);
    let controls = connect(&store);

    let handle = controls.increment_async();
    handle.cancel();
    handle.cancel();

    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(store.get(), Count::new(0));
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn cancel_after_firing_is_a_noop() {
    let store = store_at(0);
    let controls = connect(&store);

    let handle = controls.increment_async();
    tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    handle.cancel();

    assert_eq!(store.get(), Count::new(1));
}

#[tokio::test(start_paused = true)]
async fn dropping_app_cancels_pending_increments() {
    let store = store_at(5);
    let mut app = App::new(connect(&store));

    app.press(Control::IncrementAsync, store.get());
    app.press(Control::IncrementAsync, store.get());
    assert_eq!(app.pending_async(), 2);
    drop(app);

    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(store.get(), Count::new(5));
}

#[tokio::test(start_paused = true)]
async fn app_prunes_fired_timers_on_tick() {
    let store = store_at(0);
    let mut app = App::new(connect(&store));

    app.press(Control::IncrementAsync, store.get());
    tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    app.on_tick();

    assert_eq!(app.pending_async(), 0);
    assert_eq!(store.get(), Count::new(1));
}
