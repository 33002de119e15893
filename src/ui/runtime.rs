use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::store::Store;
use crate::timer::DelayScheduler;
use crate::ui::app::App;
use crate::ui::controls::CounterControls;
use crate::ui::counter::CounterReducer;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Handle;

/// Run the counter UI until the user quits or shutdown is signalled.
///
/// Draws once up front, then again after every input event and every store
/// notification.
pub fn run(
    config: &Config,
    store: Store<CounterReducer>,
    runtime: Handle,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = config.ui.tick_rate();
    let scheduler = DelayScheduler::new(runtime, config.counter.async_delay());
    let mut app = App::new(CounterControls::connect(&store, scheduler));
    let events = EventHandler::new(tick_rate, shutdown);

    let notifier = events.sender();
    let subscription = store.subscribe(move || {
        let _ = notifier.send(AppEvent::StateChanged);
    });

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(count = %store.get(), "counter UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app, store.get()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, store.get()),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, store.get()),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::StateChanged) => {}
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Ok(AppEvent::InputClosed) => {
                tracing::warn!("terminal input closed, quitting");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    subscription.unsubscribe();
    drop(app);
    drop(guard);
    tracing::info!(count = %store.get(), "counter UI stopped");
    Ok(())
}
