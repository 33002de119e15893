//! Line-oriented render target.
//!
//! Renders the counter once, then once more after every store notification,
//! writing one `clicked: N times` line each time.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

use crate::store::Store;
use crate::ui::counter::{CounterIntent, CounterReducer};
use crate::ui::view::render_text;

struct LineRenderer<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> LineRenderer<W> {
    fn render(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            self.error = Some(err);
        }
    }
}

/// Dispatch `intents` to `store` in order, rendering after each one.
///
/// Returns the writer once every intent has been applied. The first write
/// error stops further output and is returned.
pub fn run_headless<W>(
    store: &Store<CounterReducer>,
    intents: impl IntoIterator<Item = CounterIntent>,
    out: W,
) -> io::Result<W>
where
    W: Write + Send + 'static,
{
    let renderer = Arc::new(Mutex::new(LineRenderer { out, error: None }));
    renderer.lock().render(&render_text(store.get()));

    let subscription = {
        let renderer = Arc::clone(&renderer);
        let store_view = store.clone();
        store.subscribe(move || renderer.lock().render(&render_text(store_view.get())))
    };

    for intent in intents {
        tracing::debug!(tag = intent.tag(), "headless dispatch");
        store.dispatch(intent);
    }
    subscription.unsubscribe();

    let renderer = Arc::try_unwrap(renderer)
        .map_err(|_| io::Error::other("headless renderer still subscribed"))?
        .into_inner();
    if let Some(err) = renderer.error {
        return Err(err);
    }
    let mut out = renderer.out;
    out.flush()?;
    Ok(out)
}
