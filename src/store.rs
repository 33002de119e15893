//! State store with change notification.
//!
//! A [`Store`] owns the current state of one [`Reducer`] and a list of
//! subscribers. Every dispatch reduces the state and then calls each
//! subscriber, in registration order, with no store lock held.
//!
//! Dispatches issued while notification is in progress (from a subscriber or
//! another thread) are queued and drained by the dispatch already running, so
//! each intent produces exactly one notification round.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crate::ui::mvi::Reducer;

/// Callback invoked after every dispatch. Re-reads state through [`Store::get`].
pub type Subscriber = Arc<dyn Fn() + Send + Sync>;

type Registry = Mutex<Vec<(u64, Subscriber)>>;

struct DispatchQueue<I> {
    pending: VecDeque<I>,
    draining: bool,
}

struct StoreInner<R: Reducer> {
    state: RwLock<R::State>,
    queue: Mutex<DispatchQueue<R::Intent>>,
    subscribers: Arc<Registry>,
    next_id: AtomicU64,
    _reducer: PhantomData<fn() -> R>,
}

/// Cheaply clonable handle to a shared store.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `R::State::default()`.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store seeded with `state`.
    pub fn with_state(state: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                queue: Mutex::new(DispatchQueue {
                    pending: VecDeque::new(),
                    draining: false,
                }),
                subscribers: Arc::new(Mutex::new(Vec::new())),
                next_id: AtomicU64::new(0),
                _reducer: PhantomData,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> R::State {
        self.inner.state.read().clone()
    }

    /// Reduce `intent` into the state and notify every subscriber.
    ///
    /// Subscribers are notified even when the new state equals the old one.
    /// If another dispatch is already notifying, `intent` is queued and this
    /// call returns before it is applied.
    pub fn dispatch(&self, intent: R::Intent) {
        {
            let mut queue = self.inner.queue.lock();
            queue.pending.push_back(intent);
            if queue.draining {
                tracing::trace!(queued = queue.pending.len(), "dispatch queued");
                return;
            }
            queue.draining = true;
        }

        // A panicking reducer or subscriber must not leave the store stuck in
        // draining mode; intents still queued are applied by the next dispatch.
        let _reset = scopeguard::guard_on_unwind(&self.inner.queue, |queue| {
            queue.lock().draining = false;
        });

        loop {
            // The draining flag is cleared under the queue lock so a concurrent
            // dispatch either sees it set and enqueues, or takes over draining.
            let intent = {
                let mut queue = self.inner.queue.lock();
                match queue.pending.pop_front() {
                    Some(intent) => intent,
                    None => {
                        queue.draining = false;
                        return;
                    }
                }
            };

            {
                let mut state = self.inner.state.write();
                let current = std::mem::take(&mut *state);
                *state = R::reduce(current, intent);
            }

            self.notify();
        }
    }

    /// Register `callback`; it runs after every dispatch until unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .push((id, Arc::new(callback) as Subscriber));
        tracing::debug!(id, "subscriber registered");
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    fn notify(&self) {
        // Snapshot so callbacks may subscribe or unsubscribe while running.
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber();
        }
    }
}

/// Capability to remove one subscriber.
///
/// Dropping a `Subscription` leaves the subscriber registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    /// Remove the subscriber. Returns false if it was already removed or the
    /// store is gone.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut subscribers = registry.lock();
        let before = subscribers.len();
        subscribers.retain(|(id, _)| *id != self.id);
        let removed = subscribers.len() != before;
        if removed {
            tracing::debug!(id = self.id, "subscriber removed");
        }
        removed
    }
}
