//! Reusable request/loading/result state machine for view components.
//!
//! Every form in the dashboard runs the same round: `Idle -> Pending ->
//! (Fulfilled | Rejected) -> Idle`. `RemoteAction` owns that round for one
//! component: it gates re-submission while a request is in flight, applies
//! the configured fetcher, and ties settlement to the owning component's
//! lifetime so a response arriving after unmount (or after a newer dispatch)
//! is discarded instead of applied.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::net::error::FetchError;

/// Phase of one remote round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// View state for one remote action: current phase plus the most recently
/// fetched value and the most recent error.
///
/// `reject` keeps the retained value so a prior result can stay visible
/// behind a failure toast; callers that want a clean slate per round set
/// `clear_value_on_dispatch` on the action instead.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteState<T> {
    pub phase: Phase,
    pub value: Option<T>,
    pub error: Option<FetchError>,
}

impl<T> Default for RemoteState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            value: None,
            error: None,
        }
    }
}

impl<T> RemoteState<T> {
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Start a round: pending phase, previous error cleared, value cleared
    /// only when requested.
    pub fn begin(&mut self, clear_value: bool) {
        self.phase = Phase::Pending;
        self.error = None;
        if clear_value {
            self.value = None;
        }
    }

    pub fn fulfill(&mut self, value: T) {
        self.phase = Phase::Fulfilled;
        self.value = Some(value);
        self.error = None;
    }

    pub fn reject(&mut self, error: FetchError) {
        self.phase = Phase::Rejected;
        self.error = Some(error);
    }
}

/// Whether a settled result may still be applied: the owning component must
/// be alive and no newer dispatch may have superseded this round.
pub fn should_apply(alive: bool, current_generation: u64, settled_generation: u64) -> bool {
    alive && current_generation == settled_generation
}

type Fetcher<I, T> = Box<dyn Fn(I) -> LocalBoxFuture<'static, Result<T, FetchError>>>;

struct Inner<I, T>
where
    T: Send + Sync + 'static,
{
    state: RwSignal<RemoteState<T>>,
    generation: Cell<u64>,
    alive: Arc<AtomicBool>,
    clear_value_on_dispatch: Cell<bool>,
    fetch: Fetcher<I, T>,
    on_fulfilled: RefCell<Vec<Box<dyn Fn(&T)>>>,
    on_rejected: RefCell<Vec<Box<dyn Fn(&FetchError)>>>,
}

/// One component's handle on its remote round. Cheap to clone; intended to
/// be created in the component body and captured by event handlers.
pub struct RemoteAction<I, T>
where
    I: 'static,
    T: Send + Sync + 'static,
{
    inner: Rc<Inner<I, T>>,
}

impl<I, T> Clone for RemoteAction<I, T>
where
    T: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<I, T> RemoteAction<I, T>
where
    I: 'static,
    T: Send + Sync + 'static,
{
    /// Create an action around a fetcher. Registers a cleanup hook so
    /// settlements after the owner is torn down are discarded.
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn(I) -> Fut + 'static,
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        let alive = Arc::new(AtomicBool::new(true));
        {
            let alive = Arc::clone(&alive);
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }

        Self {
            inner: Rc::new(Inner {
                state: RwSignal::new(RemoteState::default()),
                generation: Cell::new(0),
                alive,
                clear_value_on_dispatch: Cell::new(false),
                fetch: Box::new(move |input| fetch(input).boxed_local()),
                on_fulfilled: RefCell::new(Vec::new()),
                on_rejected: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Clear the retained value at the start of every round (the weather
    /// view wants a blank slate while it re-queries).
    pub fn clear_value_on_dispatch(self) -> Self {
        self.inner.clear_value_on_dispatch.set(true);
        self
    }

    /// Register an observer for fulfilled rounds. Observers run in
    /// registration order, before the state signal is updated.
    pub fn on_fulfilled(&self, observer: impl Fn(&T) + 'static) {
        self.inner.on_fulfilled.borrow_mut().push(Box::new(observer));
    }

    /// Register an observer for rejected rounds.
    pub fn on_rejected(&self, observer: impl Fn(&FetchError) + 'static) {
        self.inner.on_rejected.borrow_mut().push(Box::new(observer));
    }

    /// The state signal, for rendering. `Copy`, so it can move into view
    /// closures freely.
    pub fn state(&self) -> RwSignal<RemoteState<T>> {
        self.inner.state
    }

    /// Reactive pending flag; drives spinner display and submit disabling.
    pub fn pending(&self) -> bool {
        self.inner.state.with(RemoteState::is_pending)
    }

    /// Start a round. Returns `false` without issuing anything when a round
    /// is already in flight (at most one outstanding request per form).
    pub fn dispatch(&self, input: I) -> bool {
        if self.inner.state.with_untracked(RemoteState::is_pending) {
            return false;
        }

        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        self.inner
            .state
            .update(|s| s.begin(self.inner.clear_value_on_dispatch.get()));

        #[cfg(feature = "csr")]
        {
            let fut = (self.inner.fetch)(input);
            let inner = Rc::clone(&self.inner);
            leptos::task::spawn_local(async move {
                let outcome = fut.await;
                settle(&inner, generation, outcome);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
        }

        true
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn settle<I, T>(inner: &Inner<I, T>, settled_generation: u64, outcome: Result<T, FetchError>)
where
    T: Send + Sync + 'static,
{
    if !should_apply(
        inner.alive.load(Ordering::Relaxed),
        inner.generation.get(),
        settled_generation,
    ) {
        leptos::logging::log!("remote action: discarding stale settlement");
        return;
    }

    match outcome {
        Ok(value) => {
            for observer in inner.on_fulfilled.borrow().iter() {
                observer(&value);
            }
            inner.state.update(|s| s.fulfill(value));
        }
        Err(error) => {
            for observer in inner.on_rejected.borrow().iter() {
                observer(&error);
            }
            inner.state.update(|s| s.reject(error));
        }
    }
}
