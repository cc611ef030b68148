use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Sleep on the platform timer: tokio natively, `setTimeout` in the browser.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

#[derive(Debug, Default)]
struct DebounceState {
    generation: Cell<u64>,
    torn_down: Cell<bool>,
}

/// Proof that a call was made at a given generation of its [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
}

/// Coalesces bursts of calls so that only the last one in a `delay` window
/// settles.
///
/// Each call to [`arm`](Self::arm) supersedes every earlier ticket. Clones share
/// state, so a clone moved into a spawned task observes later calls.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    state: Rc<DebounceState>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Rc::new(DebounceState::default()),
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a new wait, superseding any pending one.
    pub fn arm(&self) -> DebounceTicket {
        let generation = self.state.generation.get() + 1;
        self.state.generation.set(generation);
        DebounceTicket { generation }
    }

    /// True while `ticket` is the latest call and the debouncer is alive.
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        !self.state.torn_down.get() && self.state.generation.get() == ticket.generation
    }

    /// Wait out the delay, then report whether `ticket` survived.
    pub async fn settle(&self, ticket: DebounceTicket) -> bool {
        sleep(self.delay).await;
        let current = self.is_current(ticket);
        if !current {
            tracing::trace!(generation = ticket.generation, "Debounced call coalesced");
        }
        current
    }

    /// Drop any pending wait without disabling future calls.
    pub fn cancel(&self) {
        self.arm();
    }

    /// Permanently stop: pending and future waits never settle.
    pub fn teardown(&self) {
        self.state.torn_down.set(true);
        self.arm();
    }

    pub fn is_torn_down(&self) -> bool {
        self.state.torn_down.get()
    }
}

/// A [`Debouncer`] bound to a callback.
///
/// `emit` arms the debouncer immediately and returns a future that fires the
/// callback with the value only if no newer `emit` happened within the delay.
/// The caller spawns that future on whatever executor drives the UI.
pub struct DebouncedEmitter<T> {
    debouncer: Debouncer,
    callback: Rc<dyn Fn(T)>,
    skip_next: Rc<Cell<bool>>,
}

impl<T> Clone for DebouncedEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            debouncer: self.debouncer.clone(),
            callback: self.callback.clone(),
            skip_next: self.skip_next.clone(),
        }
    }
}

impl<T: 'static> DebouncedEmitter<T> {
    pub fn new(delay: Duration, callback: impl Fn(T) + 'static) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            callback: Rc::new(callback),
            skip_next: Rc::new(Cell::new(false)),
        }
    }

    /// Swallow the first emission. Used by widgets whose mount-time
    /// initialization must not look like a user action.
    pub fn skip_initial(self) -> Self {
        self.skip_next.set(true);
        self
    }

    /// Schedule `value`. The returned future resolves to true if the callback ran.
    pub fn emit(&self, value: T) -> impl Future<Output = bool> + 'static {
        let ticket = if self.skip_next.replace(false) {
            None
        } else {
            Some(self.debouncer.arm())
        };
        let debouncer = self.debouncer.clone();
        let callback = self.callback.clone();

        async move {
            let Some(ticket) = ticket else {
                return false;
            };
            if debouncer.settle(ticket).await {
                callback(value);
                true
            } else {
                false
            }
        }
    }

    /// Cancel pending emissions and refuse new ones.
    pub fn teardown(&self) {
        self.debouncer.teardown();
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}
