//! Data-readiness gate.
//!
//! Route resolution that depends on the team dataset waits here. The wait
//! races the loader's readiness notification against a bounded poll and
//! proceeds in degraded mode once `max_wait_ms` has elapsed.

use crate::shared::tasks::TaskScope;
use contracts::domain::team::TeamsByLeague;
use futures::channel::oneshot;
use futures::future::{select, Either, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const DEFAULT_MAX_WAIT_MS: u32 = 10_000;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 300;

// ============================================================================
// Readiness flag
// ============================================================================

/// Process-wide flag owned by the data loader. Monotonic: once ready it
/// stays ready.
#[derive(Clone, Default)]
pub struct DataReadiness {
    inner: Rc<ReadinessInner>,
}

#[derive(Default)]
struct ReadinessInner {
    ready: Cell<bool>,
    waiters: RefCell<Vec<oneshot::Sender<()>>>,
}

impl DataReadiness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.ready.get()
    }

    pub fn mark_ready(&self) {
        if self.inner.ready.replace(true) {
            return;
        }
        let waiters: Vec<_> = self.inner.waiters.borrow_mut().drain(..).collect();
        log::debug!("data ready, waking {} waiter(s)", waiters.len());
        for waiter in waiters {
            let _ = waiter.send(());
        }
    }

    /// Ready as soon as at least one league has teams. Returns the new state.
    pub fn observe(&self, teams: &TeamsByLeague) -> bool {
        if teams.values().any(|list| !list.is_empty()) {
            self.mark_ready();
        }
        self.is_ready()
    }

    #[cfg(test)]
    fn waiter_count(&self) -> usize {
        self.inner.waiters.borrow().len()
    }

    /// Resolves on the transition to ready (immediately if already ready).
    fn notified(&self) -> LocalBoxFuture<'static, ()> {
        if self.is_ready() {
            return futures::future::ready(()).boxed_local();
        }
        let (tx, rx) = oneshot::channel();
        let mut waiters = self.inner.waiters.borrow_mut();
        // timed-out waits drop their receiver
        waiters.retain(|waiter| !waiter.is_canceled());
        waiters.push(tx);
        drop(waiters);
        rx.map(|_| ()).boxed_local()
    }
}

// ============================================================================
// Sleeping
// ============================================================================

pub trait Sleeper: Clone + 'static {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Browser timers
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooSleeper;

impl Sleeper for GlooSleeper {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(ms).boxed_local()
    }
}

// ============================================================================
// Gate
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessOutcome {
    Ready { checks: u32 },
    TimedOut { checks: u32 },
}

impl ReadinessOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, ReadinessOutcome::Ready { .. })
    }
}

#[derive(Clone)]
pub struct ReadinessGate<S: Sleeper = GlooSleeper> {
    readiness: DataReadiness,
    sleeper: S,
    tasks: TaskScope,
}

impl ReadinessGate<GlooSleeper> {
    pub fn new(readiness: DataReadiness) -> Self {
        Self::with_sleeper(readiness, GlooSleeper)
    }
}

impl<S: Sleeper> ReadinessGate<S> {
    pub fn with_sleeper(readiness: DataReadiness, sleeper: S) -> Self {
        Self {
            readiness,
            sleeper,
            tasks: TaskScope::new(),
        }
    }

    pub fn readiness(&self) -> &DataReadiness {
        &self.readiness
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    pub fn tasks(&self) -> &TaskScope {
        &self.tasks
    }

    /// Wait until the data is ready or `max_wait_ms` has elapsed.
    ///
    /// Checks are separated by `poll_interval_ms` (the readiness notification
    /// cuts a sleep short); at most `ceil(max_wait / poll_interval)` sleeps.
    pub async fn wait(&self, max_wait_ms: u32, poll_interval_ms: u32) -> ReadinessOutcome {
        let poll = poll_interval_ms.max(1);
        let mut elapsed = 0u32;
        let mut checks = 0u32;
        let mut notified = Some(self.readiness.notified());

        loop {
            checks += 1;
            if self.readiness.is_ready() {
                log::info!("data ready after {} check(s)", checks);
                return ReadinessOutcome::Ready { checks };
            }
            if elapsed >= max_wait_ms {
                log::warn!(
                    "timed out waiting for data after {} check(s), proceeding anyway",
                    checks
                );
                return ReadinessOutcome::TimedOut { checks };
            }

            let step = poll.min(max_wait_ms - elapsed);
            let sleep = self.sleeper.sleep(step);
            match notified.take() {
                Some(signal) => match select(signal, sleep).await {
                    Either::Left(((), _)) => {}
                    Either::Right(((), signal)) => {
                        elapsed += step;
                        notified = Some(signal);
                    }
                },
                None => {
                    sleep.await;
                    elapsed += step;
                }
            }
        }
    }

    /// Future that waits and then invokes `callback` exactly once, unless the
    /// gate is cancelled first. Each call polls independently.
    pub fn ready_task<F>(
        &self,
        callback: F,
        max_wait_ms: u32,
        poll_interval_ms: u32,
    ) -> impl std::future::Future<Output = ()> + 'static
    where
        F: FnOnce(ReadinessOutcome) + 'static,
    {
        let gate = self.clone();
        self.tasks.wrap(async move {
            let outcome = gate.wait(max_wait_ms, poll_interval_ms).await;
            callback(outcome);
        })
    }

    /// Spawn [`ReadinessGate::ready_task`] on the browser event loop.
    pub fn await_ready<F>(&self, callback: F, max_wait_ms: u32, poll_interval_ms: u32)
    where
        F: FnOnce(ReadinessOutcome) + 'static,
    {
        wasm_bindgen_futures::spawn_local(self.ready_task(callback, max_wait_ms, poll_interval_ms));
    }

    /// Teardown: pending waits never call back.
    pub fn cancel_all(&self) {
        self.tasks.cancel_all();
    }
}
