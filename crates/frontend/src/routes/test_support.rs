//! Virtual clock for driving timer-based futures in unit tests.

use super::readiness::Sleeper;
use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll, Waker};

#[derive(Default)]
struct ClockState {
    now: Cell<u64>,
    timers: RefCell<Vec<Weak<Timer>>>,
}

struct Timer {
    deadline: u64,
    waker: RefCell<Option<Waker>>,
}

#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<ClockState>,
}

impl ManualClock {
    pub fn now(&self) -> u64 {
        self.state.now.get()
    }

    /// Move time forward and wake every timer that is due.
    pub fn advance(&self, ms: u64) {
        let now = self.now() + ms;
        self.state.now.set(now);

        let due: Vec<Rc<Timer>> = {
            let mut timers = self.state.timers.borrow_mut();
            timers.retain(|t| t.strong_count() > 0);
            timers
                .iter()
                .filter_map(Weak::upgrade)
                .filter(|t| t.deadline <= now)
                .collect()
        };
        for timer in due {
            if let Some(waker) = timer.waker.borrow_mut().take() {
                waker.wake();
            }
        }
    }

    /// Timers whose sleep future is still alive and not yet due.
    pub fn pending_timers(&self) -> usize {
        let now = self.now();
        self.state
            .timers
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|t| t.deadline > now)
            .count()
    }
}

struct Sleep {
    clock: Rc<ClockState>,
    timer: Rc<Timer>,
}

impl Future for Sleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.clock.now.get() >= self.timer.deadline {
            Poll::Ready(())
        } else {
            *self.timer.waker.borrow_mut() = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

impl Sleeper for ManualClock {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let timer = Rc::new(Timer {
            deadline: self.now() + u64::from(ms),
            waker: RefCell::new(None),
        });
        self.state.timers.borrow_mut().push(Rc::downgrade(&timer));
        Sleep {
            clock: self.state.clone(),
            timer,
        }
        .boxed_local()
    }
}
