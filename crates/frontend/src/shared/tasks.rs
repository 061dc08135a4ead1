//! Cancellable local tasks.
//!
//! Every future spawned through a [`TaskScope`] is wrapped in
//! `futures::future::Abortable`. Cancelling the scope aborts the pending
//! futures; dropping them drops any `TimeoutFuture` they hold, which clears the
//! underlying browser timer.

use futures::future::{AbortHandle, Abortable};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct TaskScope {
    handles: Rc<RefCell<HashMap<u64, AbortHandle>>>,
    next_id: Rc<Cell<u64>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `task` with the scope and return the abortable future.
    ///
    /// The registration is removed when the task finishes. An aborted task
    /// never resumes.
    pub fn wrap<F>(&self, task: F) -> impl Future<Output = ()> + 'static
    where
        F: Future<Output = ()> + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let (handle, registration) = AbortHandle::new_pair();
        self.handles.borrow_mut().insert(id, handle);

        let handles = self.handles.clone();
        let abortable = Abortable::new(task, registration);
        async move {
            let _ = abortable.await;
            handles.borrow_mut().remove(&id);
        }
    }

    /// Spawn on the browser event loop.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(self.wrap(task));
    }

    pub fn pending(&self) -> usize {
        self.handles.borrow().len()
    }

    /// Abort every pending task of the scope.
    pub fn cancel_all(&self) {
        let handles: Vec<AbortHandle> = self.handles.borrow_mut().drain().map(|(_, h)| h).collect();
        if !handles.is_empty() {
            log::debug!("cancelling {} pending task(s)", handles.len());
        }
        for handle in handles {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    #[test]
    fn test_finished_tasks_are_unregistered() {
        let scope = TaskScope::new();
        let mut pool = LocalPool::new();
        pool.spawner().spawn_local(scope.wrap(async {})).unwrap();
        assert_eq!(scope.pending(), 1);
        pool.run_until_stalled();
        assert_eq!(scope.pending(), 0);
    }

    #[test]
    fn test_cancel_all_stops_pending_tasks() {
        let scope = TaskScope::new();
        let mut pool = LocalPool::new();
        let ran = Rc::new(Cell::new(false));
        let (tx, rx) = oneshot::channel::<()>();

        let flag = ran.clone();
        pool.spawner()
            .spawn_local(scope.wrap(async move {
                let _ = rx.await;
                flag.set(true);
            }))
            .unwrap();
        pool.run_until_stalled();

        scope.cancel_all();
        let _ = tx.send(());
        pool.run_until_stalled();

        assert!(!ran.get());
        assert_eq!(scope.pending(), 0);
    }
}
