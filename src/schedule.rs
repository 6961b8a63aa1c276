//! Coalescing of recompute requests.
//!
//! Input such as a slider drag produces updates faster than a slice can be
//! rendered. Requests go into a single-slot cell: a new request overwrites
//! the pending one, and whoever drains the cell checks it again after every
//! recompute. At most one recompute is in flight and only the latest input
//! is ever processed.

use std::io;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

/// Outcome of [`PendingCell::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// The cell was empty.
    Queued,
    /// An older pending request was dropped in favour of this one.
    Replaced,
    /// The cell is closed; the request was ignored.
    Closed,
}

#[derive(Debug)]
struct Slot<T> {
    pending: Option<T>,
    closed: bool,
    replaced: u64,
}

/// Single-slot, latest-wins request cell.
#[derive(Debug)]
pub struct PendingCell<T> {
    slot: Mutex<Slot<T>>,
    ready: Condvar,
}

impl<T> Default for PendingCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PendingCell<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                pending: None,
                closed: false,
                replaced: 0,
            }),
            ready: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        // The slot holds plain data, so a poisoned lock is still usable.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store a request, replacing any pending one.
    pub fn submit(&self, value: T) -> Submitted {
        let mut slot = self.lock();
        if slot.closed {
            return Submitted::Closed;
        }
        let outcome = if slot.pending.replace(value).is_some() {
            slot.replaced += 1;
            Submitted::Replaced
        } else {
            Submitted::Queued
        };
        drop(slot);
        self.ready.notify_one();
        outcome
    }

    /// Take the pending request without waiting.
    pub fn take(&self) -> Option<T> {
        self.lock().pending.take()
    }

    /// Block until a request is pending and take it.
    ///
    /// Returns `None` once the cell is closed and empty. A request submitted
    /// before closing is still handed out.
    pub fn wait(&self) -> Option<T> {
        let mut slot = self.lock();
        loop {
            if let Some(value) = slot.pending.take() {
                return Some(value);
            }
            if slot.closed {
                return None;
            }
            slot = self.ready.wait(slot).unwrap_or_else(|e| e.into_inner());
        }
    }

    /// Refuse further requests and wake any waiter.
    pub fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// How many requests were dropped because a newer one replaced them.
    pub fn replaced(&self) -> u64 {
        self.lock().replaced
    }

    /// Run `recompute` until no request is pending. Returns the number of
    /// recomputes performed.
    pub fn drain<F: FnMut(T)>(&self, mut recompute: F) -> usize {
        let mut runs = 0;
        while let Some(value) = self.take() {
            recompute(value);
            runs += 1;
        }
        runs
    }
}

/// A thread that drains a [`PendingCell`].
#[derive(Debug)]
pub struct Worker<T> {
    cell: Arc<PendingCell<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Worker<T> {
    /// Start a worker running `recompute` for every request it takes.
    pub fn spawn<F>(name: &str, mut recompute: F) -> io::Result<Self>
    where
        F: FnMut(T) + Send + 'static,
    {
        let cell = Arc::new(PendingCell::new());
        let worker_cell = Arc::clone(&cell);
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                while let Some(value) = worker_cell.wait() {
                    recompute(value);
                }
            })?;

        Ok(Self {
            cell,
            handle: Some(handle),
        })
    }

    pub fn submit(&self, value: T) -> Submitted {
        self.cell.submit(value)
    }

    /// The cell this worker drains.
    pub fn cell(&self) -> &Arc<PendingCell<T>> {
        &self.cell
    }

    /// Close the cell, let the last request finish and join the thread.
    pub fn shutdown(mut self) {
        self.stop();
    }
}

impl<T> Worker<T> {
    fn stop(&mut self) {
        self.cell.close();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl<T> Drop for Worker<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
