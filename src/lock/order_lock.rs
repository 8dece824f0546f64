use std::sync::{Condvar, Mutex};

use super::LockError;

/// FIFO lock serializing the order read-fulfill-persist critical section.
///
/// A plain `Mutex` makes no fairness promise; order submissions are served
/// in arrival order, so this hands out tickets and wakes waiters in ticket
/// order. One lock guards all order writes, which is enough for a
/// single-process deployment.
pub struct OrderLock {
    state: Mutex<TicketState>,
    wake: Condvar,
}

struct TicketState {
    next: u64,
    serving: u64,
}

/// Releases the lock on drop.
pub struct OrderLockGuard<'a> {
    lock: &'a OrderLock,
}

impl OrderLock {
    pub fn new() -> Self {
        OrderLock {
            state: Mutex::new(TicketState { next: 0, serving: 0 }),
            wake: Condvar::new(),
        }
    }

    /// Acquire the lock, blocking behind any earlier acquirers.
    pub fn acquire(&self) -> Result<OrderLockGuard<'_>, LockError> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        let ticket = state.next;
        state.next += 1;
        while state.serving != ticket {
            state = self
                .wake
                .wait(state)
                .map_err(|e| LockError::Poisoned(e.to_string()))?;
        }
        Ok(OrderLockGuard { lock: self })
    }

    /// Try to acquire the lock without blocking.
    /// Returns `Ok(None)` when someone else holds it or is queued ahead.
    pub fn try_acquire(&self) -> Result<Option<OrderLockGuard<'_>>, LockError> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| LockError::Poisoned(e.to_string()))?;
        if state.serving == state.next {
            state.next += 1;
            Ok(Some(OrderLockGuard { lock: self }))
        } else {
            Ok(None)
        }
    }
}

impl Default for OrderLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OrderLockGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.lock.state.lock() {
            state.serving += 1;
            // Every waiter re-checks its own ticket.
            self.lock.wake.notify_all();
        }
    }
}
