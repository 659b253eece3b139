//! Single-slot synchronous handoff between one producer and one consumer.
//!
//! The slot holds at most one item. `send` waits for the slot to be empty,
//! writes, and then waits until the consumer has taken the item, so the two
//! threads strictly alternate. `receive` waits for an item, takes it, and
//! wakes the producer. Both sides block on a condition variable; the mutex
//! is only held for the swap and the notify.
//!
//! Dropping either endpoint closes the channel. A blocked peer then wakes up
//! with [`HandoffError::Closed`] instead of waiting forever, including when
//! the other thread unwinds from a panic.

use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandoffError {
    /// The other endpoint is gone.
    Closed,
    /// The other endpoint panicked while holding the slot lock.
    Poisoned,
}

impl fmt::Display for HandoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffError::Closed => write!(f, "channel closed by peer"),
            HandoffError::Poisoned => write!(f, "channel lock poisoned"),
        }
    }
}

impl std::error::Error for HandoffError {}

struct Slot<T> {
    item: Option<T>,
    sender_alive: bool,
    receiver_alive: bool,
}

struct Shared<T> {
    slot: Mutex<Slot<T>>,
    changed: Condvar,
}

impl<T> Shared<T> {
    fn lock(&self) -> Result<MutexGuard<'_, Slot<T>>, HandoffError> {
        self.slot.lock().map_err(|_| HandoffError::Poisoned)
    }

    fn wait<'a>(
        &self,
        guard: MutexGuard<'a, Slot<T>>,
    ) -> Result<MutexGuard<'a, Slot<T>>, HandoffError> {
        self.changed.wait(guard).map_err(|_| HandoffError::Poisoned)
    }
}

/// Producer endpoint. Not cloneable: there is exactly one producer.
pub struct Sender<T> {
    shared: Arc<Shared<T>>,
}

/// Consumer endpoint. Not cloneable: there is exactly one consumer.
pub struct Receiver<T> {
    shared: Arc<Shared<T>>,
}

/// Create a connected producer/consumer pair around an empty slot.
pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(Slot {
            item: None,
            sender_alive: true,
            receiver_alive: true,
        }),
        changed: Condvar::new(),
    });
    (
        Sender {
            shared: Arc::clone(&shared),
        },
        Receiver { shared },
    )
}

impl<T> Sender<T> {
    /// Hand `item` to the consumer and wait until it has been taken.
    ///
    /// Fails with `Closed` if the receiver is dropped before taking it; the
    /// item is discarded in that case.
    pub fn send(&self, item: T) -> Result<(), HandoffError> {
        let mut slot = self.shared.lock()?;

        while slot.item.is_some() && slot.receiver_alive {
            slot = self.shared.wait(slot)?;
        }
        if !slot.receiver_alive {
            slot.item = None;
            return Err(HandoffError::Closed);
        }

        slot.item = Some(item);
        self.shared.changed.notify_all();

        while slot.item.is_some() && slot.receiver_alive {
            slot = self.shared.wait(slot)?;
        }
        if slot.item.take().is_some() {
            return Err(HandoffError::Closed);
        }
        Ok(())
    }
}

impl<T> Receiver<T> {
    /// Wait for the next item and take it, leaving the slot empty.
    ///
    /// An item already in the slot is still delivered after the sender is
    /// dropped; `Closed` is returned only once the slot is empty.
    pub fn receive(&self) -> Result<T, HandoffError> {
        let mut slot = self.shared.lock()?;
        loop {
            if let Some(item) = slot.item.take() {
                self.shared.changed.notify_all();
                return Ok(item);
            }
            if !slot.sender_alive {
                return Err(HandoffError::Closed);
            }
            slot = self.shared.wait(slot)?;
        }
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.shared.slot.lock() {
            slot.sender_alive = false;
        }
        self.shared.changed.notify_all();
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.shared.slot.lock() {
            slot.receiver_alive = false;
        }
        self.shared.changed.notify_all();
    }
}
