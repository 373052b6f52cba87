//! Single-slot handoff from interrupt context to the main loop.
//!
//! Each interrupt source (ADC conversion complete, button edge) produces
//! at most one pending value; the foreground loop polls, takes the value
//! and thereby clears the pending flag in one critical section. Newer
//! values overwrite older ones - for joystick samples and button edges
//! only the latest matters, so a queue would add nothing but RAM usage.

use core::cell::Cell;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// A "latest value + dirty flag" slot with exactly one producer (the
/// interrupt handler) and one consumer (the foreground loop).
///
/// ```
/// use embassy_sync::blocking_mutex::raw::NoopRawMutex;
/// use stickmod::latch::Latch;
///
/// let samples: Latch<NoopRawMutex, (u8, u8)> = Latch::new();
/// samples.publish((128, 128)); // interrupt side
/// assert_eq!(samples.take(), Some((128, 128))); // foreground side
/// assert_eq!(samples.take(), None); // taking clears the flag
/// ```
pub struct Latch<M: RawMutex, T> {
    slot: Mutex<M, Cell<Option<T>>>,
}

impl<M: RawMutex, T> Latch<M, T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
        }
    }

    /// Store a value, replacing any value not yet consumed.
    pub fn publish(&self, value: T) {
        self.slot.lock(|cell| cell.set(Some(value)));
    }

    /// Take the pending value, if any, clearing the slot.
    #[must_use]
    pub fn take(&self) -> Option<T> {
        self.slot.lock(Cell::take)
    }
}

impl<M: RawMutex, T> Default for Latch<M, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    type TestLatch<T> = Latch<NoopRawMutex, T>;

    #[test]
    fn test_starts_empty() {
        let latch: TestLatch<u8> = Latch::new();
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_take_clears_pending() {
        let latch: TestLatch<(u8, u8)> = Latch::new();
        latch.publish((1, 2));
        assert_eq!(latch.take(), Some((1, 2)));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_newer_value_wins() {
        let latch: TestLatch<bool> = Latch::new();
        latch.publish(true);
        latch.publish(false);
        assert_eq!(latch.take(), Some(false));
        assert_eq!(latch.take(), None);
    }
}
