//! Rolling log of the most recent distinct stick directions.

use crate::types::Direction;

/// Number of history slots; gestures are at most three directions long.
pub const HISTORY_LEN: usize = 3;

/// Fixed three-slot log of the most recent *distinct* directions.
///
/// Slot 0 is the most recent. Pushing the direction already in slot 0 is
/// a no-op, so the history is a debounced log of direction changes, not
/// a raw sample trace. All slots start out [`Direction::Neutral`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureHistory {
    slots: [Direction; HISTORY_LEN],
}

impl GestureHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [Direction::Neutral; HISTORY_LEN],
        }
    }

    /// Record a direction change, discarding the oldest slot.
    ///
    /// Does nothing if `direction` equals the most recent slot.
    pub fn push(&mut self, direction: Direction) {
        if self.slots[0] == direction {
            return;
        }
        self.slots[2] = self.slots[1];
        self.slots[1] = self.slots[0];
        self.slots[0] = direction;
    }

    /// Current contents, most recent first.
    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> [Direction; HISTORY_LEN] {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction::*;

    #[test]
    fn test_starts_neutral() {
        let history = GestureHistory::new();
        assert_eq!(history.snapshot(), [Neutral, Neutral, Neutral]);
    }

    #[test]
    fn test_push_rotates_oldest_out() {
        let mut history = GestureHistory::new();
        history.push(North);
        history.push(NorthEast);
        history.push(East);
        assert_eq!(history.snapshot(), [East, NorthEast, North]);
        history.push(SouthEast);
        assert_eq!(history.snapshot(), [SouthEast, East, NorthEast]);
    }

    #[test]
    fn test_repeated_push_is_debounced() {
        let mut history = GestureHistory::new();
        history.push(North);
        history.push(North);
        history.push(North);
        assert_eq!(history.snapshot(), [North, Neutral, Neutral]);
    }

    #[test]
    fn test_alternating_directions_all_recorded() {
        let mut history = GestureHistory::new();
        history.push(North);
        history.push(Neutral);
        history.push(North);
        assert_eq!(history.snapshot(), [North, Neutral, North]);
    }
}
