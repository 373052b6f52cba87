//! Core types: quantized stick directions and gesture identifiers.

/// One of nine discretized joystick positions: the eight compass points
/// plus the centered (neutral) position.
///
/// Produced by the quantizer from a raw `(x, y)` sample and consumed by
/// the gesture history and matcher. `Neutral` doubles as the wildcard
/// slot in gesture patterns (see [`crate::gesture`]).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Neutral,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Gesture category, ordered from least to most specific.
///
/// Cardinal and Diagonal gestures are two-direction sequences; Special
/// gestures are three-direction sequences and take priority when both
/// would match the same history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    Cardinal,
    Diagonal,
    Special,
}

/// Number of recognized gestures (8 per category).
pub const GESTURE_COUNT: usize = 24;

/// Identifies one entry of the static gesture table.
///
/// Variants are named after the direction sequence the user performs,
/// oldest first: `NNe` is "North, then NorthEast". The discriminant is
/// the gesture's index into [`crate::config::Config::gesture_targets`]
/// and into the persisted image; ids 0-7 are Cardinal, 8-15 Diagonal,
/// 16-23 Special.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GestureId {
    // Cardinal: start on a cardinal direction, roll to the adjacent diagonal
    NNe = 0,
    ENe,
    ESe,
    SSe,
    NNw,
    WNw,
    WSw,
    SSw,
    // Diagonal: start on a diagonal, roll to the adjacent cardinal
    NeN = 8,
    NeE,
    SeE,
    SeS,
    NwN,
    NwW,
    SwW,
    SwS,
    // Special: three-direction sweeps
    ENeN = 16,
    ESeS,
    WNwN,
    WSwS,
    NNeE,
    SSeE,
    NNwW,
    SSwW,
}

impl GestureId {
    /// Index into per-gesture arrays (targets, persisted image slots).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The category this gesture belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match (self as u8) >> 3 {
            0 => Category::Cardinal,
            1 => Category::Diagonal,
            _ => Category::Special,
        }
    }

    /// Bit position of this gesture within its category's enable byte.
    #[inline]
    #[must_use]
    pub const fn mask_bit(self) -> u8 {
        1 << ((self as u8) & 0x07)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_follow_id_blocks() {
        assert_eq!(GestureId::NNe.category(), Category::Cardinal);
        assert_eq!(GestureId::SSw.category(), Category::Cardinal);
        assert_eq!(GestureId::NeN.category(), Category::Diagonal);
        assert_eq!(GestureId::SwS.category(), Category::Diagonal);
        assert_eq!(GestureId::ENeN.category(), Category::Special);
        assert_eq!(GestureId::SSwW.category(), Category::Special);
    }

    #[test]
    fn test_mask_bit_wraps_per_category() {
        assert_eq!(GestureId::NNe.mask_bit(), 0x01);
        assert_eq!(GestureId::SSw.mask_bit(), 0x80);
        assert_eq!(GestureId::NeN.mask_bit(), 0x01);
        assert_eq!(GestureId::ENeN.mask_bit(), 0x01);
        assert_eq!(GestureId::SSwW.mask_bit(), 0x80);
    }

    #[test]
    fn test_default_direction_is_neutral() {
        assert_eq!(Direction::default(), Direction::Neutral);
    }
}
