//! Angle quantizer: maps raw `(x, y)` samples onto a 3x3 direction grid
//! with hysteresis gaps around the band boundaries.
//!
//! Each axis is classified independently into a low/mid/high band. The
//! `threshold` parameter controls how far the stick must deflect from
//! center (128) before it leaves the mid band; `hysteresis` opens a gap
//! around each boundary in which no classification is made, so a stick
//! resting near a boundary cannot chatter between two directions.
//!
//! ```text
//!              threshold
//!               |<-->|
//!         | |       | |
//!     NW  | |   N   | |  NE
//!   ______|_|_______|_|______
//!   ______|_|_______|_|______ < hysteresis
//!         | |       | |
//!     W   | | Neut. | |  E
//!   ______|_|_______|_|______
//!   ______|_|_______|_|______
//!         | |       | |
//!     SW  | |   S   | |  SE
//! ```
//!
//! With the reference parameters `threshold = 42, hysteresis = 30` the
//! bands are low `0..=70`, gap `71..=101`, mid `102..=154`, gap
//! `155..=185`, high `186..=255`.

use crate::config::QuantizerParams;
use crate::types::Direction;

/// Axis midpoint of the 8-bit sample range.
pub const CENTER: u8 = 128;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Band {
    Low,
    Mid,
    High,
}

/// Direction for each (x band, y band) cell. Low y is north: the ADC
/// counts down as the stick moves up.
const DIRECTION_GRID: [[Direction; 3]; 3] = [
    [Direction::NorthWest, Direction::West, Direction::SouthWest],
    [Direction::North, Direction::Neutral, Direction::South],
    [Direction::NorthEast, Direction::East, Direction::SouthEast],
];

fn classify_axis(params: &QuantizerParams, value: u8) -> Option<Band> {
    let t = params.threshold as i16;
    let h = (params.hysteresis / 2) as i16;
    let v = value as i16;
    let center = CENTER as i16;

    if v < center - t - h {
        Some(Band::Low)
    } else if v > center + t + h {
        Some(Band::High)
    } else if v > center - t + h && v < center + t - h {
        Some(Band::Mid)
    } else {
        // Inside one of the two hysteresis gaps.
        None
    }
}

/// Quantize a raw sample into a [`Direction`].
///
/// Returns `None` when either axis falls inside a hysteresis gap; the
/// caller keeps its previous classification in that case, which is what
/// suppresses chatter at the boundaries. The quantizer itself is
/// stateless.
#[must_use]
pub fn classify(params: &QuantizerParams, x: u8, y: u8) -> Option<Direction> {
    let bx = classify_axis(params, x)? as usize;
    let by = classify_axis(params, y)? as usize;
    Some(DIRECTION_GRID[bx][by])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> QuantizerParams {
        QuantizerParams {
            threshold: 42,
            hysteresis: 30,
        }
    }

    #[test]
    fn test_neutral_boundaries_x() {
        // Neutral band extends from 102-154 inclusive; 71-101 and
        // 155-185 are hysteresis gaps.
        assert_eq!(classify(&params(), 101, 128), None);
        assert_eq!(classify(&params(), 102, 128), Some(Direction::Neutral));
        assert_eq!(classify(&params(), 154, 128), Some(Direction::Neutral));
        assert_eq!(classify(&params(), 155, 128), None);
    }

    #[test]
    fn test_neutral_boundaries_y() {
        assert_eq!(classify(&params(), 128, 101), None);
        assert_eq!(classify(&params(), 128, 102), Some(Direction::Neutral));
        assert_eq!(classify(&params(), 128, 154), Some(Direction::Neutral));
        assert_eq!(classify(&params(), 128, 155), None);
    }

    #[test]
    fn test_west_boundaries() {
        assert_eq!(classify(&params(), 35, 101), None);
        assert_eq!(classify(&params(), 35, 102), Some(Direction::West));
        assert_eq!(classify(&params(), 35, 154), Some(Direction::West));
        assert_eq!(classify(&params(), 35, 155), None);

        assert_eq!(classify(&params(), 0, 128), Some(Direction::West));
        assert_eq!(classify(&params(), 70, 128), Some(Direction::West));
        assert_eq!(classify(&params(), 71, 128), None);
    }

    #[test]
    fn test_east_boundaries() {
        assert_eq!(classify(&params(), 220, 101), None);
        assert_eq!(classify(&params(), 220, 102), Some(Direction::East));
        assert_eq!(classify(&params(), 220, 154), Some(Direction::East));
        assert_eq!(classify(&params(), 220, 155), None);

        assert_eq!(classify(&params(), 255, 128), Some(Direction::East));
        assert_eq!(classify(&params(), 186, 128), Some(Direction::East));
        assert_eq!(classify(&params(), 185, 128), None);
    }

    #[test]
    fn test_north_boundaries() {
        // Low y is up.
        assert_eq!(classify(&params(), 101, 35), None);
        assert_eq!(classify(&params(), 102, 35), Some(Direction::North));
        assert_eq!(classify(&params(), 154, 35), Some(Direction::North));
        assert_eq!(classify(&params(), 155, 35), None);

        assert_eq!(classify(&params(), 128, 0), Some(Direction::North));
        assert_eq!(classify(&params(), 128, 70), Some(Direction::North));
        assert_eq!(classify(&params(), 128, 71), None);
    }

    #[test]
    fn test_south_boundaries() {
        assert_eq!(classify(&params(), 101, 220), None);
        assert_eq!(classify(&params(), 102, 220), Some(Direction::South));
        assert_eq!(classify(&params(), 154, 220), Some(Direction::South));
        assert_eq!(classify(&params(), 155, 220), None);

        assert_eq!(classify(&params(), 128, 255), Some(Direction::South));
        assert_eq!(classify(&params(), 128, 186), Some(Direction::South));
        assert_eq!(classify(&params(), 128, 185), None);
    }

    #[test]
    fn test_corners() {
        assert_eq!(classify(&params(), 0, 0), Some(Direction::NorthWest));
        assert_eq!(classify(&params(), 255, 0), Some(Direction::NorthEast));
        assert_eq!(classify(&params(), 0, 255), Some(Direction::SouthWest));
        assert_eq!(classify(&params(), 255, 255), Some(Direction::SouthEast));
    }

    #[test]
    fn test_one_ambiguous_axis_rejects_whole_sample() {
        // y is clearly high but x sits in a gap: no classification.
        assert_eq!(classify(&params(), 71, 255), None);
        assert_eq!(classify(&params(), 255, 160), None);
    }

    #[test]
    fn test_wide_threshold_saturates() {
        // threshold + hysteresis/2 past the sample range must not wrap.
        let p = QuantizerParams {
            threshold: 120,
            hysteresis: 30,
        };
        assert_eq!(classify(&p, 128, 128), Some(Direction::Neutral));
        assert_eq!(classify(&p, 0, 128), None);
        assert_eq!(classify(&p, 255, 128), None);
    }
}
