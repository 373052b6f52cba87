//! Static gesture table and the history matcher.
//!
//! A gesture is a short sequence of stick directions performed right
//! before the override button is pressed. The table is fixed at compile
//! time: 8 two-direction Cardinal gestures (cardinal rolled onto the
//! adjacent diagonal), 8 two-direction Diagonal gestures (the reverse
//! roll), and 8 three-direction Special sweeps.

use crate::config::Config;
use crate::history::HISTORY_LEN;
use crate::types::Direction::*;
use crate::types::{Category, Direction, GestureId, GESTURE_COUNT};

/// One recognized gesture: its pattern, category, and the target
/// coordinate a fresh [`Config`] assigns to it.
///
/// `pattern` is ordered most recent first, mirroring
/// [`GestureHistory::snapshot`](crate::history::GestureHistory::snapshot).
/// A [`Neutral`] slot is a wildcard; the two-direction gestures leave
/// their oldest slot wild.
pub struct GestureDef {
    pub id: GestureId,
    pub pattern: [Direction; HISTORY_LEN],
    pub category: Category,
    pub default_target: (u8, u8),
}

const fn card(id: GestureId, pattern: [Direction; 3], target: (u8, u8)) -> GestureDef {
    GestureDef {
        id,
        pattern,
        category: Category::Cardinal,
        default_target: target,
    }
}

const fn diag(id: GestureId, pattern: [Direction; 3], target: (u8, u8)) -> GestureDef {
    GestureDef {
        id,
        pattern,
        category: Category::Diagonal,
        default_target: target,
    }
}

const fn special(id: GestureId, pattern: [Direction; 3]) -> GestureDef {
    GestureDef {
        id,
        pattern,
        category: Category::Special,
        default_target: (0, 0),
    }
}

/// The full gesture table, in id order: Cardinal, Diagonal, Special.
///
/// The matcher walks this table back to front so that the longer Special
/// patterns are tried before the two-direction gestures whose pattern is
/// a suffix of theirs.
pub static GESTURE_TABLE: [GestureDef; GESTURE_COUNT] = [
    card(GestureId::NNe, [NorthEast, North, Neutral], (200, 231)),
    card(GestureId::ENe, [NorthEast, East, Neutral], (231, 200)),
    card(GestureId::ESe, [SouthEast, East, Neutral], (231, 55)),
    card(GestureId::SSe, [SouthEast, South, Neutral], (200, 24)),
    card(GestureId::NNw, [NorthWest, North, Neutral], (55, 231)),
    card(GestureId::WNw, [NorthWest, West, Neutral], (24, 200)),
    card(GestureId::WSw, [SouthWest, West, Neutral], (24, 55)),
    card(GestureId::SSw, [SouthWest, South, Neutral], (55, 24)),
    diag(GestureId::NeN, [North, NorthEast, Neutral], (149, 252)),
    diag(GestureId::NeE, [East, NorthEast, Neutral], (252, 149)),
    diag(GestureId::SeE, [East, SouthEast, Neutral], (252, 106)),
    diag(GestureId::SeS, [South, SouthEast, Neutral], (149, 3)),
    diag(GestureId::NwN, [North, NorthWest, Neutral], (106, 252)),
    diag(GestureId::NwW, [West, NorthWest, Neutral], (3, 149)),
    diag(GestureId::SwW, [West, SouthWest, Neutral], (3, 106)),
    diag(GestureId::SwS, [South, SouthWest, Neutral], (106, 3)),
    special(GestureId::ENeN, [North, NorthEast, East]),
    special(GestureId::ESeS, [South, SouthEast, East]),
    special(GestureId::WNwN, [North, NorthWest, West]),
    special(GestureId::WSwS, [South, SouthWest, West]),
    special(GestureId::NNeE, [East, NorthEast, North]),
    special(GestureId::SSeE, [East, SouthEast, South]),
    special(GestureId::NNwW, [West, NorthWest, North]),
    special(GestureId::SSwW, [West, SouthWest, South]),
];

/// Find the highest-priority enabled gesture matching `history`.
///
/// Special gestures are tried first, then Diagonal, then Cardinal.
/// Definitions whose category bit is cleared in `config.enable` are
/// skipped even if their pattern matches. Returns `None` when nothing
/// matches. Pure and `O(GESTURE_COUNT)`.
#[must_use]
pub fn find_gesture(history: &[Direction; HISTORY_LEN], config: &Config) -> Option<GestureId> {
    for def in GESTURE_TABLE.iter().rev() {
        if !config.enable.is_enabled(def.id) {
            continue;
        }
        let matches = def
            .pattern
            .iter()
            .zip(history.iter())
            .all(|(&want, &got)| want == Neutral || want == got);
        if matches {
            debug!("gesture matched: id={}", def.id as u8);
            return Some(def.id);
        }
    }
    None
}
