//! Runtime configuration: quantizer parameters, clamp radius, per-gesture
//! target coordinates and enable masks, plus the fixed-layout persisted
//! image they serialize to.
//!
//! The engine only ever reads the config. Mutation happens through plain
//! field access from an editing collaborator (typically a debug console),
//! and persistence is explicit via [`crate::store`] - there is no
//! autosave.

use crate::gesture::GESTURE_TABLE;
use crate::types::{GestureId, GESTURE_COUNT};

/// Byte appended to a persisted image. Anything else on load means the
/// flash area is uninitialized or corrupt.
pub const IMAGE_MARKER: u8 = 0xAA;

/// Size of the persisted image:
/// 4 enable/mode bytes, threshold, hysteresis, 2 clamp radii,
/// 24 target coordinate pairs, trailing marker.
pub const IMAGE_LEN: usize = 8 + GESTURE_COUNT * 2 + 1;

/// What the output stage does while the button is held without a
/// recognized gesture.
///
/// Only [`Clamp`](OutputMode::Clamp) has an engine code path; the other
/// modes are carried in the persisted image for forward compatibility
/// but do not alter arbitration.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputMode {
    Off = 0,
    #[default]
    Clamp = 1,
    Quantize = 2,
}

impl OutputMode {
    const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Clamp),
            2 => Some(Self::Quantize),
            _ => None,
        }
    }
}

/// Per-category gesture enable bits and the output mode.
///
/// Bit `id % 8` of the matching category byte enables the gesture with
/// that id (see [`GestureId::mask_bit`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnableMask {
    pub cardinal: u8,
    pub diagonal: u8,
    pub special: u8,
    pub mode: OutputMode,
}

impl EnableMask {
    /// Whether the given gesture's category bit is set.
    #[must_use]
    pub const fn is_enabled(&self, id: GestureId) -> bool {
        let byte = match id.category() {
            crate::types::Category::Cardinal => self.cardinal,
            crate::types::Category::Diagonal => self.diagonal,
            crate::types::Category::Special => self.special,
        };
        byte & id.mask_bit() != 0
    }
}

/// Threshold and hysteresis for the angle quantizer, see
/// [`crate::quantizer`].
///
/// The largest usable threshold is 128 minus half the hysteresis; larger
/// values leave no reachable low/high band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuantizerParams {
    pub threshold: u8,
    pub hysteresis: u8,
}

/// The complete runtime configuration.
///
/// Created once at boot via [`crate::store::load_config`] (or
/// [`Config::default`] when nothing valid is persisted) and owned by the
/// [`Engine`](crate::engine::Engine) for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub enable: EnableMask,
    pub quantizer: QuantizerParams,
    /// Per-axis deadband radius around center used in clamp tracking.
    pub clamp_radius: (u8, u8),
    /// Override coordinate driven for each gesture, indexed by
    /// [`GestureId::index`].
    pub gesture_targets: [(u8, u8); GESTURE_COUNT],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable: EnableMask {
                cardinal: 0xFF,
                diagonal: 0xFF,
                special: 0x1F,
                mode: OutputMode::Clamp,
            },
            quantizer: QuantizerParams {
                threshold: 42,
                hysteresis: 14,
            },
            clamp_radius: (41, 41),
            gesture_targets: core::array::from_fn(|i| GESTURE_TABLE[i].default_target),
        }
    }
}

impl Config {
    /// Target coordinate for a gesture.
    #[inline]
    #[must_use]
    pub const fn target(&self, id: GestureId) -> (u8, u8) {
        self.gesture_targets[id.index()]
    }

    /// Serialize into the fixed persisted layout.
    #[must_use]
    pub fn to_image(&self) -> crate::store::ConfigImage {
        let mut image = crate::store::ConfigImage::new();
        // Capacity is IMAGE_LEN rounded up to the flash reservation, so
        // none of these pushes can fail.
        let _ = image.extend_from_slice(&[
            self.enable.cardinal,
            self.enable.diagonal,
            self.enable.special,
            self.enable.mode as u8,
            self.quantizer.threshold,
            self.quantizer.hysteresis,
            self.clamp_radius.0,
            self.clamp_radius.1,
        ]);
        for &(x, y) in &self.gesture_targets {
            let _ = image.push(x);
            let _ = image.push(y);
        }
        let _ = image.push(IMAGE_MARKER);
        image
    }

    /// Deserialize a persisted image.
    ///
    /// Returns `None` when the image has the wrong length, a marker
    /// mismatch, or an out-of-range mode byte; the caller falls back to
    /// compiled defaults in that case.
    #[must_use]
    pub fn from_image(image: &[u8]) -> Option<Self> {
        if image.len() != IMAGE_LEN || image[IMAGE_LEN - 1] != IMAGE_MARKER {
            return None;
        }
        let mode = OutputMode::from_u8(image[3])?;
        let mut gesture_targets = [(0, 0); GESTURE_COUNT];
        for (i, target) in gesture_targets.iter_mut().enumerate() {
            *target = (image[8 + i * 2], image[9 + i * 2]);
        }
        Some(Self {
            enable: EnableMask {
                cardinal: image[0],
                diagonal: image[1],
                special: image[2],
                mode,
            },
            quantizer: QuantizerParams {
                threshold: image[4],
                hysteresis: image[5],
            },
            clamp_radius: (image[6], image[7]),
            gesture_targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.enable.cardinal, 0xFF);
        assert_eq!(config.enable.diagonal, 0xFF);
        assert_eq!(config.enable.special, 0x1F);
        assert_eq!(config.enable.mode, OutputMode::Clamp);
        assert_eq!(config.quantizer.threshold, 42);
        assert_eq!(config.quantizer.hysteresis, 14);
        assert_eq!(config.clamp_radius, (41, 41));
        assert_eq!(config.target(GestureId::NNe), (200, 231));
        assert_eq!(config.target(GestureId::SwS), (106, 3));
        assert_eq!(config.target(GestureId::SSwW), (0, 0));
    }

    #[test]
    fn test_image_round_trip() {
        let mut config = Config::default();
        config.enable.special = 0xC3;
        config.enable.mode = OutputMode::Off;
        config.quantizer.threshold = 37;
        config.quantizer.hysteresis = 30;
        config.clamp_radius = (10, 60);
        config.gesture_targets[GestureId::NeE.index()] = (255, 1);

        let image = config.to_image();
        assert_eq!(image.len(), IMAGE_LEN);
        assert_eq!(Config::from_image(&image), Some(config));
    }

    #[test]
    fn test_image_layout_is_stable() {
        let image = Config::default().to_image();
        assert_eq!(&image[..8], &[0xFF, 0xFF, 0x1F, 1, 42, 14, 41, 41]);
        // First target pair follows the header, marker closes the image.
        assert_eq!(&image[8..10], &[200, 231]);
        assert_eq!(image[IMAGE_LEN - 1], IMAGE_MARKER);
    }

    #[test]
    fn test_zeroed_image_is_rejected() {
        assert_eq!(Config::from_image(&[0; IMAGE_LEN]), None);
    }

    #[test]
    fn test_marker_mismatch_is_rejected() {
        let mut image = Config::default().to_image();
        image[IMAGE_LEN - 1] ^= 0xFF;
        assert_eq!(Config::from_image(&image), None);
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        let mut image = Config::default().to_image();
        image[3] = 3;
        assert_eq!(Config::from_image(&image), None);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let image = Config::default().to_image();
        assert_eq!(Config::from_image(&image[..IMAGE_LEN - 1]), None);
        assert_eq!(Config::from_image(&[]), None);
    }
}
