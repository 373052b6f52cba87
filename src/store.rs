//! Persistence collaborator boundary.
//!
//! The core never touches non-volatile memory itself. A [`ConfigStore`]
//! implementation (flash rows, EEPROM emulation, a file on the host)
//! hands the core an opaque byte blob on load and commits one on save;
//! erase/program sequencing is entirely the store's concern.

use crate::config::Config;

/// Capacity reserved for a persisted image. The image itself is
/// [`IMAGE_LEN`](crate::config::IMAGE_LEN) bytes; the capacity matches a
/// typical two-row flash reservation.
pub const IMAGE_CAPACITY: usize = 64;

/// Opaque persisted byte blob exchanged with the store.
pub type ConfigImage = heapless::Vec<u8, IMAGE_CAPACITY>;

/// Error type for store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// The backing memory failed to commit the write.
    Write,
}

/// Abstraction over the non-volatile memory holding the config image.
pub trait ConfigStore {
    /// Read the persisted image, or `None` if nothing is stored.
    fn load(&mut self) -> Option<ConfigImage>;

    /// Commit an image. Must either persist the whole blob or fail;
    /// partial-write recovery is the implementation's concern.
    fn save(&mut self, image: &ConfigImage) -> Result<(), StoreError>;
}

/// Load the configuration, falling back to compiled defaults when the
/// store is empty or holds an invalid image.
///
/// Corruption is recovered silently by design: a device with a blank or
/// damaged flash area behaves exactly like a factory-fresh one.
pub fn load_config<S: ConfigStore>(store: &mut S) -> Config {
    match store.load().as_deref().and_then(Config::from_image) {
        Some(config) => config,
        None => {
            warn!("no valid config image, using defaults");
            Config::default()
        }
    }
}

/// Serialize `config` and commit it to the store.
///
/// On failure the in-memory config is untouched and the error is
/// surfaced to the caller; no retry is attempted.
pub fn save_config<S: ConfigStore>(store: &mut S, config: &Config) -> Result<(), StoreError> {
    store.save(&config.to_image())
}
