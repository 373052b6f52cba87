//! Joystick gesture recognition and analog override engine.
//!
//! This crate is the platform-agnostic core of a device that sits inline
//! between an analog two-axis joystick and a consumer reading the stick
//! position through a DAC-controlled analog path. While an auxiliary
//! button is held, the output is replaced with a fixed, configured
//! coordinate selected by the short directional gesture the user
//! performed just before pressing the button; otherwise the live
//! (optionally clamped) position passes through.
//!
//! # Overview
//!
//! - [`quantizer`]: maps raw `(x, y)` samples onto nine [`Direction`]s
//!   with anti-chatter hysteresis
//! - [`history`]: rolling three-slot log of distinct directions
//! - [`gesture`]: compile-time gesture table and priority matcher
//! - [`engine`]: the output arbiter state machine ([`Engine`])
//! - [`config`]: tunable parameters and their persisted image
//! - [`store`], [`sampling`], [`output`]: collaborator traits for
//!   non-volatile memory, the ADC scheduler and the DAC output stage
//! - [`latch`]: single-slot interrupt-to-foreground handoff
//!
//! # Example
//!
//! ```
//! use stickmod::{Config, Engine, GestureId, OverrideOutput, SamplingControl};
//!
//! struct Adc;
//! impl SamplingControl for Adc {
//!     fn request_fast_sampling(&mut self) {}
//!     fn request_slow_sampling(&mut self) {}
//! }
//!
//! struct Dac;
//! impl OverrideOutput for Dac {
//!     fn drive_override(&mut self, _x: u8, _y: u8, _ex: bool, _ey: bool) {}
//!     fn clear_override(&mut self) {}
//! }
//!
//! let mut engine = Engine::new(Config::default(), Adc, Dac);
//!
//! // Roll the stick from North up onto NorthEast, then press the button:
//! engine.push_sample(128, 0);
//! engine.push_sample(255, 0);
//! engine.on_button_edge(true);
//! assert_eq!(
//!     engine.state(),
//!     stickmod::ArbiterState::GestureActive(GestureId::NNe)
//! );
//! ```
//!
//! # Concurrency
//!
//! The engine runs in a single cooperative foreground context; its entry
//! points are not reentrant and must never be called from interrupt
//! handlers. Interrupt sources publish into a [`latch::Latch`] that the
//! main loop polls. There is no heap allocation anywhere in the crate.
//!
//! # Features
//!
//! - **`std`**: standard library support for host testing
//! - **`defmt`**: `defmt` logging and `Format` derives for embedded use
//! - **`log`**: `log`-based logging for host builds

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod engine;
pub mod gesture;
pub mod history;
pub mod latch;
pub mod output;
pub mod quantizer;
pub mod sampling;
pub mod store;
pub mod types;

// Re-export main types at crate root
pub use config::{Config, EnableMask, OutputMode, QuantizerParams};
pub use engine::{ArbiterState, Engine};
pub use gesture::{find_gesture, GestureDef, GESTURE_TABLE};
pub use history::GestureHistory;
pub use latch::Latch;
pub use output::OverrideOutput;
pub use sampling::SamplingControl;
pub use store::{load_config, save_config, ConfigImage, ConfigStore, StoreError};
pub use types::{Category, Direction, GestureId, GESTURE_COUNT};
