//! Output arbiter: decides, per button edge and per sample, whether the
//! output stage passes the (clamped) live position through or holds a
//! fixed gesture coordinate.
//!
//! The engine owns all mutable core state - config, gesture history,
//! arbiter state, last raw sample - and is driven entirely by two entry
//! points called from the single foreground context:
//! [`Engine::push_sample`] and [`Engine::on_button_edge`]. Neither is
//! reentrant and neither may be called from interrupt context; interrupt
//! sources hand their data over through a [`crate::latch::Latch`].

use crate::config::Config;
use crate::gesture::find_gesture;
use crate::history::GestureHistory;
use crate::output::OverrideOutput;
use crate::quantizer::{self, CENTER};
use crate::sampling::SamplingControl;
use crate::types::GestureId;

/// Arbiter state. `GestureActive` carries the matched gesture so the
/// active target survives config edits made while the button is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArbiterState {
    /// Button up: samples feed the quantizer and gesture history, the
    /// output stage passes the stick through untouched.
    Idle,
    /// Button held after a recognized gesture: the DAC holds the
    /// gesture's target on both axes.
    GestureActive(GestureId),
    /// Button held with no recognized gesture: live samples are clamped
    /// to the configured radius and forwarded to the output stage.
    ClampTrack,
}

/// The gesture-recognition and output-arbitration engine.
///
/// Generic over its two outbound collaborators: `S` schedules ADC
/// conversion rates, `O` drives the DAC and analog switches.
pub struct Engine<S, O> {
    config: Config,
    history: GestureHistory,
    state: ArbiterState,
    last_sample: (u8, u8),
    sampler: S,
    output: O,
}

impl<S: SamplingControl, O: OverrideOutput> Engine<S, O> {
    /// Create an idle engine. `config` normally comes from
    /// [`crate::store::load_config`] at boot.
    pub fn new(config: Config, sampler: S, output: O) -> Self {
        Self {
            config,
            history: GestureHistory::new(),
            state: ArbiterState::Idle,
            last_sample: (CENTER, CENTER),
            sampler,
            output,
        }
    }

    /// Feed one completed ADC conversion into the engine.
    ///
    /// In `Idle` the sample is quantized into the gesture history and no
    /// output is driven. In `ClampTrack` it is clamped and forwarded to
    /// the output stage. While a gesture override is active, samples are
    /// ignored entirely so the held target cannot be disturbed.
    pub fn push_sample(&mut self, x: u8, y: u8) {
        self.last_sample = (x, y);
        match self.state {
            ArbiterState::Idle => {
                if let Some(direction) = quantizer::classify(&self.config.quantizer, x, y) {
                    self.history.push(direction);
                }
            }
            ArbiterState::ClampTrack => self.drive_clamped(x, y),
            ArbiterState::GestureActive(_) => {}
        }
    }

    /// Feed a debounced button edge into the engine.
    ///
    /// A press while idle either latches the matched gesture's target
    /// onto the output, or - with no match - starts clamp tracking at
    /// the fast sampling rate, driving the last known sample immediately
    /// so the output is correct before the next conversion completes.
    /// A release unconditionally aborts any override and returns to
    /// `Idle`, taking effect before the next sample is processed.
    pub fn on_button_edge(&mut self, pressed: bool) {
        if pressed {
            // Press edges in an active state have no defined meaning
            // (the button is already down) and are dropped.
            if self.state != ArbiterState::Idle {
                return;
            }
            match find_gesture(&self.history.snapshot(), &self.config) {
                Some(id) => {
                    let (x, y) = self.config.target(id);
                    debug!("override active: id={} x={} y={}", id as u8, x, y);
                    self.output.drive_override(x, y, true, true);
                    self.state = ArbiterState::GestureActive(id);
                }
                None => {
                    trace!("no gesture matched, clamp tracking");
                    self.state = ArbiterState::ClampTrack;
                    let (x, y) = self.last_sample;
                    self.drive_clamped(x, y);
                    self.sampler.request_fast_sampling();
                }
            }
        } else {
            self.output.clear_override();
            self.sampler.request_slow_sampling();
            self.state = ArbiterState::Idle;
        }
    }

    /// Clamp a live sample to the configured per-axis radius and forward
    /// it. Only axes outside the radius get their switch enabled; axes
    /// within it pass the live value through with the switch open.
    fn drive_clamped(&mut self, x: u8, y: u8) {
        let (cx, ex) = clamp_axis(x, self.config.clamp_radius.0);
        let (cy, ey) = clamp_axis(y, self.config.clamp_radius.1);
        self.output.drive_override(cx, cy, ex, ey);
    }

    /// Current arbiter state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> ArbiterState {
        self.state
    }

    /// Current gesture history snapshot.
    #[must_use]
    pub const fn history(&self) -> &GestureHistory {
        &self.history
    }

    /// Read access to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access for the configuration-editing collaborator. The
    /// engine itself never mutates the config.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Decompose the engine into its collaborators.
    pub fn into_parts(self) -> (S, O) {
        (self.sampler, self.output)
    }
}

/// Clamp one axis to `center ± radius`. Returns the output value and
/// whether the axis override switch must be enabled.
fn clamp_axis(value: u8, radius: u8) -> (u8, bool) {
    let lower = CENTER.saturating_sub(radius);
    let upper = CENTER.saturating_add(radius);
    if value < lower {
        (lower, true)
    } else if value > upper {
        (upper, true)
    } else {
        (value, false)
    }
}
