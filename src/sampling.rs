//! Sampling-rate collaborator trait.

/// Rate hints the engine sends to whatever schedules ADC conversions.
///
/// The engine asks for the fast rate while clamp-tracking (output
/// responsiveness) and drops back to the slow rate once the button is
/// released. These are hints, not guarantees; the engine never depends
/// on a particular rate being in effect.
pub trait SamplingControl {
    /// Request the higher conversion rate.
    fn request_fast_sampling(&mut self);

    /// Request the lower (idle) conversion rate.
    fn request_slow_sampling(&mut self);
}
