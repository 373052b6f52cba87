//! Override output collaborator trait.

/// Abstraction over the DAC-plus-analog-switch output stage.
///
/// Coordinates are 8-bit, centered at 128, for both the clamp and the
/// fixed-override paths; widening to the DAC's word size is the
/// implementation's concern. An axis whose switch is left disabled
/// passes the live analog signal through regardless of the coordinate
/// supplied for it.
///
/// Calls are fire-and-forget: if the serial transfer to the DAC fails,
/// that is logged and handled by the implementation, not by the engine.
pub trait OverrideOutput {
    /// Present a coordinate on the DAC and enable the per-axis switches
    /// as requested.
    fn drive_override(&mut self, x: u8, y: u8, enable_x: bool, enable_y: bool);

    /// Disable both switches, returning the output to passthrough.
    fn clear_override(&mut self);
}
