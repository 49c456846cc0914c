//! Instantaneous device state.

/// One state snapshot for a device slot: six axis magnitudes plus the
/// currently-pressed button bitmask.
///
/// Axis values are unsigned magnitudes in whatever range the driver
/// advertises; the harness never rescales them, it only tracks the observed
/// envelope. Bit `n` of `buttons` is set while button `n` is held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoySample {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub r: u32,
    pub u: u32,
    pub v: u32,
    /// Bitmask of buttons held at sample time.
    pub buttons: u32,
}
