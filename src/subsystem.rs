//! The OS joystick subsystem seam.
//!
//! Everything the harness needs from the platform is four blocking calls:
//! slot enumeration, a capability query, a state poll, and a pause between
//! polls. [`Subsystem`] captures exactly that surface so the engine
//! ([`session`](crate::session), [`scan`](crate::scan)) and both CLI tools
//! stay backend-agnostic.
//!
//! Implementations live in [`backends`](crate::backends):
//! - `WinmmSubsystem` — the real thing, over the Windows multimedia API.
//! - `ScriptedSubsystem` — an in-memory stand-in for tests and for hosts
//!   without a joystick subsystem.
//!
//! All calls are synchronous and may block for as long as the platform takes;
//! the harness adds no timeout or cancellation of its own. `delay` is part of
//! the seam (rather than a bare `thread::sleep` at call sites) so tests can
//! count pauses without waiting on wall-clock time.

use crate::caps::DeviceCaps;
use crate::error::SubsystemError;
use crate::state::JoySample;

/// Blocking interface to a joystick-class input subsystem.
pub trait Subsystem {
    /// Number of device slots the subsystem supports. Slots `0..count` may be
    /// queried; most are usually empty.
    fn device_count(&mut self) -> u32;

    /// Query static capabilities for a slot. Fails with
    /// [`SubsystemError::DeviceAbsent`] when no device occupies it.
    fn capabilities(&mut self, id: u32) -> Result<DeviceCaps, SubsystemError>;

    /// Read the instantaneous state of a slot known to exist. Fails with
    /// [`SubsystemError::ReadFailed`] on a transient read error.
    fn snapshot(&mut self, id: u32) -> Result<JoySample, SubsystemError>;

    /// Block for `ms` milliseconds.
    fn delay(&mut self, ms: u32);
}
