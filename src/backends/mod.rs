//! Subsystem backends for `joyprobe`.
//!
//! Implementations of [`Subsystem`](crate::subsystem::Subsystem) for the
//! platforms the harness runs on.
//!
//! # Feature flags
//! - **`winmm`** — enables the Windows multimedia (winmm) backend (default).
//!
//! The scripted backend is always available; it backs the test suite and
//! stands in on hosts without a joystick subsystem.

#[cfg(all(feature = "winmm", target_os = "windows"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "winmm", target_os = "windows"))))]
pub mod winmm;

pub mod scripted;

use crate::subsystem::Subsystem;

/// Pick the subsystem backend for the current platform.
///
/// Returns the winmm backend on Windows when `winmm` is enabled; otherwise an
/// empty scripted subsystem, so the tools still run (and report zero devices)
/// on hosts with nothing to probe.
pub fn detect() -> Box<dyn Subsystem> {
    #[cfg(all(feature = "winmm", target_os = "windows"))]
    {
        Box::new(winmm::WinmmSubsystem::new())
    }

    #[cfg(not(all(feature = "winmm", target_os = "windows")))]
    {
        Box::new(scripted::ScriptedSubsystem::empty())
    }
}
