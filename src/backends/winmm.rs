#![cfg(target_os = "windows")]

//! Windows multimedia (winmm) joystick backend.
//!
//! [`WinmmSubsystem`] wraps the legacy `joyGetNumDevs` / `joyGetDevCapsW` /
//! `joyGetPosEx` API. This is the oldest joystick surface Windows has, which
//! is exactly why the harness targets it: translation layers (Wine in
//! particular) route their joystick emulation through it, and the point of
//! the tools is to observe what arrives on the far side.
//!
//! # Semantics
//! - Capability queries fail for empty slots; that is the normal way to find
//!   out a slot is unoccupied, so failures are only traced at debug level.
//! - State polls request the full field set (`JOY_RETURNALL`): all six axes
//!   plus the button mask in one call.
//! - The product name arrives as a fixed NUL-padded UTF-16 buffer and is
//!   decoded lossily up to the first NUL.
//!
//! All calls block for as long as the driver takes; no extra timeout is
//! layered on top.

use std::time::Duration;

use tracing::debug;
use windows_sys::Win32::Media::Multimedia::{
    joyGetDevCapsW, joyGetNumDevs, joyGetPosEx, JOYCAPSW, JOYERR_NOERROR, JOYINFOEX,
    JOY_RETURNALL,
};

use crate::caps::DeviceCaps;
use crate::error::SubsystemError;
use crate::state::JoySample;
use crate::subsystem::Subsystem;

/// [`Subsystem`] backed by the winmm joystick API.
///
/// Zero-sized: winmm keeps all state process-wide, there is no handle to
/// hold.
#[derive(Default)]
pub struct WinmmSubsystem;

impl WinmmSubsystem {
    pub fn new() -> Self {
        Self
    }
}

/// Decode a fixed-size NUL-padded UTF-16 buffer.
fn decode_wide(raw: &[u16]) -> String {
    let len = raw.iter().position(|&c| c == 0).unwrap_or(raw.len());
    String::from_utf16_lossy(&raw[..len])
}

impl Subsystem for WinmmSubsystem {
    fn device_count(&mut self) -> u32 {
        unsafe { joyGetNumDevs() }
    }

    fn capabilities(&mut self, id: u32) -> Result<DeviceCaps, SubsystemError> {
        // FFI struct: must be manually zeroed
        let mut caps: JOYCAPSW = unsafe { std::mem::zeroed() };
        let status =
            unsafe { joyGetDevCapsW(id as usize, &mut caps, std::mem::size_of::<JOYCAPSW>() as u32) };

        if status != JOYERR_NOERROR {
            // Expected for empty slots during enumeration.
            debug!(slot = id, status, "capability query failed");
            return Err(SubsystemError::DeviceAbsent { id });
        }

        Ok(DeviceCaps {
            id,
            name: decode_wide(&caps.szPname),
            vid: caps.wMid,
            pid: caps.wPid,
            axes: caps.wNumAxes,
            buttons: caps.wNumButtons,
            max_axes: caps.wMaxAxes,
            max_buttons: caps.wMaxButtons,
        })
    }

    fn snapshot(&mut self, id: u32) -> Result<JoySample, SubsystemError> {
        let mut info: JOYINFOEX = unsafe { std::mem::zeroed() };
        info.dwSize = std::mem::size_of::<JOYINFOEX>() as u32;
        info.dwFlags = JOY_RETURNALL;

        // NOTE: joyGetPosEx returns 0 on success.
        let status = unsafe { joyGetPosEx(id, &mut info) };
        if status != JOYERR_NOERROR {
            debug!(slot = id, status, "state poll failed");
            return Err(SubsystemError::ReadFailed { id, code: status });
        }

        Ok(JoySample {
            x: info.dwXpos,
            y: info.dwYpos,
            z: info.dwZpos,
            r: info.dwRpos,
            u: info.dwUpos,
            v: info.dwVpos,
            buttons: info.dwButtons,
        })
    }

    fn delay(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
