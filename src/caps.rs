//! Device capability snapshot.
//!
//! [`DeviceCaps`] is a lightweight, cloneable description of one joystick
//! slot, produced once per capability query. It is what the catalog scanner
//! prints and what the sampler validates before polling.
//!
//! # Conventions
//! - `id` is the subsystem's slot index, not a stable hardware identity.
//! - `name` is the driver-reported product string (already decoded from the
//!   OS wide-string form; possibly truncated by the subsystem).
//! - `vid`/`pid` are the 16-bit manufacturer/product identifiers and are the
//!   closest thing to a stable identity the legacy API offers.
//! - `max_axes`/`max_buttons` are subsystem-wide upper bounds, not properties
//!   of the device itself; they are reported alongside for diagnostics.

use serde::{Deserialize, Serialize};

/// Capabilities of a single device slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCaps {
    /// Slot index the subsystem uses to address this device.
    pub id: u32,

    /// Driver-reported product name.
    pub name: String,

    /// Manufacturer (vendor) identifier.
    pub vid: u16,

    /// Product identifier.
    pub pid: u16,

    /// Number of axes the device exposes.
    pub axes: u32,

    /// Number of buttons the device exposes.
    pub buttons: u32,

    /// Maximum axes the subsystem supports per device.
    pub max_axes: u32,

    /// Maximum buttons the subsystem supports per device.
    pub max_buttons: u32,
}
