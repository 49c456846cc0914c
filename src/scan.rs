//! Device catalog scan and test-fixture selection.
//!
//! [`run`] walks every slot the subsystem reports, collects capabilities for
//! the occupied ones, and feeds each through [`FixtureSelection::consider`]
//! to pick the device the automation rig is wired to. Capability failures
//! during the walk are the normal signature of an empty slot and are skipped
//! silently.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::caps::DeviceCaps;
use crate::subsystem::Subsystem;

/// Product-name substring of the purpose-built fixture device.
pub const FIXTURE_NAME: &str = "Test Gamepad";

/// Product-name substring of the virtual-joystick driver used as a fallback
/// fixture on rigs without the real one.
pub const FIXTURE_DRIVER: &str = "vJoy";

/// Vendor id the fixture firmware reports.
pub const FIXTURE_VID: u16 = 0x1234;

/// Product id the fixture firmware reports.
pub const FIXTURE_PID: u16 = 0xBEAD;

/// The single device identified as the automation test fixture, if any.
///
/// Selection is sticky: once a matching device with nonzero buttons is
/// locked in, later candidates never displace it. A match with zero buttons
/// holds the selection only until a nonzero-button match comes along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSelection {
    /// Whether any device matched the fixture identity rule.
    pub found: bool,
    /// Button count of the selected device (0 when none found).
    pub buttons: u32,
    /// Axis count of the selected device (0 when none found).
    pub axes: u32,
}

impl FixtureSelection {
    /// Offer a candidate to the selection.
    ///
    /// A candidate is only looked at while nothing is selected, or while the
    /// current selection reports zero buttons and the candidate does not. It
    /// then wins if it matches the fixture identity rule: name contains
    /// [`FIXTURE_NAME`] or [`FIXTURE_DRIVER`], or the vid/pid pair equals
    /// [`FIXTURE_VID`]/[`FIXTURE_PID`].
    pub fn consider(&mut self, caps: &DeviceCaps) {
        let eligible = !self.found || (self.buttons == 0 && caps.buttons > 0);
        if eligible && Self::matches(caps) {
            self.found = true;
            self.buttons = caps.buttons;
            self.axes = caps.axes;
        }
    }

    fn matches(caps: &DeviceCaps) -> bool {
        caps.name.contains(FIXTURE_NAME)
            || caps.name.contains(FIXTURE_DRIVER)
            || (caps.vid == FIXTURE_VID && caps.pid == FIXTURE_PID)
    }
}

/// Everything one catalog scan observed.
#[derive(Clone, Debug, Default)]
pub struct CatalogReport {
    /// Slot count the subsystem reported (occupied or not).
    pub num_devs: u32,
    /// Capabilities of each occupied slot, in slot order.
    pub entries: Vec<DeviceCaps>,
    /// Outcome of the fixture selection.
    pub selection: FixtureSelection,
}

impl CatalogReport {
    /// Number of slots that answered the capability query.
    #[inline]
    pub fn found_count(&self) -> u32 {
        self.entries.len() as u32
    }
}

/// Scan every slot in `[0, device_count)`.
pub fn run(sys: &mut dyn Subsystem) -> CatalogReport {
    let num_devs = sys.device_count();
    let mut report = CatalogReport {
        num_devs,
        ..CatalogReport::default()
    };

    for id in 0..num_devs {
        match sys.capabilities(id) {
            Ok(caps) => {
                report.selection.consider(&caps);
                report.entries.push(caps);
            }
            // Empty slot; not an error.
            Err(err) => trace!(slot = id, %err, "slot skipped"),
        }
    }

    report
}
