//! Scripted in-memory subsystem.
//!
//! [`ScriptedSubsystem`] plays back device capabilities and snapshot outcomes
//! declared up front, in place of real hardware. The test suite drives the
//! engine through it, and [`detect`](crate::backends::detect) falls back to an
//! empty instance on hosts without a joystick subsystem.
//!
//! Snapshot outcomes are consumed in FIFO order per slot; an exhausted feed
//! reads as a transient failure, so a script that queues fewer readings than
//! the session requests produces read errors rather than repeated data.
//! `delay` records the requested pause instead of sleeping.

use std::collections::{HashMap, VecDeque};

use crate::caps::DeviceCaps;
use crate::error::SubsystemError;
use crate::state::JoySample;
use crate::subsystem::Subsystem;

/// Status word reported for scripted read failures. Matches the subsystem's
/// "device unplugged" code so log output looks like the real thing.
const SCRIPTED_FAIL_CODE: u32 = 167;

struct ScriptedDevice {
    caps: DeviceCaps,
    feed: VecDeque<Option<JoySample>>,
}

/// In-memory [`Subsystem`] playing back scripted devices and readings.
#[derive(Default)]
pub struct ScriptedSubsystem {
    slots: u32,
    devices: HashMap<u32, ScriptedDevice>,
    delay_calls: Vec<u32>,
    snapshot_calls: u32,
}

impl ScriptedSubsystem {
    /// Subsystem reporting `slots` addressable slots, all initially empty.
    pub fn new(slots: u32) -> Self {
        Self {
            slots,
            ..Self::default()
        }
    }

    /// Subsystem with no slots at all.
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Occupy slot `caps.id` with a device. The slot count grows to cover the
    /// slot if needed.
    pub fn install(&mut self, caps: DeviceCaps) {
        self.slots = self.slots.max(caps.id + 1);
        self.devices.insert(
            caps.id,
            ScriptedDevice {
                caps,
                feed: VecDeque::new(),
            },
        );
    }

    /// Queue a successful reading for slot `id`.
    ///
    /// No-op for slots without an installed device.
    pub fn feed(&mut self, id: u32, sample: JoySample) {
        if let Some(dev) = self.devices.get_mut(&id) {
            dev.feed.push_back(Some(sample));
        }
    }

    /// Queue a failed reading for slot `id`.
    pub fn feed_failure(&mut self, id: u32) {
        if let Some(dev) = self.devices.get_mut(&id) {
            dev.feed.push_back(None);
        }
    }

    /// Queue `n` copies of the same successful reading.
    pub fn feed_repeated(&mut self, id: u32, sample: JoySample, n: u32) {
        for _ in 0..n {
            self.feed(id, sample);
        }
    }

    /// Delays requested so far, in call order.
    pub fn delay_calls(&self) -> &[u32] {
        &self.delay_calls
    }

    /// Number of snapshot attempts made so far, successful or not.
    pub fn snapshot_calls(&self) -> u32 {
        self.snapshot_calls
    }
}

impl Subsystem for ScriptedSubsystem {
    fn device_count(&mut self) -> u32 {
        self.slots
    }

    fn capabilities(&mut self, id: u32) -> Result<DeviceCaps, SubsystemError> {
        self.devices
            .get(&id)
            .map(|dev| dev.caps.clone())
            .ok_or(SubsystemError::DeviceAbsent { id })
    }

    fn snapshot(&mut self, id: u32) -> Result<JoySample, SubsystemError> {
        self.snapshot_calls += 1;
        let dev = self
            .devices
            .get_mut(&id)
            .ok_or(SubsystemError::DeviceAbsent { id })?;
        match dev.feed.pop_front() {
            Some(Some(sample)) => Ok(sample),
            // Scripted failure, or a feed that ran dry.
            _ => Err(SubsystemError::ReadFailed {
                id,
                code: SCRIPTED_FAIL_CODE,
            }),
        }
    }

    fn delay(&mut self, ms: u32) {
        self.delay_calls.push(ms);
    }
}
