//! Sampling session engine.
//!
//! [`run`] performs the fixed-cadence polling loop at the heart of the
//! sampler tool: a set number of state polls against one slot, each followed
//! by a pause, folded into a [`SessionAggregate`] of per-axis envelopes and
//! a cumulative button mask. Failed polls are counted and skipped; nothing is
//! retried. The caller is expected to have validated the slot with a
//! capability query first — the loop itself treats every failure as
//! transient.
//!
//! The aggregate is owned by the loop and returned by value; there is no
//! process-wide accumulator state.

use tracing::debug;

use crate::state::JoySample;
use crate::subsystem::Subsystem;

/// Poll attempts per session unless overridden.
pub const DEFAULT_SAMPLES: u32 = 10;

/// Pause between poll attempts unless overridden, in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 50;

/// Parameters for one sampling session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionParams {
    /// Slot to poll.
    pub device: u32,
    /// Number of poll attempts.
    pub samples: u32,
    /// Pause after every attempt, in milliseconds.
    pub delay_ms: u32,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            device: 0,
            samples: DEFAULT_SAMPLES,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// Running `[min, max]` envelope for one axis.
///
/// Undefined until the first observed value, so a session with no successful
/// reads has nothing to report rather than a sentinel pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisEnvelope(Option<(u32, u32)>);

impl AxisEnvelope {
    /// Widen the envelope to cover `value`.
    pub fn observe(&mut self, value: u32) {
        self.0 = Some(match self.0 {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
    }

    /// Smallest observed value, if any.
    #[inline]
    pub fn min(&self) -> Option<u32> {
        self.0.map(|(lo, _)| lo)
    }

    /// Largest observed value, if any.
    #[inline]
    pub fn max(&self) -> Option<u32> {
        self.0.map(|(_, hi)| hi)
    }

    /// `max - min`, if the envelope is defined.
    #[inline]
    pub fn span(&self) -> Option<u32> {
        self.0.map(|(lo, hi)| hi - lo)
    }
}

/// Everything one sampling session observed.
#[derive(Clone, Debug, Default)]
pub struct SessionAggregate {
    /// Polls that returned a sample.
    pub success: u32,
    /// Polls that failed.
    pub errors: u32,
    /// OR of every sampled button mask.
    pub buttons_ever: u32,
    pub x: AxisEnvelope,
    pub y: AxisEnvelope,
    pub z: AxisEnvelope,
    pub r: AxisEnvelope,
    pub u: AxisEnvelope,
    pub v: AxisEnvelope,
    /// Raw first/last successful samples, with their iteration index, kept
    /// verbatim so a human can spot-check start/end state in the report.
    pub spot_samples: Vec<(u32, JoySample)>,
}

impl SessionAggregate {
    fn absorb(&mut self, sample: &JoySample) {
        self.x.observe(sample.x);
        self.y.observe(sample.y);
        self.z.observe(sample.z);
        self.r.observe(sample.r);
        self.u.observe(sample.u);
        self.v.observe(sample.v);
        self.buttons_ever |= sample.buttons;
    }

    /// Number of distinct buttons seen pressed at least once.
    #[inline]
    pub fn pressed_count(&self) -> u32 {
        self.buttons_ever.count_ones()
    }

    /// A session degrades when any poll failed. A zero-sample session is
    /// clean by definition.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.errors > 0
    }
}

/// Run one sampling session against `params.device`.
///
/// Performs exactly `params.samples` poll attempts, pausing `params.delay_ms`
/// after every attempt — including the last, and including failed ones.
/// Samples at the first and last iteration are recorded verbatim in
/// [`SessionAggregate::spot_samples`].
pub fn run(sys: &mut dyn Subsystem, params: SessionParams) -> SessionAggregate {
    let mut agg = SessionAggregate::default();

    for i in 0..params.samples {
        match sys.snapshot(params.device) {
            Ok(sample) => {
                agg.success += 1;
                agg.absorb(&sample);
                if i == 0 || i + 1 == params.samples {
                    agg.spot_samples.push((i, sample));
                }
            }
            Err(err) => {
                agg.errors += 1;
                debug!(attempt = i, %err, "poll failed");
            }
        }
        sys.delay(params.delay_ms);
    }

    agg
}
