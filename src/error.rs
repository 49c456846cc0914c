use thiserror::Error;

/// Failure reported by a [`Subsystem`](crate::subsystem::Subsystem) backend.
///
/// The winmm API collapses everything into an `MMRESULT` status word, and the
/// harness does not distinguish beyond success/failure; the raw status is kept
/// on the read path for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsystemError {
    /// No device occupies the requested slot (capability query failed).
    #[error("no device in slot {id}")]
    DeviceAbsent { id: u32 },

    /// A state poll failed for a slot that previously reported capabilities.
    #[error("state poll failed for slot {id} (status {code:#x})")]
    ReadFailed { id: u32, code: u32 },
}
