//! The vision-link seam.
//!
//! The vision subsystem owns the authoritative calibration vector; the panel
//! reaches it through [`VisionLink`]. Callouts are synchronous and complete
//! or fail within the UI event that triggered them.

use thiserror::Error;
use tracing::debug;

use crate::calibration::CalibrationVector;

/// Errors surfaced by a vision link.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The link is not (or no longer) connected to the vision subsystem.
    #[error("vision link is not connected")]
    Disconnected,
    /// The subsystem rejected or failed the operation.
    #[error("vision link operation failed: {0}")]
    Operation(String),
}

/// Handle to the external vision subsystem's calibration state.
///
/// Implementations return the current vector by value; the caller's copy is
/// unsynchronized and goes stale the moment the subsystem changes.
pub trait VisionLink {
    /// Fetches the current calibration vector.
    fn get_camera_calibrate(&mut self) -> Result<CalibrationVector, LinkError>;

    /// Replaces the subsystem's calibration vector with `vector`, all nine
    /// values at once.
    fn set_camera_calibrate(&mut self, vector: CalibrationVector) -> Result<(), LinkError>;
}

/// In-memory vision link for standalone runs and tests.
///
/// Mirrors the real subsystem's behavior at this seam: `get` hands out a
/// copy, `set` replaces the stored vector wholesale.
#[derive(Debug, Default)]
pub struct MockVisionLink {
    calibrate: CalibrationVector,
}

impl MockVisionLink {
    pub fn new(initial: CalibrationVector) -> Self {
        Self { calibrate: initial }
    }
}

impl VisionLink for MockVisionLink {
    fn get_camera_calibrate(&mut self) -> Result<CalibrationVector, LinkError> {
        debug!(calibrate = ?self.calibrate, "mock link: get camera calibrate");
        Ok(self.calibrate)
    }

    fn set_camera_calibrate(&mut self, vector: CalibrationVector) -> Result<(), LinkError> {
        debug!(?vector, "mock link: set camera calibrate");
        self.calibrate = vector;
        Ok(())
    }
}
