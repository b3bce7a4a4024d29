use error_location::ErrorLocation;
use thiserror::Error;

/// Monitoring pipeline errors with source location tracking.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The camera stream is not ready for recording.
    #[error("Capture device unavailable {location}")]
    DeviceUnavailable {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The recording session could not be opened or completed.
    #[error("Capture failed: {reason} {location}")]
    CaptureFailed {
        /// Description of the capture error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The segment upload failed at the transport level.
    #[error("Upload failed: {reason} {location}")]
    UploadFailed {
        /// Description of the transport error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The classification response could not be interpreted.
    #[error("Malformed classification response: {reason} {location}")]
    MalformedResponse {
        /// Description of the parse error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The alert playback device could not be opened.
    #[error("Audio output unavailable: {reason} {location}")]
    AudioUnavailable {
        /// Description of the playback error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`MonitorError`].
pub type Result<T> = std::result::Result<T, MonitorError>;
