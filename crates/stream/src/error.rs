//! Result and Error types for the streaming module

/// Type alias for `Result<T, stream::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq)]
/// The error type for `nxgeom-stream`
pub enum Error {
    /// A record could not be handed to the broker
    #[error("failed to publish to \"{topic}\": {reason}")]
    Publish { topic: String, reason: String },

    /// The job-control client reported a failure
    #[error("job control failed: {0}")]
    JobControl(String),

    /// The stop time can not be represented
    #[error("stop time is out of range")]
    InvalidStopTime,
}
