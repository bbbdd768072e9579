//! Error type shared by every wave, renderer and codec.
//!
//! End of signal is not an error. A wave that runs out reports
//! [`Output::Ended`](crate::core::Output::Ended) on the `Ok` channel, so
//! combinators can swallow it without ever touching a real failure.

use std::time::Duration;

/// Failures raised while building, evaluating, encoding or playing waves.
#[derive(Debug, thiserror::Error)]
pub enum WaveError {
    /// Sample rate of zero.
    #[error("invalid sample rate {0}, sample rate must be positive")]
    InvalidSampleRate(u32),

    /// Requested render duration was zero.
    #[error("invalid duration {0:?}, duration must be positive")]
    InvalidDuration(Duration),

    /// A boundary that needs a wave was given none.
    #[error("no wave was provided")]
    MissingWave,

    /// Encoding was asked to write an empty frame sequence.
    #[error("no frames were provided")]
    NoFrames,

    /// Raw PCM input ended in the middle of an 8-byte frame.
    #[error("raw PCM stream ends with a partial frame of {len} bytes")]
    TruncatedFrame { len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "wav")]
    #[error(transparent)]
    Wav(#[from] hound::Error),

    /// External player exited unsuccessfully.
    #[error("{program} exited with {status}")]
    PlayerExited {
        program: String,
        status: std::process::ExitStatus,
    },

    /// A wrapped wave failed for a reason of its own.
    #[error("wave evaluation failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl WaveError {
    /// Wraps an arbitrary error raised inside a custom wave.
    pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        WaveError::Failed(err.into())
    }

    /// Returns true for errors caused by invalid caller input, detected
    /// before any evaluation takes place.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            WaveError::InvalidSampleRate(_)
                | WaveError::InvalidDuration(_)
                | WaveError::MissingWave
                | WaveError::NoFrames
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors() {
        assert!(WaveError::InvalidSampleRate(0).is_configuration());
        assert!(WaveError::InvalidDuration(Duration::ZERO).is_configuration());
        assert!(WaveError::MissingWave.is_configuration());
        assert!(!WaveError::failed("disk unplugged").is_configuration());
    }

    #[test]
    fn test_failed_keeps_message() {
        let err = WaveError::failed("disk unplugged");
        assert_eq!(err.to_string(), "wave evaluation failed: disk unplugged");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: WaveError = io.into();
        assert!(matches!(err, WaveError::Io(_)));
    }
}
