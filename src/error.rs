use thiserror::Error;

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Errors raised while opening, writing or closing a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV container error: {0}")]
    Wav(#[from] hound::Error),

    /// A zero rate would give a zero-sample block.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate { rate: u32 },

    #[error("sink is already closed")]
    Closed,
}
