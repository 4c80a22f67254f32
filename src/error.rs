//! Error types for line encoding.
//!
//! Every encoder validates its whole input before producing a single sample,
//! so a failed call never hands back a partial waveform.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The bit sequence or the sampling parameters were rejected
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// File I/O error while dumping a trace
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of a trace failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WAV export failed
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

/// Input rejected before encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("bit sequence is empty")]
    EmptySequence,

    /// A value other than 0 or 1 was found in the sequence
    #[error("non-binary value {value} at index {index}")]
    NonBinary { index: usize, value: u8 },

    #[error("bit duration must be finite and positive, got {0}")]
    InvalidBitDuration(f64),

    #[error("samples per bit must be positive, got {0}")]
    InvalidSamplesPerBit(usize),

    /// `bit_duration / samples_per_bit` underflows to zero or a subnormal
    #[error("sample step {0:e} is too small for an increasing time axis")]
    InvalidStep(f64),

    /// `bits * samples_per_bit` does not fit in `usize`
    #[error("{bits} bits at {samples_per_bit} samples per bit overflow usize")]
    TooManySamples { bits: usize, samples_per_bit: usize },

    /// The last sample time is not finite
    #[error("time axis for {bits} bits exceeds the representable range")]
    TimeAxisOverflow { bits: usize },

    /// Unexpected character while parsing a textual bit string
    #[error("unexpected character {0:?} in bit string")]
    InvalidBitString(char),

    #[error("invalid hex string: {0}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
