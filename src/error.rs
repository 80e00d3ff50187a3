use serde::{de, ser};
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding XDR.
///
/// Decode errors are fatal for the whole decode call: a failed decode never
/// yields a partially populated value, and retrying with the same input
/// cannot succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A custom error message from serde
    Message(String),

    /// Attempted to read past the end of the input buffer (buffer underflow)
    UnexpectedEof,

    /// A declared variable-length count exceeds the remaining input bytes.
    /// Raised before any allocation sized by the count.
    LengthExceedsInput { declared: u32, remaining: usize },

    /// A sequence length was not known ahead of time (XDR requires a count prefix)
    LengthRequired,

    /// Data exceeded the representable length (lengths are encoded as u32)
    LengthOverflow { max: u32, got: u64 },

    /// A string contained non-UTF-8 bytes
    InvalidString,

    /// A union or enum discriminant outside the known set. Decoding is
    /// strict: unknown discriminants are rejected, never skipped.
    InvalidDiscriminant(i32),

    /// The boolean encoding was neither 0 nor 1
    InvalidBool(u32),

    /// An optional-data flag was neither 0 nor 1
    InvalidOption(u32),

    /// The base64 text form could not be decoded
    InvalidBase64(String),

    /// The protocol's XDR profile does not use this serde data model type
    Unsupported(&'static str),

    /// An I/O error occurred while writing or reading
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Message(msg) => write!(f, "{}", msg),
            Error::UnexpectedEof => write!(f, "unexpected end of input"),
            Error::LengthExceedsInput { declared, remaining } => {
                write!(
                    f,
                    "declared length {} exceeds {} remaining input bytes",
                    declared, remaining
                )
            }
            Error::LengthRequired => {
                write!(
                    f,
                    "sequence length must be known before serialization (XDR requires a count prefix)"
                )
            }
            Error::LengthOverflow { max, got } => {
                write!(f, "length {} exceeds maximum {}", got, max)
            }
            Error::InvalidString => write!(f, "string contains invalid bytes"),
            Error::InvalidDiscriminant(v) => write!(f, "invalid discriminant value: {}", v),
            Error::InvalidBool(v) => write!(f, "invalid boolean encoding: {} (must be 0 or 1)", v),
            Error::InvalidOption(v) => {
                write!(f, "invalid optional-data flag: {} (must be 0 or 1)", v)
            }
            Error::InvalidBase64(msg) => write!(f, "invalid base64 text: {}", msg),
            Error::Unsupported(t) => {
                write!(f, "the protocol's XDR profile does not use type: {}", t)
            }
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}
