//! Error types for codec operations

use thiserror::Error;

/// Error type returned by codec decode operations.
///
/// Encode operations are infallible and degrade to placeholder text instead
/// of returning one of these.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed {0} input: {1}")]
    MalformedInput(&'static str, String), // codec id, detail
    #[error("value exceeds {0} bits")]
    Overflow(u32),
    #[error("invalid checksum")]
    ChecksumInvalid,
}
