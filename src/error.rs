// Errors for the text boundary. Classification itself is total and never fails.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MmsiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MmsiError {
    /// Nothing left after trimming and stripping the optional tag
    #[error("empty MMSI")]
    Empty,
    /// Input contains something other than ASCII digits
    #[error("invalid MMSI '{input}': expected decimal digits only")]
    InvalidDigits { input: String },
    /// Digits parse but do not fit in 32 bits
    #[error("MMSI '{input}' does not fit in 32 bits")]
    Overflow { input: String },
}
