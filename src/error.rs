use thiserror::Error;

/// Reasons an address or mask token is rejected.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("malformed address `{0}`, expected four dot-separated numbers")]
    MalformedAddress(String),
    #[error("octet out of range in `{0}`, each part must be 0-255")]
    OctetOutOfRange(String),
    #[error("invalid prefix length `{0}`, expected 0-32")]
    InvalidPrefixLength(String),
    #[error("malformed mask `{0}`")]
    MalformedMask(String),
}
