// Error types for ring signing and verification.

use thiserror::Error;

/// Failures surfaced by the signing and verification entry points.
///
/// `verify` reports the cryptographic outcome as `Ok(bool)`; an `Err`
/// from it always means the inputs were malformed, never that a
/// well-formed signature was merely invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// The secret key's public key does not appear in the ring.
    #[error("signer's public key does not appear in the ring")]
    SignerNotInRing,

    /// A one-member ring provides no anonymity.
    #[error("ring has {0} member(s), need at least 2")]
    RingTooSmall(usize),

    /// Two ring slots hold the same public key.
    #[error("ring members at indices {0} and {1} are identical")]
    DuplicateMember(usize, usize),

    /// Scalar count does not match the ring size.
    #[error("expected {expected} scalars, got {got}")]
    LengthMismatch { got: usize, expected: usize },

    /// A freshly produced signature failed self-verification. This
    /// indicates a bug in this crate or the curve library and is fatal.
    #[error("freshly produced signature failed self-verification")]
    SelfCheckFailed,
}

pub type Result<T> = core::result::Result<T, RingError>;
