pub mod challenge;
pub mod curve;
pub mod errors;
pub mod hash;
pub mod keypair;
pub mod sign;
pub mod verify;

/// Smallest ring that provides any anonymity: the signer plus one other
/// member.
pub const MIN_RING_SIZE: usize = 2;

// Re-exports for convenience
pub use challenge::{challenge_init, challenge_main};
pub use curve::{map_to_g1, point_from_scalar, serialize_point};
pub use errors::{Result, RingError};
pub use hash::{hash_point_to_point, hash_to_base_field, hash_to_scalar};
pub use keypair::{key_image, KeyPair};
pub use sign::{sign, sign_with_nonces, sign_with_rng, RingSignature};
pub use verify::verify;
