// Ring signature verification.
//
// Rebuild the chain from slot 0: fold each (response, member) pair
// through the main transition and check that the wrapped-around
// recomputation lands back on the emitted challenge. The verifier
// never learns which slot seeded the chain.

use ark_bn254::G1Affine;

use crate::challenge::challenge_main;
use crate::errors::{Result, RingError};
use crate::sign::RingSignature;
use crate::MIN_RING_SIZE;

/// Verify a ring signature against a message, ring, and key image.
///
/// `Ok(true)` for a valid signature, `Ok(false)` for an invalid one;
/// `Err` only for malformed inputs (undersized ring, response count not
/// matching the ring).
pub fn verify(
    msg: &[u8],
    sig: &RingSignature,
    ring: &[G1Affine],
    key_image: &G1Affine,
) -> Result<bool> {
    let n = ring.len();
    if n < MIN_RING_SIZE {
        return Err(RingError::RingTooSmall(n));
    }
    if sig.responses.len() != n {
        return Err(RingError::LengthMismatch {
            got: sig.responses.len(),
            expected: n,
        });
    }

    let mut c = sig.challenge;
    for (member, response) in ring.iter().zip(&sig.responses) {
        c = challenge_main(msg, response, &c, member, key_image);
    }

    Ok(c == sig.challenge)
}
