// crates/lsag-core/src/hash.rs
//
// SHA-256 digests reduced into the BN254 fields, and the point-to-point
// hash built on top of MapToG1.
//
// Every Fiat–Shamir value in the ring chain is
//   SHA-256(concatenation) → big-endian integer → reduce mod r,
// and the hash-to-curve of a public key is
//   SHA-256(BE(X) ∥ BE(Y)) → reduce mod p → MapToG1.
//
// The point-to-point hash feeds the coordinate encodings separately,
// not a unified point serialization: a verifier that only has SHA-256,
// field reduction, and MapToG1 must be able to reproduce it.

use ark_bn254::{Fq, Fr, G1Affine};
use ark_ff::PrimeField;
use sha2::{Digest, Sha256};

use crate::curve::{fq_to_be_bytes, map_to_g1};

/// SHA-256 over the concatenated parts, reduced modulo r.
pub fn hash_to_scalar(parts: &[&[u8]]) -> Fr {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    Fr::from_be_bytes_mod_order(&hasher.finalize())
}

/// SHA-256 over the concatenated parts, reduced modulo p.
pub fn hash_to_base_field(parts: &[&[u8]]) -> Fq {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    Fq::from_be_bytes_mod_order(&hasher.finalize())
}

/// Hash a curve point to another curve point.
///
/// MapToG1(SHA-256(BE(X) ∥ BE(Y)) mod p). Deterministic, and the
/// discrete log of the output with respect to the input is unknown,
/// which is what the key image construction relies on.
pub fn hash_point_to_point(p: &G1Affine) -> G1Affine {
    let fe = hash_to_base_field(&[&fq_to_be_bytes(&p.x), &fq_to_be_bytes(&p.y)]);
    map_to_g1(&fe)
}
