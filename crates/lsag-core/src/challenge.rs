// crates/lsag-core/src/challenge.rs
//
// The two Fiat–Shamir transitions that form the ring chain.
//
// Each link hashes the message together with a commitment pair (L, R):
//   init:  L = g·a,          R = H_p(pk)·a
//   main:  L = g·r + pk·c,   R = H_p(pk)·r + I·c
//
// If r = a − sk·c with pk = g·sk and I = sk·H_p(pk), the main
// transition reproduces the init transition's output. That identity is
// what lets the signer close the chain at their own slot, and is the
// only place the secret key enters the arithmetic.
//
// L and R are serialized independently (X ∥ Y each), and the message is
// fed as raw bytes, so an on-chain verifier can rebuild every link from
// field-level primitives alone.

use ark_bn254::{Fr, G1Affine, G1Projective};
use ark_ec::{CurveGroup, Group};

use crate::curve::serialize_point;
use crate::hash::{hash_point_to_point, hash_to_scalar};

/// Seed the chain at the signer's slot from the private nonce `a`.
pub fn challenge_init(msg: &[u8], a: &Fr, pk: &G1Affine) -> Fr {
    let l = G1Projective::generator() * a;
    let r = hash_point_to_point(pk) * a;
    hash_to_scalar(&[
        msg,
        &serialize_point(&l.into_affine()),
        &serialize_point(&r.into_affine()),
    ])
}

/// Advance the chain across a non-signer slot.
pub fn challenge_main(msg: &[u8], r: &Fr, c: &Fr, pk: &G1Affine, key_image: &G1Affine) -> Fr {
    let l = G1Projective::generator() * r + *pk * c;
    let rr = hash_point_to_point(pk) * r + *key_image * c;
    hash_to_scalar(&[
        msg,
        &serialize_point(&l.into_affine()),
        &serialize_point(&rr.into_affine()),
    ])
}
