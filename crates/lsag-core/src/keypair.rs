// Key generation and key images.
//
// Private key: random scalar sk ∈ Fr
// Public key:  PK = sk · g  (a point in G1)
// Key image:   I = sk · H_p(PK), where H_p is hash_point_to_point
//
// The key image is a deterministic fingerprint of the keypair: two ring
// signatures made with the same sk carry the same image, which is how a
// verifier detects double use without learning which ring member signed.

use ark_bn254::{Fr, G1Affine};
use ark_ec::CurveGroup;
use ark_std::rand::RngCore;

use crate::curve::{point_from_scalar, random_scalar};
use crate::hash::hash_point_to_point;

/// A ring member's keypair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Secret scalar sk ∈ Fr. Never leaves the signer.
    pub sk: Fr,
    /// Public key PK = sk · g.
    pub pk: G1Affine,
}

impl KeyPair {
    /// Generate a fresh keypair using OS-seeded randomness.
    pub fn generate() -> Self {
        let mut rng = ark_std::rand::rngs::OsRng;
        Self::generate_with_rng(&mut rng)
    }

    /// Generate a fresh keypair from the given source.
    pub fn generate_with_rng<R: RngCore>(rng: &mut R) -> Self {
        Self::from_secret_key(random_scalar(rng))
    }

    /// Derive the keypair for an existing secret scalar.
    pub fn from_secret_key(sk: Fr) -> Self {
        KeyPair {
            sk,
            pk: point_from_scalar(&sk),
        }
    }

    /// The key image I = sk · H_p(PK) for this keypair.
    pub fn key_image(&self) -> G1Affine {
        key_image(&self.sk, &self.pk)
    }
}

/// Compute the key image I = sk · H_p(pk).
///
/// Depends only on (sk, pk) — never on the ring, nonces, or message —
/// and recomputation yields a byte-identical point.
pub fn key_image(sk: &Fr, pk: &G1Affine) -> G1Affine {
    (hash_point_to_point(pk) * sk).into_affine()
}
