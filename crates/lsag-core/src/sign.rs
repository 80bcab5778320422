// crates/lsag-core/src/sign.rs
//
// Ring signing.
//
// Signing a message with secret key sk against a ring of n public keys
// containing pk = g·sk at index π:
//   1. draw n random nonces; slot π's nonce plays the role of the
//      private seed `a`
//   2. seed the chain: c[π+1] = challenge_init(msg, a, ring[π])
//   3. walk the remaining slots with challenge_main, wrapping modulo n,
//      until the walk writes c[π] and the chain closes
//   4. r_π = a − sk·c[π], overwriting slot π — the seed `a` itself
//      never appears in the output
//   5. emit (c[0], r_0 … r_{n−1})
//
// The emitted responses are indexed parallel to the ring, so the
// verifier can rebuild the chain from slot 0 without learning π.

use std::collections::HashMap;

use ark_bn254::{Fr, G1Affine};
use ark_ff::Zero;
use ark_std::rand::RngCore;

use crate::challenge::{challenge_init, challenge_main};
use crate::curve::{point_from_scalar, random_scalar, serialize_point};
use crate::errors::{Result, RingError};
use crate::verify::verify;
use crate::MIN_RING_SIZE;

/// A linkable ring signature: the chain seed c₀ plus one response per
/// ring slot, n + 1 scalars in total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingSignature {
    /// Chain seed c₀.
    pub challenge: Fr,
    /// Responses r₀ … r_{n−1}, indexed parallel to the ring.
    pub responses: Vec<Fr>,
}

impl RingSignature {
    /// Ring size this signature was made over.
    pub fn ring_size(&self) -> usize {
        self.responses.len()
    }

    /// Flatten to the canonical scalar layout [c₀, r₀ … r_{n−1}].
    pub fn to_scalars(&self) -> Vec<Fr> {
        let mut out = Vec::with_capacity(self.responses.len() + 1);
        out.push(self.challenge);
        out.extend_from_slice(&self.responses);
        out
    }

    /// Rebuild from the canonical scalar layout. Needs at least
    /// MIN_RING_SIZE + 1 scalars.
    pub fn from_scalars(scalars: &[Fr]) -> Result<Self> {
        if scalars.len() < MIN_RING_SIZE + 1 {
            return Err(RingError::LengthMismatch {
                got: scalars.len(),
                expected: MIN_RING_SIZE + 1,
            });
        }
        Ok(RingSignature {
            challenge: scalars[0],
            responses: scalars[1..].to_vec(),
        })
    }
}

/// Sign with OS-seeded randomness.
pub fn sign(msg: &[u8], sk: &Fr, ring: &[G1Affine], key_image: &G1Affine) -> Result<RingSignature> {
    let mut rng = ark_std::rand::rngs::OsRng;
    sign_with_rng(msg, sk, ring, key_image, &mut rng)
}

/// Sign, drawing the per-slot nonces from the given source.
///
/// Every call must draw fresh nonces: reusing a nonce across two
/// signatures with the same key leaks the secret key.
pub fn sign_with_rng<R: RngCore>(
    msg: &[u8],
    sk: &Fr,
    ring: &[G1Affine],
    key_image: &G1Affine,
    rng: &mut R,
) -> Result<RingSignature> {
    let nonces = (0..ring.len()).map(|_| random_scalar(rng)).collect();
    sign_with_nonces(msg, sk, ring, key_image, nonces)
}

/// Sign with explicit nonces, one per ring slot; slot π's entry is the
/// private seed `a`. **Only for reproducible tests and vectors** —
/// production callers go through `sign` / `sign_with_rng`.
pub fn sign_with_nonces(
    msg: &[u8],
    sk: &Fr,
    ring: &[G1Affine],
    key_image: &G1Affine,
    mut nonces: Vec<Fr>,
) -> Result<RingSignature> {
    let n = check_ring(ring)?;
    if nonces.len() != n {
        return Err(RingError::LengthMismatch {
            got: nonces.len(),
            expected: n,
        });
    }

    let pk = point_from_scalar(sk);
    let pi = ring
        .iter()
        .position(|member| *member == pk)
        .ok_or(RingError::SignerNotInRing)?;

    // Walk the ring starting at π; after n steps the walk has written
    // c[π] and the chain is closed.
    let mut chain = vec![Fr::zero(); n];
    for i in 0..n {
        let j = (pi + i) % n;
        let k = (pi + i + 1) % n;
        chain[k] = if j == pi {
            challenge_init(msg, &nonces[j], &ring[j])
        } else {
            challenge_main(msg, &nonces[j], &chain[j], &ring[j], key_image)
        };
    }

    // r_π = a − sk·c_π. Overwriting slot π destroys the seed `a`; the
    // closing response is indistinguishable from the other nonces.
    nonces[pi] = nonces[pi] - *sk * chain[pi];

    let sig = RingSignature {
        challenge: chain[0],
        responses: nonces,
    };

    // A signature that does not verify indicates a bug here or in the
    // curve library; never hand it out.
    if !verify(msg, &sig, ring, key_image)? {
        return Err(RingError::SelfCheckFailed);
    }

    Ok(sig)
}

/// Ring well-formedness shared by the signing entry points: at least
/// two members, no duplicates.
fn check_ring(ring: &[G1Affine]) -> Result<usize> {
    let n = ring.len();
    if n < MIN_RING_SIZE {
        return Err(RingError::RingTooSmall(n));
    }
    let mut seen: HashMap<[u8; 64], usize> = HashMap::with_capacity(n);
    for (i, member) in ring.iter().enumerate() {
        if let Some(&first) = seen.get(&serialize_point(member)) {
            return Err(RingError::DuplicateMember(first, i));
        }
        seen.insert(serialize_point(member), i);
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::{key_image, KeyPair};
    use ark_std::test_rng;

    fn ring_with_signer(n: usize, pi: usize, kp: &KeyPair) -> Vec<G1Affine> {
        let mut rng = test_rng();
        let mut ring: Vec<G1Affine> = (0..n)
            .map(|_| KeyPair::generate_with_rng(&mut rng).pk)
            .collect();
        ring[pi] = kp.pk;
        ring
    }

    #[test]
    fn sign_produces_n_plus_one_scalars() {
        let kp = KeyPair::from_secret_key(Fr::from(5u64));
        let ring = ring_with_signer(4, 2, &kp);
        let image = key_image(&kp.sk, &kp.pk);
        let sig = sign(b"msg", &kp.sk, &ring, &image).unwrap();
        assert_eq!(sig.ring_size(), 4);
        assert_eq!(sig.to_scalars().len(), 5);
    }

    #[test]
    fn signer_not_in_ring_is_rejected() {
        let mut rng = test_rng();
        let kp = KeyPair::generate_with_rng(&mut rng);
        let ring: Vec<G1Affine> = (0..3)
            .map(|_| KeyPair::generate_with_rng(&mut rng).pk)
            .collect();
        let image = key_image(&kp.sk, &kp.pk);
        assert_eq!(
            sign(b"msg", &kp.sk, &ring, &image),
            Err(RingError::SignerNotInRing)
        );
    }

    #[test]
    fn one_member_ring_is_rejected() {
        let kp = KeyPair::from_secret_key(Fr::from(5u64));
        let ring = vec![kp.pk];
        let image = key_image(&kp.sk, &kp.pk);
        assert_eq!(
            sign(b"msg", &kp.sk, &ring, &image),
            Err(RingError::RingTooSmall(1))
        );
        assert_eq!(
            sign(b"msg", &kp.sk, &[], &image),
            Err(RingError::RingTooSmall(0))
        );
    }

    #[test]
    fn duplicate_ring_member_is_rejected() {
        let mut rng = test_rng();
        let kp = KeyPair::generate_with_rng(&mut rng);
        let other = KeyPair::generate_with_rng(&mut rng);
        let ring = vec![kp.pk, other.pk, other.pk];
        let image = key_image(&kp.sk, &kp.pk);
        assert_eq!(
            sign(b"msg", &kp.sk, &ring, &image),
            Err(RingError::DuplicateMember(1, 2))
        );
    }

    #[test]
    fn nonce_count_must_match_ring() {
        let kp = KeyPair::from_secret_key(Fr::from(5u64));
        let ring = ring_with_signer(3, 0, &kp);
        let image = key_image(&kp.sk, &kp.pk);
        let result = sign_with_nonces(b"msg", &kp.sk, &ring, &image, vec![Fr::from(1u64); 2]);
        assert_eq!(
            result,
            Err(RingError::LengthMismatch {
                got: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn seed_lands_in_slot_zero_when_signer_is_last() {
        // With π = n−1 the init transition writes slot 0, so the
        // emitted challenge is exactly the seeded value.
        let kp = KeyPair::from_secret_key(Fr::from(2u64));
        let ring = vec![point_from_scalar(&Fr::from(1u64)), kp.pk];
        let image = key_image(&kp.sk, &kp.pk);
        let a = Fr::from(3u64);
        let sig =
            sign_with_nonces(b"hello", &kp.sk, &ring, &image, vec![Fr::from(4u64), a]).unwrap();
        assert_eq!(sig.challenge, challenge_init(b"hello", &a, &kp.pk));
    }

    #[test]
    fn closing_response_reproduces_the_seed() {
        // With π = 0 the chain closes in slot 0's successor: feeding
        // (r_π, c_π = sig.challenge) through the main transition must
        // reproduce the init value seeded from a = 3.
        let kp = KeyPair::from_secret_key(Fr::from(1u64));
        let ring = vec![kp.pk, point_from_scalar(&Fr::from(2u64))];
        let image = key_image(&kp.sk, &kp.pk);
        let a = Fr::from(3u64);
        let sig =
            sign_with_nonces(b"hello", &kp.sk, &ring, &image, vec![a, Fr::from(4u64)]).unwrap();
        assert_eq!(
            challenge_main(b"hello", &sig.responses[0], &sig.challenge, &ring[0], &image),
            challenge_init(b"hello", &a, &kp.pk),
        );
    }

    #[test]
    fn seed_nonce_is_replaced_in_output() {
        let kp = KeyPair::from_secret_key(Fr::from(9u64));
        let ring = ring_with_signer(3, 1, &kp);
        let image = key_image(&kp.sk, &kp.pk);
        let a = Fr::from(1000u64);
        let nonces = vec![Fr::from(11u64), a, Fr::from(13u64)];
        let sig = sign_with_nonces(b"msg", &kp.sk, &ring, &image, nonces).unwrap();
        assert_ne!(sig.responses[1], a, "the seed must never be emitted");
        assert_eq!(sig.responses[0], Fr::from(11u64));
        assert_eq!(sig.responses[2], Fr::from(13u64));
    }

    #[test]
    fn scalar_layout_round_trip() {
        let kp = KeyPair::from_secret_key(Fr::from(5u64));
        let ring = ring_with_signer(3, 0, &kp);
        let image = key_image(&kp.sk, &kp.pk);
        let sig = sign(b"msg", &kp.sk, &ring, &image).unwrap();

        let flat = sig.to_scalars();
        assert_eq!(flat[0], sig.challenge);
        assert_eq!(&flat[1..], &sig.responses[..]);
        assert_eq!(RingSignature::from_scalars(&flat).unwrap(), sig);
    }

    #[test]
    fn from_scalars_rejects_short_input() {
        assert!(RingSignature::from_scalars(&[Fr::from(1u64), Fr::from(2u64)]).is_err());
    }
}
