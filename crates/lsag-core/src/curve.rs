// crates/lsag-core/src/curve.rs
//
// BN254 G1 arithmetic and the MapToG1 encoding.
//
// Scalars (secret keys, nonces, challenges, responses) live in Fr, the
// order of the G1 subgroup. Point coordinates live in Fq, the base
// field. We use arkworks' curve arithmetic directly and add only the
// pieces the ring protocol needs on top: canonical big-endian
// serialization of points as X ∥ Y, and a deterministic map from base
// field elements onto G1.
//
// The map is the Shallue–van de Woestijne encoding (RFC 9380 §6.6.1)
// for y² = x³ + 3 with Z = 1, the same map on-chain runtimes expose as
// MapToG1. Verifiers that only have field-level primitives rebuild our
// hash-to-curve as SHA-256 → mod p → MapToG1, so the map itself must be
// this exact one.
//
// Curve:     y² = x³ + 3 over Fq
// Generator: (1, 2)
// Cofactor:  1 (every curve point is in G1)

use ark_bn254::{Fq, Fr, G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, Group};
use ark_ff::{BigInteger, Field, One, PrimeField, Zero};
use ark_std::rand::RngCore;
use ark_std::UniformRand;
use num_bigint::BigUint;

/// SvdW constant c2 = −Z/2 mod p, Z = 1.
pub const SVDW_C2: &str =
    "10944121435919637611123202872628637544348155578648911831344518947322613104291";

/// SvdW constant c3 = sqrt(−g(Z) · (3Z² + 4A)) mod p, normalized even.
pub const SVDW_C3: &str = "8815841940592487685674414971303048083897117035520822607866";

/// SvdW constant c4 = −4·g(Z) / (3Z² + 4A) mod p.
pub const SVDW_C4: &str =
    "7296080957279758407415468581752425029565437052432607887563012631548408736189";

pub fn field_from_dec_str<F: PrimeField>(s: &str) -> F {
    let biguint: BigUint = s.parse().expect("invalid decimal string");
    let bytes = biguint.to_bytes_le();
    F::from_le_bytes_mod_order(&bytes)
}

/// Sample a uniformly random scalar from the given source.
pub fn random_scalar<R: RngCore>(rng: &mut R) -> Fr {
    Fr::rand(rng)
}

/// Interpret bytes as a big-endian integer and reduce modulo r.
pub fn scalar_from_be_bytes(bytes: &[u8]) -> Fr {
    Fr::from_be_bytes_mod_order(bytes)
}

/// g · s for the canonical generator g = (1, 2).
pub fn point_from_scalar(s: &Fr) -> G1Affine {
    (G1Projective::generator() * s).into_affine()
}

/// Canonical 32-byte big-endian encoding of a base field element.
pub fn fq_to_be_bytes(x: &Fq) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&x.into_bigint().to_bytes_be());
    out
}

/// Canonical 32-byte big-endian encoding of a scalar.
pub fn fr_to_be_bytes(x: &Fr) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&x.into_bigint().to_bytes_be());
    out
}

/// Affine serialization BE(X) ∥ BE(Y), 64 bytes.
///
/// The identity has no affine coordinates and serializes as all zeros.
/// Honest protocol transcripts never contain it except with negligible
/// probability.
pub fn serialize_point(p: &G1Affine) -> [u8; 64] {
    let mut out = [0u8; 64];
    if p.is_zero() {
        return out;
    }
    out[..32].copy_from_slice(&fq_to_be_bytes(&p.x));
    out[32..].copy_from_slice(&fq_to_be_bytes(&p.y));
    out
}

/// sgn0 of a base field element: parity of its canonical integer.
fn sgn0(x: &Fq) -> bool {
    x.into_bigint().is_odd()
}

fn is_square(x: &Fq) -> bool {
    !x.legendre().is_qnr()
}

/// Deterministically map a base field element onto the curve.
///
/// Shallue–van de Woestijne straight-line procedure from RFC 9380
/// §6.6.1, specialized to A = 0, B = 3, Z = 1 (so c1 = g(Z) = 4). The
/// final sign fixup sgn0(y) := sgn0(u) makes the output independent of
/// which square root the field library returns.
pub fn map_to_g1(u: &Fq) -> G1Affine {
    let b = Fq::from(3u64);
    let z = Fq::one();
    let c1 = Fq::from(4u64);
    let c2: Fq = field_from_dec_str(SVDW_C2);
    let c3: Fq = field_from_dec_str(SVDW_C3);
    let c4: Fq = field_from_dec_str(SVDW_C4);

    let one = Fq::one();

    let tv1 = *u * u * c1;
    let tv2 = one + tv1;
    let tv1 = one - tv1;
    let tv3 = (tv1 * tv2).inverse().unwrap_or(Fq::zero());
    let tv4 = *u * tv1 * tv3 * c3;

    let x1 = c2 - tv4;
    let gx1 = x1 * x1 * x1 + b;
    let x2 = c2 + tv4;
    let gx2 = x2 * x2 * x2 + b;
    let x3 = {
        let t = tv2 * tv2 * tv3;
        z + c4 * t * t
    };

    let x = if is_square(&gx1) {
        x1
    } else if is_square(&gx2) {
        x2
    } else {
        x3
    };
    let gx = x * x * x + b;

    // At least one of gx1, gx2, g(x3) is a square; this cannot fail.
    let y = gx.sqrt().expect("SvdW: g(x) must be a square");
    let y = if sgn0(u) == sgn0(&y) { y } else { -y };

    G1Affine::new_unchecked(x, y)
}
