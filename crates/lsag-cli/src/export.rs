use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use serde_json::{json, Value};
use std::path::Path;

use ark_bn254::G1Affine;
use ark_ec::AffineRepr;
use lsag_core::{KeyPair, RingSignature};

/// Convert any PrimeField element to a decimal string for JSON.
fn field_to_dec<F: PrimeField>(f: &F) -> String {
    let bytes = f.into_bigint().to_bytes_le();
    BigUint::from_bytes_le(&bytes).to_string()
}

fn point_to_json(p: &G1Affine) -> Value {
    if p.is_zero() {
        return json!({ "x": "0", "y": "0" });
    }
    json!({
        "x": field_to_dec(&p.x),
        "y": field_to_dec(&p.y),
    })
}

/// Render a keypair as decimal-string JSON. The secret key is included:
/// this output is for the key's owner, not for publication.
pub fn keypair_to_json(kp: &KeyPair) -> Value {
    json!({
        "sk": field_to_dec(&kp.sk),
        "pk": point_to_json(&kp.pk),
    })
}

/// Render a signing run — ring, key image, and signature — as
/// decimal-string JSON for inspection or hand-off to an integrator.
///
/// The signature appears both as its (c0, responses) structure and as
/// the flat n+1 scalar layout an on-chain verifier consumes.
pub fn signature_to_json(
    message: &str,
    sig: &RingSignature,
    ring: &[G1Affine],
    key_image: &G1Affine,
) -> Value {
    let flat: Vec<String> = sig.to_scalars().iter().map(field_to_dec).collect();
    json!({
        "message": message,
        "ring": ring.iter().map(point_to_json).collect::<Vec<_>>(),
        "keyImage": point_to_json(key_image),
        "signature": {
            "c0": field_to_dec(&sig.challenge),
            "responses": sig.responses.iter().map(field_to_dec).collect::<Vec<_>>(),
            "scalars": flat,
        },
    })
}

/// Write a JSON value to a file, creating parent directories as needed.
pub fn write_json(value: &Value, output_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json_str = serde_json::to_string_pretty(value).expect("JSON serialization failed");
    std::fs::write(output_path, json_str)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
