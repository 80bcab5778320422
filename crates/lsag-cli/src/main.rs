use ark_bn254::G1Affine;
use lsag_core::{key_image, sign, verify, KeyPair};
use rand::Rng;
use std::path::PathBuf;

mod export;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut message = String::from("Sign this message");
    let mut ring_size: usize = 11;
    let mut output: Option<PathBuf> = None;
    let mut keygen_only = false;

    // Simple argument parsing
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--message" | "-m" => {
                i += 1;
                if i < args.len() {
                    message = args[i].clone();
                }
            }
            "--ring-size" | "-n" => {
                i += 1;
                if i < args.len() {
                    ring_size = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid ring size: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output = Some(PathBuf::from(&args[i]));
                }
            }
            "--keygen" => {
                keygen_only = true;
            }
            "--help" | "-h" => {
                eprintln!("Usage: lsag-cli [OPTIONS]");
                eprintln!("  --message, -m    Message to sign (default: 'Sign this message')");
                eprintln!("  --ring-size, -n  Number of ring members, at least 2 (default: 11)");
                eprintln!("  --output, -o     Optional path for the signature JSON");
                eprintln!("  --keygen         Only generate a keypair and print it as JSON");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut rng = rand::rngs::OsRng;

    if keygen_only {
        let keypair = KeyPair::generate_with_rng(&mut rng);
        println!(
            "{}",
            serde_json::to_string_pretty(&export::keypair_to_json(&keypair)).unwrap()
        );
        return;
    }

    if ring_size < lsag_core::MIN_RING_SIZE {
        eprintln!("Ring size must be at least 2, signer and someone else.");
        std::process::exit(1);
    }

    eprintln!("[1/5] Generating signer keypair...");
    let keypair = KeyPair::generate_with_rng(&mut rng);

    // The rest of the ring would already be published; the signer's key
    // goes to a random slot
    let pi = rng.gen_range(0..ring_size);
    eprintln!("[2/5] Building a ring of {ring_size} members (signer at index {pi})...");
    let mut ring: Vec<G1Affine> = (0..ring_size)
        .map(|_| KeyPair::generate_with_rng(&mut rng).pk)
        .collect();
    ring[pi] = keypair.pk;

    eprintln!("[3/5] Computing key image...");
    let image = key_image(&keypair.sk, &keypair.pk);

    // A real caller would bind the key image, recipient, and fees into
    // the message to keep the signature from being replayed
    eprintln!("[4/5] Signing message: {:?}", &message);
    let sig = match sign(message.as_bytes(), &keypair.sk, &ring, &image) {
        Ok(sig) => sig,
        Err(e) => {
            eprintln!("Signing failed: {e}");
            std::process::exit(1);
        }
    };

    eprintln!("[5/5] Verifying signature...");
    match verify(message.as_bytes(), &sig, &ring, &image) {
        Ok(true) => eprintln!("  ✓ Signature valid ({} scalars)", sig.to_scalars().len()),
        Ok(false) => {
            eprintln!("  ✗ Signature did not verify!");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Verification failed: {e}");
            std::process::exit(1);
        }
    }

    let value = export::signature_to_json(&message, &sig, &ring, &image);
    if let Some(path) = &output {
        eprintln!("Writing signature JSON to {path:?}...");
        if let Err(e) = export::write_json(&value, path) {
            eprintln!("Failed to write {path:?}: {e}");
            std::process::exit(1);
        }
    }

    // Always print the JSON to stdout for inspection
    println!("{}", serde_json::to_string_pretty(&value).unwrap());
}
