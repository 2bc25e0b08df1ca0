//! Example using ECIES over secp256k1

use kcrypt::prelude::*;
use rand::rngs::OsRng;

fn main() -> Result<()> {
    println!("ECIES secp256k1 Example");
    println!("=======================");

    // Text interface: hex keys and a JSON envelope
    println!("Generating keypair...");
    let (private_key, public_key) = kcrypt::generate_keypair()?;
    println!("Private key: {}", private_key);
    println!("Public key:  {}", public_key);

    let message = "hello world";
    println!("Encrypting {:?}...", message);
    let envelope = kcrypt::encrypt(message, &public_key)?;
    println!("Envelope: {}", envelope);

    println!("Decrypting...");
    let decrypted = kcrypt::decrypt(&envelope, &private_key)?;
    println!("Decrypted: {:?}", decrypted);
    assert_eq!(decrypted, message);

    // Typed interface with an injected RNG
    let mut rng = OsRng;
    let (pk, sk) = EciesK256::keypair(&mut rng)?;
    let ciphertext = EciesK256::encrypt(&pk, b"typed message", &mut rng)?;
    println!("Ciphertext size: {} bytes", ciphertext.ciphertext().len());
    let plaintext = EciesK256::decrypt(&sk, &ciphertext)?;
    assert_eq!(plaintext, b"typed message");

    println!("Round trip succeeded! ✓");

    Ok(())
}
