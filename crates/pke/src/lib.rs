//! Public Key Encryption (PKE) schemes for the kcrypt library.
//!
//! Currently one scheme: ECIES over secp256k1 with a SHA-256 key and a
//! repeating-key XOR body, exposed both as the typed [`EciesK256`] and as
//! text functions that speak hex keys and a JSON envelope.

pub mod ecies;
pub mod error;

// Re-export key items
pub use ecies::{
    decrypt, encrypt, generate_keypair, public_key_from_private, EciesK256, EciesK256Envelope,
    EciesK256PublicKey, EciesK256SecretKey,
};
pub use error::{Error, Result};
