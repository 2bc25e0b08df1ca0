//! ECIES over secp256k1 with a SHA-256 KDF and repeating-key XOR.
//!
//! Encryption draws an ephemeral key `r`, publishes `R = r · G` and XORs the
//! message with `SHA-256(x(r · Q))`. Decryption recomputes the same point as
//! `k · R`. The text functions at the bottom of this module speak the JSON
//! envelope and the `0x` hex key encodings; the `Pke` implementation works on
//! typed keys and accepts an injected RNG.

mod envelope;
mod keys;

pub use envelope::EciesK256Envelope;
pub use keys::{EciesK256PublicKey, EciesK256SecretKey};

use kcrypt_algorithms::ec::k256 as ec;
use kcrypt_algorithms::stream::apply_keystream;
use kcrypt_api::error::{Error as ApiError, Result as ApiResult};
use kcrypt_api::traits::Pke;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument, warn};

use crate::error::{Error as PkeError, Result};

/// ECIES over secp256k1
pub struct EciesK256;

impl EciesK256 {
    // Hash the shared point into the XOR key and run the keystream.
    fn apply_shared_secret(shared_point: &ec::Point, data: &[u8]) -> Result<Vec<u8>> {
        if shared_point.is_identity() {
            warn!("ECDH produced the point at infinity");
            return Err(PkeError::DegenerateSharedSecret(
                "ECDH resulted in point at infinity",
            ));
        }
        let key = ec::kdf_sha256_for_ecies(shared_point)?;
        Ok(apply_keystream(data, key.as_slice())?)
    }
}

impl Pke for EciesK256 {
    type PublicKey = EciesK256PublicKey;
    type SecretKey = EciesK256SecretKey;
    type Ciphertext = EciesK256Envelope;

    fn name() -> &'static str {
        "ECIES-secp256k1-SHA256-XOR"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let (sk_scalar, pk_point) = ec::generate_keypair(rng).map_err(PkeError::from)?;
        let public_key = EciesK256PublicKey::from_point(pk_point)?;
        Ok((public_key, EciesK256SecretKey::from_scalar(&sk_scalar)))
    }

    #[instrument(level = "debug", skip_all, fields(plaintext_len = plaintext.len()))]
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        let (ephemeral_scalar, ephemeral_point) =
            ec::generate_keypair(rng).map_err(PkeError::from)?;

        let shared_point =
            ec::scalar_mult(&ephemeral_scalar, pk_recipient.as_point()).map_err(PkeError::from)?;
        drop(ephemeral_scalar);

        let ciphertext = Self::apply_shared_secret(&shared_point, plaintext)?;
        debug!(ciphertext_len = ciphertext.len(), "message encrypted");

        Ok(EciesK256Envelope::new(ephemeral_point, ciphertext)?)
    }

    #[instrument(level = "debug", skip_all, fields(ciphertext_len = ciphertext.ciphertext().len()))]
    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Vec<u8>> {
        let multiplier = sk_recipient.to_multiplier()?;
        let shared_point = ec::scalar_multiply(&multiplier, ciphertext.ephemeral_public_key())
            .map_err(PkeError::from)?;

        Ok(Self::apply_shared_secret(
            &shared_point,
            ciphertext.ciphertext(),
        )?)
    }
}

/// Generate a key pair from the OS random source.
///
/// Returns `("0x<private>", "0x<x>:0x<y>")`.
pub fn generate_keypair() -> ApiResult<(String, String)> {
    let (public_key, secret_key) = EciesK256::keypair(&mut OsRng)?;
    Ok((secret_key.to_string(), public_key.to_string()))
}

/// Encrypt a UTF-8 message to a `"0x<x>:0x<y>"` public key and return the
/// JSON envelope.
#[instrument(level = "debug", skip_all, fields(plaintext_len = plaintext.len()))]
pub fn encrypt(plaintext: &str, public_key: &str) -> ApiResult<String> {
    let public_key: EciesK256PublicKey = public_key.parse().map_err(|e| {
        warn!("rejected public key");
        ApiError::from(e)
    })?;
    let envelope = EciesK256::encrypt(&public_key, plaintext.as_bytes(), &mut OsRng)?;
    Ok(envelope.to_json()?)
}

/// Decrypt a JSON envelope with a hex private key.
///
/// A wrong key or an edited ciphertext is only noticed when the result is
/// not valid UTF-8; otherwise the garbled text is returned.
#[instrument(level = "debug", skip_all, fields(envelope_len = envelope.len()))]
pub fn decrypt(envelope: &str, private_key: &str) -> ApiResult<String> {
    let envelope = EciesK256Envelope::from_json(envelope).map_err(|e| {
        warn!("rejected ciphertext envelope");
        ApiError::from(e)
    })?;
    let secret_key: EciesK256SecretKey = private_key.parse()?;

    let plaintext = EciesK256::decrypt(&secret_key, &envelope)?;
    String::from_utf8(plaintext).map_err(|_| {
        warn!("decrypted bytes are not valid UTF-8");
        ApiError::from(PkeError::DecryptionFailed(
            "invalid UTF-8: corrupted data or wrong key",
        ))
    })
}

/// Derive the `"0x<x>:0x<y>"` public key for a hex private key.
pub fn public_key_from_private(private_key: &str) -> ApiResult<String> {
    let secret_key: EciesK256SecretKey = private_key.parse()?;
    Ok(secret_key.public_key()?.to_string())
}
