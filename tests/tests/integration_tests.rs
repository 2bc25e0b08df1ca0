//! Cross-crate tests: text entry points, typed scheme and error taxonomy

use kcrypt_algorithms::ec::k256 as ec;
use kcrypt_algorithms::error::to_core_result;
use kcrypt_api::{Error as ApiError, ErrorKind, Pke, ResultExt};
use kcrypt_common::math_common::mod_inv;
use kcrypt_pke::{decrypt, encrypt, generate_keypair, public_key_from_private, EciesK256};
use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn roundtrip<P: Pke>(message: &[u8], seed: u64) -> kcrypt_api::Result<Vec<u8>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let (pk, sk) = P::keypair(&mut rng)?;
    let ciphertext = P::encrypt(&pk, message, &mut rng)?;
    P::decrypt(&sk, &ciphertext)
}

#[test]
fn test_text_roundtrip() -> kcrypt_api::Result<()> {
    let (private_key, public_key) = generate_keypair()?;
    let envelope = encrypt("hello world", &public_key)?;
    assert_eq!(decrypt(&envelope, &private_key)?, "hello world");
    Ok(())
}

#[test]
fn test_generic_pke_roundtrip() -> kcrypt_api::Result<()> {
    let message = b"generic over the Pke trait";
    assert_eq!(roundtrip::<EciesK256>(message, 99)?, message);
    Ok(())
}

#[test]
fn test_many_messages_one_key() -> kcrypt_api::Result<()> {
    let (private_key, public_key) = generate_keypair()?;
    for message in ["", "a", "0123456789abcdef0123456789abcdef", "line\nbreak", "{\"json\": true}"] {
        let envelope = encrypt(message, &public_key)?;
        assert_eq!(decrypt(&envelope, &private_key)?, message);
    }
    Ok(())
}

#[test]
fn test_two_encryptions_differ() -> kcrypt_api::Result<()> {
    let (_, public_key) = generate_keypair()?;
    let a = encrypt("same message", &public_key)?;
    let b = encrypt("same message", &public_key)?;
    assert_ne!(a, b);
    Ok(())
}

#[test]
fn test_keypair_is_consistent() -> kcrypt_api::Result<()> {
    let (private_key, public_key) = generate_keypair()?;
    assert_eq!(public_key_from_private(&private_key)?, public_key);
    Ok(())
}

#[test]
fn test_error_kinds_through_the_layers() {
    let err = ec::scalar_multiply(&BigInt::from(-1), &ec::base_point_g()).unwrap_err();
    assert_eq!(ApiError::from(err).kind(), ErrorKind::InvalidArgument);

    let err = ec::mod_inverse(&BigInt::from(4), &BigInt::from(8)).unwrap_err();
    assert_eq!(ApiError::from(err).kind(), ErrorKind::Arithmetic);

    let err = to_core_result(ec::Scalar::new([0u8; 32]), "key loading").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.context(), "key loading");

    let err = encrypt("x", "0x1:0x1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_result_ext_rewrites_context() {
    let result: Result<(), ApiError> = Err(ApiError::invalid_state("inner", "boom"));
    let err = result.with_context("outer").unwrap_err();
    assert_eq!(err.context(), "outer");
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(err.to_string().contains("boom"));
}

#[test]
fn test_curve_engine_mod_inverse_agrees_with_common() {
    let p = BigInt::from(ec::curve().p.clone());
    for a in [1i64, 2, 3, 7, 12345, -5] {
        let a = BigInt::from(a);
        assert_eq!(ec::mod_inverse(&a, &p).ok(), mod_inv(&a, &p));
    }
}
