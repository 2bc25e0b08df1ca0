//! Property-based tests for ECIES over secp256k1

use kcrypt_api::Pke;
use kcrypt_pke::{EciesK256, EciesK256Envelope};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn text_roundtrip(message in any::<String>(), seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk, sk) = EciesK256::keypair(&mut rng).unwrap();

        let envelope = kcrypt_pke::encrypt(&message, &pk.to_string()).unwrap();
        let decrypted = kcrypt_pke::decrypt(&envelope, &sk.to_string()).unwrap();
        prop_assert_eq!(decrypted, message);
    }

    #[test]
    fn envelope_json_roundtrip(message in prop::collection::vec(any::<u8>(), 0..200), seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk, sk) = EciesK256::keypair(&mut rng).unwrap();

        let envelope = EciesK256::encrypt(&pk, &message, &mut rng).unwrap();
        let parsed = EciesK256Envelope::from_json(&envelope.to_json().unwrap()).unwrap();
        prop_assert_eq!(&parsed, &envelope);
        prop_assert_eq!(EciesK256::decrypt(&sk, &parsed).unwrap(), message);
    }

    #[test]
    fn bit_flip_changes_one_byte(
        message in prop::collection::vec(any::<u8>(), 1..100),
        index in any::<prop::sample::Index>(),
        mask in 1u8..=255,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let (pk, sk) = EciesK256::keypair(&mut rng).unwrap();
        let mut envelope = EciesK256::encrypt(&pk, &message, &mut rng).unwrap();

        let i = index.index(message.len());
        envelope.ciphertext_mut()[i] ^= mask;
        let decrypted = EciesK256::decrypt(&sk, &envelope).unwrap();

        for (j, (d, m)) in decrypted.iter().zip(message.iter()).enumerate() {
            if j == i {
                prop_assert_eq!(d ^ m, mask);
            } else {
                prop_assert_eq!(d, m);
            }
        }
    }
}
