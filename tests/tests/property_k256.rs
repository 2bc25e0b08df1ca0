//! Property-based tests for secp256k1 group arithmetic

use kcrypt_algorithms::ec::k256::{
    base_point_g, curve, mod_inverse, point_add, scalar_mult_base_g, scalar_multiply, Point,
    Scalar,
};
use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

fn scalar_from_bytes(bytes: [u8; 32]) -> Option<Scalar> {
    Scalar::new(bytes).ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn additivity_small_scalars(a in 0u32..64, b in 0u32..64) {
        let g = base_point_g();
        let lhs = scalar_multiply(&BigInt::from(a + b), &g).unwrap();
        let rhs = point_add(
            &scalar_multiply(&BigInt::from(a), &g).unwrap(),
            &scalar_multiply(&BigInt::from(b), &g).unwrap(),
        ).unwrap();
        prop_assert_eq!(&lhs, &rhs);

        let mut repeated = Point::identity();
        for _ in 0..(a + b) {
            repeated = point_add(&repeated, &g).unwrap();
        }
        prop_assert_eq!(lhs, repeated);
    }

    #[test]
    fn random_multiples_are_on_curve(bytes in any::<[u8; 32]>()) {
        let k = BigInt::from(BigUint::from_bytes_be(&bytes));
        let p = scalar_multiply(&k, &base_point_g()).unwrap();
        prop_assert!(p.is_valid());
    }

    #[test]
    fn addition_commutes_and_negation_cancels(
        a in any::<[u8; 32]>().prop_filter_map("scalar in range", scalar_from_bytes),
        b in any::<[u8; 32]>().prop_filter_map("scalar in range", scalar_from_bytes),
    ) {
        let p = scalar_mult_base_g(&a).unwrap();
        let q = scalar_mult_base_g(&b).unwrap();
        prop_assert_eq!(point_add(&p, &q).unwrap(), point_add(&q, &p).unwrap());
        prop_assert!(point_add(&p, &p.negate()).unwrap().is_identity());
    }

    #[test]
    fn mod_inverse_modulo_p(a in 1u64..u64::MAX) {
        let p = BigInt::from(curve().p.clone());
        let a = BigInt::from(a);
        let inv = mod_inverse(&a, &p).unwrap();
        prop_assert!(inv >= BigInt::from(0) && inv < p);
        prop_assert_eq!((a * inv) % &p, BigInt::from(1));
    }

    #[test]
    fn compressed_roundtrip(
        k in any::<[u8; 32]>().prop_filter_map("scalar in range", scalar_from_bytes),
    ) {
        let p = scalar_mult_base_g(&k).unwrap();
        let encoded = p.serialize_compressed().unwrap();
        prop_assert_eq!(Point::deserialize_compressed(&encoded).unwrap(), p);
    }
}
