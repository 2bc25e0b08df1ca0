//! Known-answer tests for the secp256k1 curve engine

use kcrypt_algorithms::ec::k256::{
    base_point_g, point_add, point_double, scalar_multiply, Point,
};
use kcrypt_tests::vectors::MULTIPLES_OF_G;
use num_bigint::BigInt;

#[test]
fn test_multiples_of_g_match_vectors() {
    let g = base_point_g();
    for v in MULTIPLES_OF_G.iter() {
        let expected = v.point();
        assert!(expected.is_valid(), "vector {}G is not on the curve", v.k);
        assert_eq!(
            scalar_multiply(&BigInt::from(v.k), &g).unwrap(),
            expected,
            "k = {}",
            v.k
        );
    }
}

#[test]
fn test_vectors_by_addition_chain() {
    let g = base_point_g();
    let mut acc = Point::identity();
    for v in MULTIPLES_OF_G.iter() {
        acc = point_add(&acc, &g).unwrap();
        assert_eq!(acc, v.point(), "k = {}", v.k);
    }
}

#[test]
fn test_doubling_matches_vectors() {
    let one = MULTIPLES_OF_G[0].point();
    let two = MULTIPLES_OF_G[1].point();
    assert_eq!(point_double(&one).unwrap(), two);
}

#[test]
fn test_sec1_encodings_of_vectors() {
    for v in MULTIPLES_OF_G.iter() {
        let p = v.point();

        let uncompressed = p.serialize_uncompressed().unwrap();
        assert_eq!(hex::encode(&uncompressed[1..33]), v.x);
        assert_eq!(hex::encode(&uncompressed[33..]), v.y);
        assert_eq!(Point::from_sec1_bytes(&uncompressed).unwrap(), p);

        let compressed = p.serialize_compressed().unwrap();
        assert_eq!(hex::encode(&compressed[1..]), v.x);
        assert_eq!(Point::from_sec1_bytes(&compressed).unwrap(), p);
    }
}

#[test]
fn test_x_coordinate_bytes() {
    let two = MULTIPLES_OF_G[1].point();
    assert_eq!(hex::encode(two.x_coordinate_bytes().unwrap()), MULTIPLES_OF_G[1].x);
}
