//! Known secp256k1 multiples of the base point

use kcrypt_algorithms::ec::k256::Point;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// `k · G` in affine coordinates, as lowercase hex without prefix
pub struct MultipleOfG {
    pub k: u32,
    pub x: &'static str,
    pub y: &'static str,
}

impl MultipleOfG {
    /// The vector as a curve point
    pub fn point(&self) -> Point {
        point_from_hex(self.x, self.y)
    }
}

pub static MULTIPLES_OF_G: Lazy<Vec<MultipleOfG>> = Lazy::new(|| {
    vec![
        MultipleOfG {
            k: 1,
            x: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            y: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        },
        MultipleOfG {
            k: 2,
            x: "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            y: "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        },
        MultipleOfG {
            k: 3,
            x: "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
            y: "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
        },
    ]
});

/// Build an affine point from hex coordinates without validating it.
///
/// Panics on malformed hex; fixtures only.
pub fn point_from_hex(x: &str, y: &str) -> Point {
    Point::Affine {
        x: BigUint::parse_bytes(x.as_bytes(), 16).expect("fixture x is hex"),
        y: BigUint::parse_bytes(y.as_bytes(), 16).expect("fixture y is hex"),
    }
}
