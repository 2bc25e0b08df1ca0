//! secp256k1 elliptic curve point operations

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

use crate::ec::k256::{
    constants::{
        K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
    },
    curve, field,
};
use crate::error::{validate, Error, Result};

/// Format of a serialized elliptic curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// The point at infinity (identity element)
    Identity,
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    Compressed,
}

/// A point on the secp256k1 elliptic curve in affine coordinates
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The identity element (point at infinity)
    Infinity,
    /// A finite point `(x, y)` with coordinates in `[0, p)`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Create a new point from affine coordinates.
    ///
    /// Returns an error if a coordinate is not below `p` or the coordinates
    /// don't satisfy the curve equation.
    pub fn new_affine(x: BigUint, y: BigUint) -> Result<Self> {
        let p = &curve().p;
        validate::parameter(&x < p, "K256 Point", "x-coordinate is not below the field modulus")?;
        validate::parameter(&y < p, "K256 Point", "y-coordinate is not below the field modulus")?;
        if !Self::is_on_curve(&x, &y) {
            return Err(Error::param(
                "K256 Point",
                "Point coordinates do not satisfy curve equation",
            ));
        }
        Ok(Point::Affine { x, y })
    }

    /// Create the identity point (point at infinity).
    pub fn identity() -> Self {
        Point::Infinity
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate, `None` for the identity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the identity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Check if this point is valid (the identity, or on the curve).
    pub fn is_valid(&self) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let p = &curve().p;
                x < p && y < p && Self::is_on_curve(x, y)
            }
        }
    }

    /// Check `y² ≡ x³ + a·x + b (mod p)`.
    pub fn is_on_curve(x: &BigUint, y: &BigUint) -> bool {
        field::square(y) == field::curve_rhs(x)
    }

    /// The inverse point `-P = (x, -y)`.
    pub fn negate(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: field::sub(&BigUint::zero(), y),
            },
        }
    }

    /// Group law: `self + other`.
    pub fn add(&self, other: &Point) -> Result<Point> {
        match (self, other) {
            (Point::Infinity, _) => Ok(other.clone()),
            (_, Point::Infinity) => Ok(self.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                if x1 == x2 {
                    if y1 == y2 {
                        return self.double();
                    }
                    // vertical line through P and -P
                    return Ok(Point::Infinity);
                }

                // λ = (y2 - y1) / (x2 - x1)
                let slope = field::mul(&field::sub(y2, y1), &field::invert(&field::sub(x2, x1))?);
                Ok(Self::from_slope(&slope, x1, y1, x2))
            }
        }
    }

    /// Point doubling: `2 · self`.
    ///
    /// Fails with an arithmetic error for a point with `y = 0`; no such point
    /// exists on secp256k1.
    pub fn double(&self) -> Result<Point> {
        match self {
            Point::Infinity => Ok(Point::Infinity),
            Point::Affine { x, y } => {
                // λ = (3x² + a) / 2y
                let three_x2 = field::mul(&BigUint::from(3u8), &field::square(x));
                let numerator = field::add(&three_x2, &curve().a);
                let denominator = field::add(y, y);
                let slope = field::mul(&numerator, &field::invert(&denominator)?);
                Ok(Self::from_slope(&slope, x, y, x))
            }
        }
    }

    /// Scalar multiplication `k · self` by double-and-add, least significant
    /// bit first.
    ///
    /// `k = 0` gives the identity; negative `k` is rejected.
    pub fn mul(&self, k: &BigInt) -> Result<Point> {
        match k.sign() {
            Sign::Minus => Err(Error::param(
                "scalar",
                "scalar multiplication is only defined for non-negative scalars",
            )),
            Sign::NoSign => Ok(Point::Infinity),
            Sign::Plus => {
                let mut k = k.magnitude().clone();
                let mut result = Point::Infinity;
                let mut addend = self.clone();

                while !k.is_zero() {
                    if k.is_odd() {
                        result = result.add(&addend)?;
                    }
                    addend = addend.double()?;
                    k >>= 1;
                }

                Ok(result)
            }
        }
    }

    // x3 = λ² - x1 - x2, y3 = λ(x1 - x3) - y1
    fn from_slope(slope: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> Point {
        let x3 = field::sub(&field::sub(&field::square(slope), x1), x2);
        let y3 = field::sub(&field::mul(slope, &field::sub(x1, &x3)), y1);
        Point::Affine { x: x3, y: y3 }
    }

    /// Get the x-coordinate of this point as fixed-width big-endian bytes.
    ///
    /// The identity has no x-coordinate and is rejected.
    pub fn x_coordinate_bytes(&self) -> Result<[u8; K256_FIELD_ELEMENT_SIZE]> {
        match self {
            Point::Infinity => Err(Error::param(
                "K256 Point",
                "point at infinity has no x-coordinate",
            )),
            Point::Affine { x, .. } => field::to_bytes(x),
        }
    }

    /// Detect the SEC1 format of a serialized point from its length and tag.
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        let sized = bytes.len() == K256_POINT_UNCOMPRESSED_SIZE
            || bytes.len() == K256_POINT_COMPRESSED_SIZE;
        if sized && bytes.iter().all(|&b| b == 0) {
            return Ok(PointFormat::Identity);
        }
        match (bytes.len(), bytes.first()) {
            (K256_POINT_UNCOMPRESSED_SIZE, Some(0x04)) => Ok(PointFormat::Uncompressed),
            (K256_POINT_COMPRESSED_SIZE, Some(0x02 | 0x03)) => Ok(PointFormat::Compressed),
            _ => Err(Error::param("K256 Point", "Unknown point encoding")),
        }
    }

    /// Deserialize a point in any SEC1 format.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        match Self::detect_format(bytes)? {
            PointFormat::Identity => Ok(Self::identity()),
            PointFormat::Uncompressed => Self::deserialize_uncompressed(bytes),
            PointFormat::Compressed => Self::deserialize_compressed(bytes),
        }
    }

    /// Serialize this point in uncompressed format.
    ///
    /// The identity serializes to all zeros.
    pub fn serialize_uncompressed(&self) -> Result<[u8; K256_POINT_UNCOMPRESSED_SIZE]> {
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        if let Point::Affine { x, y } = self {
            out[0] = 0x04;
            out[1..1 + K256_FIELD_ELEMENT_SIZE].copy_from_slice(&field::to_bytes(x)?);
            out[1 + K256_FIELD_ELEMENT_SIZE..].copy_from_slice(&field::to_bytes(y)?);
        }
        Ok(out)
    }

    /// Deserialize a point from uncompressed format.
    ///
    /// Returns an error if the bytes don't represent a valid point.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Uncompressed Point",
            bytes.len(),
            K256_POINT_UNCOMPRESSED_SIZE,
        )?;

        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }

        if bytes[0] != 0x04 {
            return Err(Error::param(
                "K256 Point",
                "Invalid uncompressed point prefix (expected 0x04)",
            ));
        }

        let mut x_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        let mut y_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..1 + K256_FIELD_ELEMENT_SIZE]);
        y_bytes.copy_from_slice(&bytes[1 + K256_FIELD_ELEMENT_SIZE..]);

        Self::new_affine(field::from_bytes(&x_bytes)?, field::from_bytes(&y_bytes)?)
    }

    /// Serialize this point in compressed format.
    pub fn serialize_compressed(&self) -> Result<[u8; K256_POINT_COMPRESSED_SIZE]> {
        let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
        if let Point::Affine { x, y } = self {
            out[0] = if y.is_odd() { 0x03 } else { 0x02 };
            out[1..].copy_from_slice(&field::to_bytes(x)?);
        }
        Ok(out)
    }

    /// Deserialize a point from compressed format.
    ///
    /// Returns an error if the bytes don't represent a valid point.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Compressed Point",
            bytes.len(),
            K256_POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != 0x02 && tag != 0x03 {
            return Err(Error::param("K256 Point", "Invalid compressed point prefix"));
        }

        let mut x_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..]);
        let x = field::from_bytes(&x_bytes)?;

        let y = field::sqrt(&field::curve_rhs(&x))
            .ok_or_else(|| Error::param("K256 Point", "Invalid compressed point: no sqrt"))?;
        let y = if y.is_odd() == (tag == 0x03) {
            y
        } else {
            field::sub(&BigUint::zero(), &y)
        };

        Ok(Point::Affine { x, y })
    }
}
