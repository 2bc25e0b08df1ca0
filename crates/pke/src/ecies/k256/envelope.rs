//! JSON ciphertext envelope

use std::io;

use kcrypt_algorithms::ec::k256 as ec;
use serde::{Deserialize, Serialize};

use crate::ecies::{format_hex_integer, parse_hex_natural};
use crate::error::{Error as PkeError, Result};

/// Ciphertext for ECIES secp256k1: the ephemeral public point and the
/// XOR-encrypted message bytes. Carries no integrity tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EciesK256Envelope {
    ephemeral: ec::Point,
    ciphertext: Vec<u8>,
}

// Wire layout; field order is the output order.
#[derive(Serialize, Deserialize)]
struct EnvelopeJson {
    ephemeral_x: String,
    ephemeral_y: String,
    ciphertext: String,
}

// Single-line JSON with a space after each `,` and `:`.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

impl EciesK256Envelope {
    /// Assemble an envelope. The ephemeral point must be a finite point on
    /// the curve.
    pub fn new(ephemeral: ec::Point, ciphertext: Vec<u8>) -> Result<Self> {
        if ephemeral.is_identity() || !ephemeral.is_valid() {
            return Err(PkeError::InvalidCiphertextFormat(
                "ephemeral key is not a finite curve point".into(),
            ));
        }
        Ok(Self {
            ephemeral,
            ciphertext,
        })
    }

    /// The ephemeral public point `R = r · G`
    pub fn ephemeral_public_key(&self) -> &ec::Point {
        &self.ephemeral
    }

    /// The encrypted message bytes
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Mutable access to the encrypted bytes.
    ///
    /// Nothing authenticates them, so any edit decrypts to correspondingly
    /// edited plaintext.
    pub fn ciphertext_mut(&mut self) -> &mut Vec<u8> {
        &mut self.ciphertext
    }

    /// Encode as `{"ephemeral_x": "0x…", "ephemeral_y": "0x…", "ciphertext": "<hex>"}`
    pub fn to_json(&self) -> Result<String> {
        let (x, y) = match (self.ephemeral.x(), self.ephemeral.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Err(PkeError::SerializationError(
                    "ephemeral key is the point at infinity".to_string(),
                ))
            }
        };
        let wire = EnvelopeJson {
            ephemeral_x: format_hex_integer(x),
            ephemeral_y: format_hex_integer(y),
            ciphertext: hex::encode(&self.ciphertext),
        };

        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
        wire.serialize(&mut serializer)
            .map_err(|e| PkeError::SerializationError(e.to_string()))?;
        String::from_utf8(out).map_err(|e| PkeError::SerializationError(e.to_string()))
    }

    /// Decode and validate an envelope.
    ///
    /// Invalid JSON, missing or non-string fields, malformed hex and an
    /// ephemeral point off the curve are all format errors.
    pub fn from_json(json: &str) -> Result<Self> {
        let wire: EnvelopeJson = serde_json::from_str(json)
            .map_err(|e| PkeError::InvalidCiphertextFormat(e.to_string().into()))?;

        let x = parse_hex_natural(&wire.ephemeral_x).ok_or_else(|| {
            PkeError::InvalidCiphertextFormat("ephemeral_x is not a hex integer".into())
        })?;
        let y = parse_hex_natural(&wire.ephemeral_y).ok_or_else(|| {
            PkeError::InvalidCiphertextFormat("ephemeral_y is not a hex integer".into())
        })?;
        let ephemeral = ec::Point::new_affine(x, y).map_err(|e| {
            PkeError::InvalidCiphertextFormat(format!("ephemeral key: {}", e).into())
        })?;

        let ciphertext = hex::decode(&wire.ciphertext).map_err(|e| {
            PkeError::InvalidCiphertextFormat(format!("ciphertext is not hex: {}", e).into())
        })?;

        Ok(Self {
            ephemeral,
            ciphertext,
        })
    }
}
