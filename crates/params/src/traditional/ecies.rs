//! Constants for the secp256k1 ECIES text scheme and its wire format

/// Prefix written in front of every hex-encoded integer
pub const HEX_INTEGER_PREFIX: &str = "0x";

/// Separator between the x and y coordinates of an encoded public key
pub const PUBLIC_KEY_DELIMITER: char = ':';

/// Envelope field holding the ephemeral public key's x-coordinate
pub const ENVELOPE_EPHEMERAL_X: &str = "ephemeral_x";

/// Envelope field holding the ephemeral public key's y-coordinate
pub const ENVELOPE_EPHEMERAL_Y: &str = "ephemeral_y";

/// Envelope field holding the hex-encoded ciphertext bytes
pub const ENVELOPE_CIPHERTEXT: &str = "ciphertext";
