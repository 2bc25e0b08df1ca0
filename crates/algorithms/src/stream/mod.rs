//! Stream ciphers
//!
//! The only keystream here is the repeating-key XOR used by the ECIES
//! envelope. It has no nonce and no authentication: the same key always
//! yields the same keystream, and flipped ciphertext bits flip the
//! corresponding plaintext bits.

pub mod xor;

pub use xor::{apply_keystream, RepeatingKeyXor};

use crate::error::Result;

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Reset the cipher to its initial state
    fn reset(&mut self) -> Result<()>;

    /// Seek to a byte position in the keystream
    fn seek(&mut self, position: u64) -> Result<()>;
}
