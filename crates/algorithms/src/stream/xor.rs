//! Repeating-key XOR keystream
//!
//! Byte `i` of the stream is `key[i mod key.len()]`. With the 32-byte ECIES
//! key this repeats every 32 bytes of message.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::StreamCipher;
use crate::error::{validate, Result};

/// XOR stream that cycles over a fixed key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RepeatingKeyXor {
    key: Vec<u8>,
    position: usize,
}

impl RepeatingKeyXor {
    /// Create a keystream over `key`. An empty key is rejected.
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::parameter(!key.is_empty(), "xor key", "key must not be empty")?;
        Ok(Self {
            key: key.to_vec(),
            position: 0,
        })
    }

    /// Length of the repeating key
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    #[inline]
    fn next_byte(&mut self) -> u8 {
        let b = self.key[self.position];
        self.position = (self.position + 1) % self.key.len();
        b
    }
}

impl StreamCipher for RepeatingKeyXor {
    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            *byte ^= self.next_byte();
        }
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        for byte in output.iter_mut() {
            *byte = self.next_byte();
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        // key length fits in u64 on every supported target
        self.position = (position % self.key.len() as u64) as usize;
        Ok(())
    }
}

impl core::fmt::Debug for RepeatingKeyXor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RepeatingKeyXor")
            .field("key_len", &self.key.len())
            .field("position", &self.position)
            .finish()
    }
}

/// XOR `data` with `key` repeated: `out[i] = data[i] ^ key[i mod key.len()]`.
///
/// Applying it twice with the same key returns the input.
pub fn apply_keystream(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let mut out = data.to_vec();
    RepeatingKeyXor::new(key)?.process(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keystream_cycles_key() {
        let out = apply_keystream(&[0u8; 5], &[1, 2]).unwrap();
        assert_eq!(out, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_apply_keystream_is_self_inverse() {
        let key = [0x5au8; 32];
        let data = b"the quick brown fox jumps over the lazy dog, twice over";
        let ct = apply_keystream(data, &key).unwrap();
        assert_ne!(&ct[..], &data[..]);
        assert_eq!(apply_keystream(&ct, &key).unwrap(), data.to_vec());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(apply_keystream(&[], &[7]).unwrap().is_empty());
        let err = apply_keystream(b"abc", &[]).unwrap_err();
        assert!(matches!(err, crate::Error::Parameter { .. }), "{err:?}");
    }

    #[test]
    fn test_incremental_processing_matches_one_shot() {
        let key: Vec<u8> = (0u8..32).collect();
        let data: Vec<u8> = (0u8..100).map(|i| i.wrapping_mul(37)).collect();
        let expected = apply_keystream(&data, &key).unwrap();

        let mut cipher = RepeatingKeyXor::new(&key).unwrap();
        let mut buf = data.clone();
        let (head, tail) = buf.split_at_mut(45);
        cipher.encrypt(head).unwrap();
        cipher.encrypt(tail).unwrap();
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_seek_and_reset() {
        let key = [9u8, 8, 7];
        let mut cipher = RepeatingKeyXor::new(&key).unwrap();

        let mut ks = [0u8; 4];
        cipher.seek(4).unwrap();
        cipher.keystream(&mut ks).unwrap();
        assert_eq!(ks, [8, 7, 9, 8]);

        cipher.reset().unwrap();
        cipher.keystream(&mut ks).unwrap();
        assert_eq!(ks, [9, 8, 7, 9]);
    }

    #[test]
    fn test_debug_hides_key() {
        let cipher = RepeatingKeyXor::new(&[0xAB; 4]).unwrap();
        let printed = format!("{:?}", cipher);
        assert!(printed.contains("key_len: 4"));
        assert!(!printed.contains("171"));
    }
}
