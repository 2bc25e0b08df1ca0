//! Hash functions
//!
//! SHA-256 backs the ECIES key derivation. The digest itself comes from the
//! `sha2` crate; this module fixes the output type to a plain array.

use sha2::{Digest, Sha256};
use tracing::instrument;

use kcrypt_params::utils::hash::SHA256_OUTPUT_SIZE;

/// SHA-256 digest of `data`
#[instrument(level = "debug", skip(data), fields(data_len = data.len()))]
pub fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
