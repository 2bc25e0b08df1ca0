//! Security primitives for handling sensitive material
//!
//! Secrets derived during key agreement are held in fixed-size buffers that
//! are wiped on drop and never printed.

pub mod secret;

pub use secret::SecretBuffer;
