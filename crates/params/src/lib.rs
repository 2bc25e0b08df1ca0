//! Constant values for kcrypt cryptographic operations
//!
//! Everything that parameterizes the library lives here as a compile-time
//! constant: curve domain parameters, encoded sizes and wire-format names.

#![no_std]

pub mod traditional;
pub mod utils;
