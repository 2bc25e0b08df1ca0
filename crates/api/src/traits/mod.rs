//! Trait definitions for the kcrypt ecosystem

pub mod pke;

pub use pke::Pke;
