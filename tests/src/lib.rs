//! Shared fixtures for the kcrypt integration and property tests
pub mod vectors;
