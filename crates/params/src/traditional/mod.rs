//! Constants for traditional (elliptic-curve) algorithms

pub mod ecies;
pub mod secp256k1;
