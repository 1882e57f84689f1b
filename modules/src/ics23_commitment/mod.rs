//! ICS 23: Vector Commitment Scheme. Proof bytes and the membership verification boundary.

pub mod commitment;
pub mod verifier;
