//! Test doubles for a host chain: a context backed by an in-memory store and a proof verifier
//! that checks claims against snapshots of the counterparty's store.

pub mod context;
pub mod verifier;
