#![allow(clippy::large_enum_variant)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Implementation of the packet lifecycle of the following ICS modules:
//!
//! - ICS 02: Client (consensus height lookup only)
//! - ICS 03: Connection (connection ends, read-only)
//! - ICS 04: Channel (send, receive and cleanup of packets)
//! - ICS 05: Port (channel capabilities)
//! - ICS 23: Vector Commitment Scheme (membership proof boundary)
//! - ICS 24: Host Requirements (identifiers, paths, key-value store)

pub mod events;
pub mod handler;
pub mod ics02_client;
pub mod ics03_connection;
pub mod ics04_channel;
pub mod ics05_port;
pub mod ics23_commitment;
pub mod ics24_host;
pub mod proofs;

/// Re-export of ICS 002 Height domain type
pub type Height = ics02_client::height::Height;

#[cfg(any(test, feature = "mocks"))]
pub mod mock; // Context mock and counterparty proof verifier: for testing all handlers.
