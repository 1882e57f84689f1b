//! ICS 04: Channel. Packet lifecycle over an open channel end: send, receive and cleanup.

pub mod channel;
pub mod commitment;
pub mod context;
pub mod error;
pub mod events;
pub mod handler;
pub mod keeper;
pub mod msgs;
pub mod packet;
pub mod store;
