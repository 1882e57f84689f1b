//! ICS 02: Client. The packet core only needs the height of the latest consensus state a
//! client tracks for the counterparty chain.

pub mod context;
pub mod height;
