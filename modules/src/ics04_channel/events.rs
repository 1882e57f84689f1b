//! Types for the IBC events emitted by the packet handlers.

use serde_derive::{Deserialize, Serialize};

use crate::ics04_channel::packet::Packet;
use crate::Height;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendPacket {
    pub height: Height,
    pub packet: Packet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivePacket {
    pub height: Height,
    pub packet: Packet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAcknowledgement {
    pub height: Height,
    pub packet: Packet,
    pub ack: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupPacket {
    pub height: Height,
    pub packet: Packet,
}
