//! Message definitions for the packet lifecycle of ICS4.

use crate::ics04_channel::msgs::cleanup_packet::MsgCleanupPacket;
use crate::ics04_channel::msgs::recv_packet::MsgRecvPacket;
use crate::ics04_channel::msgs::send_packet::MsgSendPacket;

// Packet specific messages.
pub mod cleanup_packet;
pub mod recv_packet;
pub mod send_packet;

/// Enumeration of all possible messages that the ICS4 packet handlers can process.
#[derive(Clone, Debug, PartialEq)]
pub enum PacketMsg {
    SendPacket(MsgSendPacket),
    RecvPacket(MsgRecvPacket),
    CleanupPacket(MsgCleanupPacket),
}

impl PacketMsg {
    pub fn type_url(&self) -> &'static str {
        match self {
            PacketMsg::SendPacket(_) => send_packet::TYPE_MSG_SEND_PACKET,
            PacketMsg::RecvPacket(_) => recv_packet::TYPE_MSG_RECV_PACKET,
            PacketMsg::CleanupPacket(_) => cleanup_packet::TYPE_MSG_CLEANUP_PACKET,
        }
    }
}
