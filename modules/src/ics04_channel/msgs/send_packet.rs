use crate::ics04_channel::error::{Error, Kind};
use crate::ics04_channel::packet::Packet;
use crate::ics05_port::capabilities::Capability;

pub const TYPE_MSG_SEND_PACKET: &str = "ics04/send_packet";

/// Request of the module owning the source channel end to commit `packet` for relay.
#[derive(Clone, Debug, PartialEq)]
pub struct MsgSendPacket {
    pub packet: Packet,
    pub capability: Capability,
}

impl MsgSendPacket {
    pub fn new(packet: Packet, capability: Capability) -> Result<MsgSendPacket, Error> {
        packet
            .validate_basic()
            .map_err(|e| Kind::InvalidPacket.context(e))?;

        Ok(Self { packet, capability })
    }
}
