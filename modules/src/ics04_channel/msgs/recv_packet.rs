use crate::ics04_channel::error::{Error, Kind};
use crate::ics04_channel::packet::Packet;
use crate::ics05_port::capabilities::Capability;
use crate::ics23_commitment::commitment::CommitmentProof;
use crate::proofs::Proofs;
use crate::Height;

pub const TYPE_MSG_RECV_PACKET: &str = "ics04/recv_packet";

///
/// Message definition for the "packet receiving" datagram.
///
#[derive(Clone, Debug, PartialEq)]
pub struct MsgRecvPacket {
    pub packet: Packet,
    pub proofs: Proofs,
    /// Application acknowledgement, possibly empty.
    pub acknowledgement: Vec<u8>,
    pub capability: Capability,
}

impl MsgRecvPacket {
    pub fn new(
        packet: Packet,
        proof: CommitmentProof,
        proof_height: Height,
        acknowledgement: Vec<u8>,
        capability: Capability,
    ) -> Result<MsgRecvPacket, Error> {
        packet
            .validate_basic()
            .map_err(|e| Kind::InvalidPacket.context(e))?;

        Ok(Self {
            packet,
            proofs: Proofs::new(proof, proof_height).map_err(|e| Kind::InvalidProof.context(e))?,
            acknowledgement,
            capability,
        })
    }
}
