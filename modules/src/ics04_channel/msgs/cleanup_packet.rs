use crate::ics04_channel::channel::Order;
use crate::ics04_channel::error::{Error, Kind};
use crate::ics04_channel::packet::{Packet, Sequence};
use crate::ics05_port::capabilities::Capability;
use crate::ics23_commitment::commitment::CommitmentProof;
use crate::ics24_host::Path;
use crate::proofs::Proofs;
use crate::Height;

pub const TYPE_MSG_CLEANUP_PACKET: &str = "ics04/cleanup_packet";

/// Evidence that the destination chain has processed a packet. Which variant is valid depends
/// on the ordering of the channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CleanupProof {
    /// The destination's next receive sequence, which must be past the packet.
    OrderedReceipt(Sequence),
    /// The acknowledgement the destination wrote for the packet.
    UnorderedAck(Vec<u8>),
}

impl CleanupProof {
    /// The channel ordering this evidence applies to.
    pub fn ordering(&self) -> Order {
        match self {
            CleanupProof::OrderedReceipt(_) => Order::Ordered,
            CleanupProof::UnorderedAck(_) => Order::Unordered,
        }
    }

    /// The key/value pair the counterparty state must contain for `packet` to be cleaned up.
    pub fn counterparty_claim(&self, packet: &Packet) -> (Path, Vec<u8>) {
        match self {
            CleanupProof::OrderedReceipt(next_seq_recv) => (
                Path::SeqRecvs(
                    packet.destination_port.clone(),
                    packet.destination_channel.clone(),
                ),
                next_seq_recv.to_be_bytes().to_vec(),
            ),
            CleanupProof::UnorderedAck(ack) => (
                Path::Acks(
                    packet.source_port.clone(),
                    packet.source_channel.clone(),
                    packet.sequence,
                ),
                ack.clone(),
            ),
        }
    }
}

///
/// Message definition for the packet cleanup datagram.
///
#[derive(Clone, Debug, PartialEq)]
pub struct MsgCleanupPacket {
    pub packet: Packet,
    pub proofs: Proofs,
    pub cleanup_proof: CleanupProof,
    pub capability: Capability,
}

impl MsgCleanupPacket {
    pub fn new(
        packet: Packet,
        proof: CommitmentProof,
        proof_height: Height,
        cleanup_proof: CleanupProof,
        capability: Capability,
    ) -> Result<MsgCleanupPacket, Error> {
        packet
            .validate_basic()
            .map_err(|e| Kind::InvalidPacket.context(e))?;

        Ok(Self {
            packet,
            proofs: Proofs::new(proof, proof_height).map_err(|e| Kind::InvalidProof.context(e))?,
            cleanup_proof,
            capability,
        })
    }
}
