//! This module implements the processing logic for ICS4 packet messages.

use tracing::debug;

use crate::handler::HandlerOutput;
use crate::ics02_client::context::ConsensusStateReader;
use crate::ics04_channel::commitment::PacketCommitment;
use crate::ics04_channel::context::{ChannelReader, PacketContext};
use crate::ics04_channel::error::Error;
use crate::ics04_channel::msgs::PacketMsg;
use crate::ics04_channel::packet::Sequence;
use crate::ics23_commitment::verifier::ProofVerifier;
use crate::ics24_host::identifier::{ChannelId, PortId};

pub mod cleanup_packet;
pub mod recv_packet;
pub mod send_packet;
pub mod verify;

/// The state transition computed by a packet handler. Nothing is written until the keeper
/// applies it through `ChannelKeeper::store_packet_result`.
#[derive(Clone, Debug, PartialEq)]
pub enum PacketResult {
    Send(SendPacketResult),
    Recv(RecvPacketResult),
    Cleanup(CleanupPacketResult),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SendPacketResult {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub seq: Sequence,
    /// The next send sequence after this packet.
    pub seq_number: Sequence,
    pub commitment: PacketCommitment,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecvPacketResult {
    /// Port and channel of the receiving channel end.
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub seq: Sequence,
    pub ack: Option<Vec<u8>>,
    /// Only set on ordered channels.
    pub next_seq_recv: Option<Sequence>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CleanupPacketResult {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub seq: Sequence,
}

/// General entry point for processing any packet message. Reads the context only.
pub fn dispatch<Ctx>(ctx: &Ctx, msg: PacketMsg) -> Result<HandlerOutput<PacketResult>, Error>
where
    Ctx: ChannelReader + ConsensusStateReader + ProofVerifier,
{
    match msg {
        PacketMsg::SendPacket(msg) => send_packet::process(ctx, msg),
        PacketMsg::RecvPacket(msg) => recv_packet::process(ctx, msg),
        PacketMsg::CleanupPacket(msg) => cleanup_packet::process(ctx, msg),
    }
}

/// Processes `msg` and, if every check passed, applies the resulting state transition. The
/// returned output holds the events and log lines of the message.
pub fn deliver<Ctx>(ctx: &mut Ctx, msg: PacketMsg) -> Result<HandlerOutput<PacketResult>, Error>
where
    Ctx: PacketContext,
{
    let type_url = msg.type_url();
    let output = dispatch(&*ctx, msg)?;

    ctx.store_packet_result(output.result.clone())?;

    debug!(
        msg = type_url,
        events = output.events.len(),
        "delivered packet message"
    );

    Ok(output)
}
