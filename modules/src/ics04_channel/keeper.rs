//! Entry points for the application modules that own channel ends. Each call validates the
//! message, runs the handler and applies its result; a failed call leaves the store untouched.
//!
//! These calls return only the outcome. A host that relays events or logs to its users submits
//! the message through [`deliver`] instead, which applies the same result and returns the
//! [`HandlerOutput`](crate::handler::HandlerOutput) carrying them.

use tracing::trace;

use crate::ics04_channel::context::PacketContext;
use crate::ics04_channel::error::Error;
use crate::ics04_channel::handler::deliver;
use crate::ics04_channel::msgs::cleanup_packet::{CleanupProof, MsgCleanupPacket};
use crate::ics04_channel::msgs::recv_packet::MsgRecvPacket;
use crate::ics04_channel::msgs::send_packet::MsgSendPacket;
use crate::ics04_channel::msgs::PacketMsg;
use crate::ics04_channel::packet::Packet;
use crate::ics05_port::capabilities::Capability;
use crate::ics23_commitment::commitment::CommitmentProof;
use crate::Height;

/// Commits `packet` on its source channel end and advances the next send sequence.
pub fn send_packet<Ctx>(ctx: &mut Ctx, capability: &Capability, packet: Packet) -> Result<(), Error>
where
    Ctx: PacketContext,
{
    trace!(%packet, "send packet");

    let msg = MsgSendPacket::new(packet, capability.clone())?;
    deliver(ctx, PacketMsg::SendPacket(msg))?;

    Ok(())
}

/// Accepts `packet` once `proof` shows the sending chain committed it at `proof_height`.
/// `acknowledgement` may be empty.
pub fn recv_packet<Ctx>(
    ctx: &mut Ctx,
    capability: &Capability,
    packet: Packet,
    proof: CommitmentProof,
    proof_height: Height,
    acknowledgement: Vec<u8>,
) -> Result<Packet, Error>
where
    Ctx: PacketContext,
{
    trace!(%packet, %proof_height, "receive packet");

    let msg = MsgRecvPacket::new(
        packet.clone(),
        proof,
        proof_height,
        acknowledgement,
        capability.clone(),
    )?;
    deliver(ctx, PacketMsg::RecvPacket(msg))?;

    Ok(packet)
}

/// Erases the commitment of `packet` once `cleanup_proof` shows the counterparty processed it.
pub fn cleanup_packet<Ctx>(
    ctx: &mut Ctx,
    capability: &Capability,
    packet: Packet,
    proof: CommitmentProof,
    proof_height: Height,
    cleanup_proof: CleanupProof,
) -> Result<Packet, Error>
where
    Ctx: PacketContext,
{
    trace!(%packet, %proof_height, "cleanup packet");

    let msg = MsgCleanupPacket::new(
        packet.clone(),
        proof,
        proof_height,
        cleanup_proof,
        capability.clone(),
    )?;
    deliver(ctx, PacketMsg::CleanupPacket(msg))?;

    Ok(packet)
}
