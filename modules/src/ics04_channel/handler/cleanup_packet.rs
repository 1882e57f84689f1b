//! Protocol logic for erasing the commitment of a packet the counterparty has processed.

use crate::events::IBCEvent;
use crate::handler::{HandlerOutput, HandlerResult};
use crate::ics04_channel::channel::{Counterparty, State};
use crate::ics04_channel::commitment::commitment_matches;
use crate::ics04_channel::context::ChannelReader;
use crate::ics04_channel::error::{Error, Kind};
use crate::ics04_channel::events::CleanupPacket;
use crate::ics04_channel::handler::verify::{
    first_hop_connection, verify_channel_capability, verify_cleanup_proofs,
};
use crate::ics04_channel::handler::{CleanupPacketResult, PacketResult};
use crate::ics04_channel::msgs::cleanup_packet::{CleanupProof, MsgCleanupPacket};
use crate::ics23_commitment::verifier::ProofVerifier;

pub(crate) fn process<Ctx>(ctx: &Ctx, msg: MsgCleanupPacket) -> HandlerResult<PacketResult, Error>
where
    Ctx: ChannelReader + ProofVerifier,
{
    let mut output = HandlerOutput::builder();

    let packet = msg.packet;
    let port_channel_id = (packet.source_port.clone(), packet.source_channel.clone());

    let source_channel_end = ctx.channel_end(&port_channel_id)?.ok_or_else(|| {
        Kind::ChannelNotFound(packet.source_port.clone(), packet.source_channel.clone())
    })?;

    if !source_channel_end.state_matches(&State::Open) {
        return Err(Kind::InvalidChannelState(
            packet.source_channel.clone(),
            *source_channel_end.state(),
        )
        .into());
    }

    verify_channel_capability(
        ctx,
        &packet.source_port,
        &packet.source_channel,
        &msg.capability,
    )?;

    let counterparty = Counterparty::new(
        packet.destination_port.clone(),
        packet.destination_channel.clone(),
    );

    if !source_channel_end.counterparty_matches(&counterparty) {
        return Err(Kind::InvalidPacketCounterparty(
            packet.destination_port.clone(),
            packet.destination_channel.clone(),
        )
        .into());
    }

    let (_, connection_end) = first_hop_connection(ctx, &source_channel_end)?;

    let ordering = *source_channel_end.ordering();
    if msg.cleanup_proof.ordering() != ordering {
        return Err(Kind::InvalidCleanupProof(ordering).into());
    }

    if let CleanupProof::OrderedReceipt(next_seq_recv) = &msg.cleanup_proof {
        if *next_seq_recv <= packet.sequence {
            return Err(Kind::PacketNotYetReceived(packet.sequence, *next_seq_recv).into());
        }
    }

    let commitment = ctx
        .get_packet_commitment(&(
            packet.source_port.clone(),
            packet.source_channel.clone(),
            packet.sequence,
        ))?
        .ok_or(Kind::PacketCommitmentNotFound(packet.sequence))?;

    if !commitment_matches(&commitment, &packet.data) {
        return Err(Kind::PacketCommitmentMismatch(packet.sequence).into());
    }

    verify_cleanup_proofs(
        ctx,
        &connection_end,
        &packet,
        &msg.proofs,
        &msg.cleanup_proof,
    )?;

    output.log("success: packet cleanup");

    let result = PacketResult::Cleanup(CleanupPacketResult {
        port_id: packet.source_port.clone(),
        channel_id: packet.source_channel.clone(),
        seq: packet.sequence,
    });

    output.emit(IBCEvent::CleanupPacket(CleanupPacket {
        height: ctx.host_current_height(),
        packet,
    }));

    Ok(output.with_result(result))
}
