//! Protocol logic for committing a packet on its source channel end.

use crate::events::IBCEvent;
use crate::handler::{HandlerOutput, HandlerResult};
use crate::ics02_client::context::ConsensusStateReader;
use crate::ics03_connection::connection::State as ConnectionState;
use crate::ics04_channel::channel::{Counterparty, State};
use crate::ics04_channel::commitment::compute_packet_commitment;
use crate::ics04_channel::context::ChannelReader;
use crate::ics04_channel::error::{Error, Kind};
use crate::ics04_channel::events::SendPacket;
use crate::ics04_channel::handler::verify::{first_hop_connection, verify_channel_capability};
use crate::ics04_channel::handler::{PacketResult, SendPacketResult};
use crate::ics04_channel::msgs::send_packet::MsgSendPacket;

pub(crate) fn process<Ctx>(ctx: &Ctx, msg: MsgSendPacket) -> HandlerResult<PacketResult, Error>
where
    Ctx: ChannelReader + ConsensusStateReader,
{
    let mut output = HandlerOutput::builder();

    let packet = msg.packet;
    let port_channel_id = (packet.source_port.clone(), packet.source_channel.clone());

    let source_channel_end = ctx.channel_end(&port_channel_id)?.ok_or_else(|| {
        Kind::ChannelNotFound(packet.source_port.clone(), packet.source_channel.clone())
    })?;

    if source_channel_end.state_matches(&State::Closed) {
        return Err(Kind::ChannelClosed(packet.source_channel.clone()).into());
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

    let (connection_id, connection_end) = first_hop_connection(ctx, &source_channel_end)?;

    if connection_end.state_matches(&ConnectionState::Uninitialized) {
        return Err(Kind::ConnectionNotInitialized(connection_id).into());
    }

    let client_id = connection_end.client_id().clone();
    let latest_height = ctx
        .client_consensus_height(&client_id)
        .ok_or_else(|| Kind::MissingClientConsensusState(client_id.clone()))?;

    // The counterparty must still be able to receive the packet.
    if packet.timed_out(latest_height) {
        return Err(Kind::LowPacketHeight(latest_height, packet.timeout_height).into());
    }

    let next_seq_send = ctx.get_next_sequence_send(&port_channel_id)?.ok_or_else(|| {
        Kind::MissingNextSendSeq(packet.source_port.clone(), packet.source_channel.clone())
    })?;

    if packet.sequence != next_seq_send {
        return Err(Kind::InvalidPacketSequence(packet.sequence, next_seq_send).into());
    }

    let seq_number = next_seq_send.checked_increment().ok_or_else(|| {
        Kind::SequenceOverflow(packet.source_port.clone(), packet.source_channel.clone())
    })?;

    output.log("success: packet send");

    let result = PacketResult::Send(SendPacketResult {
        port_id: packet.source_port.clone(),
        channel_id: packet.source_channel.clone(),
        seq: packet.sequence,
        seq_number,
        commitment: compute_packet_commitment(&packet.data),
    });

    output.emit(IBCEvent::SendPacket(SendPacket {
        height: ctx.host_current_height(),
        packet,
    }));

    Ok(output.with_result(result))
}
