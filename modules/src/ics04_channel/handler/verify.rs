use crate::ics03_connection::connection::ConnectionEnd;
use crate::ics04_channel::channel::ChannelEnd;
use crate::ics04_channel::commitment::compute_packet_commitment;
use crate::ics04_channel::context::ChannelReader;
use crate::ics04_channel::error::{Error, Kind};
use crate::ics04_channel::msgs::cleanup_packet::CleanupProof;
use crate::ics04_channel::packet::Packet;
use crate::ics05_port::capabilities::Capability;
use crate::ics23_commitment::verifier::ProofVerifier;
use crate::ics24_host::identifier::{ChannelId, ConnectionId, PortId};
use crate::ics24_host::Path;
use crate::proofs::Proofs;

/// Checks that `presented` is the capability bound to the channel end when it was opened.
pub(crate) fn verify_channel_capability(
    ctx: &dyn ChannelReader,
    port_id: &PortId,
    channel_id: &ChannelId,
    presented: &Capability,
) -> Result<(), Error> {
    let port_channel_id = (port_id.clone(), channel_id.clone());
    let bound = ctx
        .channel_capability(&port_channel_id)?
        .ok_or_else(|| Kind::NoChannelCapability(port_id.clone(), channel_id.clone()))?;

    if bound != *presented {
        return Err(Kind::InvalidChannelCapability(port_id.clone(), channel_id.clone()).into());
    }

    Ok(())
}

/// Resolves the connection the channel end runs over. Only the first hop is used.
pub(crate) fn first_hop_connection(
    ctx: &dyn ChannelReader,
    channel_end: &ChannelEnd,
) -> Result<(ConnectionId, ConnectionEnd), Error> {
    let connection_id = channel_end
        .connection_hops()
        .first()
        .cloned()
        .ok_or(Kind::InvalidConnectionHopsLength(1, 0))?;

    let connection_end = ctx
        .connection_end(&connection_id)?
        .ok_or_else(|| Kind::MissingConnection(connection_id.clone()))?;

    Ok((connection_id, connection_end))
}

/// Verifies that the sending chain committed `packet`: its channel path maps to the packet data.
pub(crate) fn verify_packet_recv_proofs(
    verifier: &dyn ProofVerifier,
    connection_end: &ConnectionEnd,
    packet: &Packet,
    proofs: &Proofs,
) -> Result<(), Error> {
    let path = Path::ChannelEnds(packet.source_port.clone(), packet.source_channel.clone());
    let commitment = compute_packet_commitment(&packet.data);

    if !verifier.verify_membership(
        connection_end,
        proofs.height(),
        proofs.object_proof(),
        &path,
        commitment.as_bytes(),
    ) {
        return Err(Kind::PacketVerificationFailed(packet.sequence).into());
    }

    Ok(())
}

/// Verifies the evidence that the receiving chain processed `packet`.
pub(crate) fn verify_cleanup_proofs(
    verifier: &dyn ProofVerifier,
    connection_end: &ConnectionEnd,
    packet: &Packet,
    proofs: &Proofs,
    cleanup_proof: &CleanupProof,
) -> Result<(), Error> {
    let (path, value) = cleanup_proof.counterparty_claim(packet);

    if !verifier.verify_membership(
        connection_end,
        proofs.height(),
        proofs.object_proof(),
        &path,
        &value,
    ) {
        return Err(Kind::PacketVerificationFailed(packet.sequence).into());
    }

    Ok(())
}
