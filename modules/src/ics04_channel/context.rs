//! ICS4 (channel) context. The two traits `ChannelReader` and `ChannelKeeper` define
//! the interface that any host chain must implement to be able to process any `PacketMsg`.
//!
use tracing::debug;

use crate::ics02_client::context::ConsensusStateReader;
use crate::ics03_connection::connection::ConnectionEnd;
use crate::ics04_channel::channel::ChannelEnd;
use crate::ics04_channel::commitment::PacketCommitment;
use crate::ics04_channel::error::Error;
use crate::ics04_channel::handler::PacketResult;
use crate::ics04_channel::packet::Sequence;
use crate::ics05_port::capabilities::Capability;
use crate::ics23_commitment::verifier::ProofVerifier;
use crate::ics24_host::identifier::{ChannelId, ConnectionId, PortId};
use crate::Height;

/// A context supplying all the necessary read-only dependencies for processing any `PacketMsg`.
///
/// Lookups return `Ok(None)` when nothing is stored under the key; an `Err` means the stored
/// record exists but could not be decoded.
pub trait ChannelReader {
    /// Returns the ChannelEnd for the given `port_id` and `chan_id`.
    fn channel_end(&self, port_channel_id: &(PortId, ChannelId))
        -> Result<Option<ChannelEnd>, Error>;

    /// Returns the ConnectionEnd for the given identifier `conn_id`.
    fn connection_end(&self, conn_id: &ConnectionId) -> Result<Option<ConnectionEnd>, Error>;

    /// Returns the capability bound to the channel end when it was opened.
    fn channel_capability(
        &self,
        port_channel_id: &(PortId, ChannelId),
    ) -> Result<Option<Capability>, Error>;

    fn get_next_sequence_send(
        &self,
        port_channel_id: &(PortId, ChannelId),
    ) -> Result<Option<Sequence>, Error>;

    fn get_next_sequence_recv(
        &self,
        port_channel_id: &(PortId, ChannelId),
    ) -> Result<Option<Sequence>, Error>;

    fn get_packet_commitment(
        &self,
        key: &(PortId, ChannelId, Sequence),
    ) -> Result<Option<PacketCommitment>, Error>;

    fn get_packet_acknowledgement(
        &self,
        key: &(PortId, ChannelId, Sequence),
    ) -> Result<Option<Vec<u8>>, Error>;

    /// Returns the current height of the local chain.
    fn host_current_height(&self) -> Height;
}

/// A context supplying all the necessary write-only dependencies (i.e., storage writing facility)
/// for processing any `PacketMsg`.
pub trait ChannelKeeper {
    fn store_packet_result(&mut self, general_result: PacketResult) -> Result<(), Error> {
        match general_result {
            PacketResult::Send(res) => {
                self.store_next_sequence_send(
                    &(res.port_id.clone(), res.channel_id.clone()),
                    res.seq_number,
                )?;

                self.store_packet_commitment(
                    &(res.port_id.clone(), res.channel_id.clone(), res.seq),
                    res.commitment,
                )?;

                debug!(
                    port_id = %res.port_id,
                    channel_id = %res.channel_id,
                    sequence = %res.seq,
                    "stored packet commitment"
                );
            }
            PacketResult::Recv(res) => {
                if let Some(ack) = res.ack {
                    self.store_packet_acknowledgement(
                        &(res.port_id.clone(), res.channel_id.clone(), res.seq),
                        ack,
                    )?;
                }

                if let Some(next_seq_recv) = res.next_seq_recv {
                    self.store_next_sequence_recv(
                        &(res.port_id.clone(), res.channel_id.clone()),
                        next_seq_recv,
                    )?;
                }

                debug!(
                    port_id = %res.port_id,
                    channel_id = %res.channel_id,
                    sequence = %res.seq,
                    "stored received packet"
                );
            }
            PacketResult::Cleanup(res) => {
                self.delete_packet_commitment(&(
                    res.port_id.clone(),
                    res.channel_id.clone(),
                    res.seq,
                ))?;

                debug!(
                    port_id = %res.port_id,
                    channel_id = %res.channel_id,
                    sequence = %res.seq,
                    "deleted packet commitment"
                );
            }
        }
        Ok(())
    }

    fn store_next_sequence_send(
        &mut self,
        port_channel_id: &(PortId, ChannelId),
        seq: Sequence,
    ) -> Result<(), Error>;

    fn store_next_sequence_recv(
        &mut self,
        port_channel_id: &(PortId, ChannelId),
        seq: Sequence,
    ) -> Result<(), Error>;

    fn store_packet_commitment(
        &mut self,
        key: &(PortId, ChannelId, Sequence),
        commitment: PacketCommitment,
    ) -> Result<(), Error>;

    fn delete_packet_commitment(&mut self, key: &(PortId, ChannelId, Sequence))
        -> Result<(), Error>;

    fn store_packet_acknowledgement(
        &mut self,
        key: &(PortId, ChannelId, Sequence),
        ack: Vec<u8>,
    ) -> Result<(), Error>;
}

/// Everything the packet handlers need from a host: its channel store, the consensus heights
/// tracked by its light clients and a membership proof verifier.
pub trait PacketContext:
    ChannelReader + ChannelKeeper + ConsensusStateReader + ProofVerifier
{
}

impl<T> PacketContext for T where
    T: ChannelReader + ChannelKeeper + ConsensusStateReader + ProofVerifier
{
}
