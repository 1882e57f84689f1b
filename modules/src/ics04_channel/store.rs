//! Typed access to the records the packet handlers read and write, laid over any [`Store`].
//!
//! Channel and connection ends are JSON encoded. Sequence counters and capabilities are stored as
//! 8-byte big-endian integers, which is also the value a counterparty proves for its next
//! receive sequence. Commitments and acknowledgements are stored as raw bytes.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ics03_connection::connection::ConnectionEnd;
use crate::ics04_channel::channel::ChannelEnd;
use crate::ics04_channel::commitment::PacketCommitment;
use crate::ics04_channel::error::{Error, Kind};
use crate::ics04_channel::packet::Sequence;
use crate::ics05_port::capabilities::Capability;
use crate::ics24_host::identifier::{ChannelId, ConnectionId, PortId};
use crate::ics24_host::store::Store;
use crate::ics24_host::Path;

#[derive(Clone, Debug, Default)]
pub struct ChannelStore<S> {
    store: S,
}

impl<S: Store> ChannelStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value store, e.g. to take a snapshot of it.
    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn get_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, Error> {
        match self.store.get(path) {
            None => Ok(None),
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| Kind::StoreCodec(path.to_string()).context(e).into()),
        }
    }

    fn set_json<T: Serialize>(&mut self, path: &Path, value: &T) -> Result<(), Error> {
        let bytes =
            serde_json::to_vec(value).map_err(|e| Kind::StoreCodec(path.to_string()).context(e))?;
        self.store.set(path, bytes);
        Ok(())
    }

    fn get_sequence(&self, path: &Path) -> Result<Option<Sequence>, Error> {
        match self.store.get(path) {
            None => Ok(None),
            Some(bytes) => Sequence::from_be_bytes(&bytes)
                .map(Some)
                .ok_or_else(|| Kind::StoreCodec(path.to_string()).into()),
        }
    }

    pub fn channel_end(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<ChannelEnd>, Error> {
        self.get_json(&Path::ChannelEnds(port_id.clone(), channel_id.clone()))
    }

    pub fn set_channel_end(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        channel_end: &ChannelEnd,
    ) -> Result<(), Error> {
        self.set_json(
            &Path::ChannelEnds(port_id.clone(), channel_id.clone()),
            channel_end,
        )
    }

    pub fn connection_end(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<ConnectionEnd>, Error> {
        self.get_json(&Path::Connections(connection_id.clone()))
    }

    pub fn set_connection_end(
        &mut self,
        connection_id: &ConnectionId,
        connection_end: &ConnectionEnd,
    ) -> Result<(), Error> {
        self.set_json(&Path::Connections(connection_id.clone()), connection_end)
    }

    pub fn channel_capability(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<Capability>, Error> {
        let path = Path::ChannelCapabilities(port_id.clone(), channel_id.clone());
        match self.store.get(&path) {
            None => Ok(None),
            Some(bytes) => Capability::from_be_bytes(&bytes)
                .map(Some)
                .ok_or_else(|| Kind::StoreCodec(path.to_string()).into()),
        }
    }

    /// Binds `capability` to the channel end, replacing any previous binding.
    pub fn bind_channel_capability(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        capability: &Capability,
    ) {
        self.store.set(
            &Path::ChannelCapabilities(port_id.clone(), channel_id.clone()),
            capability.to_be_bytes().to_vec(),
        );
    }

    pub fn next_sequence_send(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<Sequence>, Error> {
        self.get_sequence(&Path::SeqSends(port_id.clone(), channel_id.clone()))
    }

    pub fn set_next_sequence_send(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        seq: Sequence,
    ) {
        self.store.set(
            &Path::SeqSends(port_id.clone(), channel_id.clone()),
            seq.to_be_bytes().to_vec(),
        );
    }

    pub fn next_sequence_recv(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<Option<Sequence>, Error> {
        self.get_sequence(&Path::SeqRecvs(port_id.clone(), channel_id.clone()))
    }

    pub fn set_next_sequence_recv(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        seq: Sequence,
    ) {
        self.store.set(
            &Path::SeqRecvs(port_id.clone(), channel_id.clone()),
            seq.to_be_bytes().to_vec(),
        );
    }

    pub fn packet_commitment(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
        seq: Sequence,
    ) -> Option<PacketCommitment> {
        self.store
            .get(&Path::Commitments(port_id.clone(), channel_id.clone(), seq))
            .map(PacketCommitment::from)
    }

    pub fn set_packet_commitment(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        seq: Sequence,
        commitment: PacketCommitment,
    ) {
        self.store.set(
            &Path::Commitments(port_id.clone(), channel_id.clone(), seq),
            commitment.into_vec(),
        );
    }

    pub fn delete_packet_commitment(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        seq: Sequence,
    ) {
        self.store
            .delete(&Path::Commitments(port_id.clone(), channel_id.clone(), seq));
    }

    pub fn packet_acknowledgement(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
        seq: Sequence,
    ) -> Option<Vec<u8>> {
        self.store
            .get(&Path::Acks(port_id.clone(), channel_id.clone(), seq))
    }

    pub fn set_packet_acknowledgement(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        seq: Sequence,
        ack: Vec<u8>,
    ) {
        self.store
            .set(&Path::Acks(port_id.clone(), channel_id.clone(), seq), ack);
    }
}
