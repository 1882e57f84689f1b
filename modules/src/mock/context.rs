//! Implementation of a host context mock. Used in testing the packet handlers and the keeper.

use std::collections::HashMap;

use crate::ics02_client::context::ConsensusStateReader;
use crate::ics03_connection::connection::ConnectionEnd;
use crate::ics04_channel::channel::ChannelEnd;
use crate::ics04_channel::commitment::PacketCommitment;
use crate::ics04_channel::context::{ChannelKeeper, ChannelReader};
use crate::ics04_channel::error::Error;
use crate::ics04_channel::packet::Sequence;
use crate::ics04_channel::store::ChannelStore;
use crate::ics05_port::capabilities::Capability;
use crate::ics23_commitment::commitment::CommitmentProof;
use crate::ics23_commitment::verifier::ProofVerifier;
use crate::ics24_host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
use crate::ics24_host::store::MemoryStore;
use crate::ics24_host::Path;
use crate::mock::verifier::MockProofVerifier;
use crate::Height;

/// A context implementing the dependencies necessary for testing the packet handlers.
#[derive(Clone, Debug)]
pub struct MockContext {
    /// Current height of the host chain.
    host_height: Height,

    /// All channel, connection, capability, counter, commitment and ack records.
    store: ChannelStore<MemoryStore>,

    /// Latest consensus height tracked by each client hosted on this chain.
    consensus_heights: HashMap<ClientId, Height>,

    /// The counterparty states this chain can verify proofs against.
    counterparty: MockProofVerifier,
}

/// Returns a MockContext with bare minimum initialization: no channels, no connections and no
/// clients are present, and the chain is at height 5.
impl Default for MockContext {
    fn default() -> Self {
        Self::new(Height::new(5))
    }
}

/// Implementation of internal interface for use in testing. The methods in this interface should
/// _not_ be accessible to any ICS handler.
impl MockContext {
    pub fn new(host_height: Height) -> Self {
        MockContext {
            host_height,
            store: ChannelStore::default(),
            consensus_heights: HashMap::new(),
            counterparty: MockProofVerifier::new(),
        }
    }

    pub fn with_height(self, host_height: Height) -> Self {
        Self {
            host_height,
            ..self
        }
    }

    pub fn with_channel(
        mut self,
        port_id: PortId,
        channel_id: ChannelId,
        channel_end: ChannelEnd,
    ) -> Self {
        self.store
            .set_channel_end(&port_id, &channel_id, &channel_end)
            .expect("channel ends always encode");
        self
    }

    pub fn with_connection(
        mut self,
        connection_id: ConnectionId,
        connection_end: ConnectionEnd,
    ) -> Self {
        self.store
            .set_connection_end(&connection_id, &connection_end)
            .expect("connection ends always encode");
        self
    }

    pub fn with_channel_capability(
        mut self,
        port_id: PortId,
        channel_id: ChannelId,
        capability: Capability,
    ) -> Self {
        self.store
            .bind_channel_capability(&port_id, &channel_id, &capability);
        self
    }

    pub fn with_send_sequence(
        mut self,
        port_id: PortId,
        channel_id: ChannelId,
        seq_number: Sequence,
    ) -> Self {
        self.store
            .set_next_sequence_send(&port_id, &channel_id, seq_number);
        self
    }

    pub fn with_recv_sequence(
        mut self,
        port_id: PortId,
        channel_id: ChannelId,
        seq_number: Sequence,
    ) -> Self {
        self.store
            .set_next_sequence_recv(&port_id, &channel_id, seq_number);
        self
    }

    pub fn with_packet_commitment(
        mut self,
        port_id: PortId,
        channel_id: ChannelId,
        seq: Sequence,
        commitment: PacketCommitment,
    ) -> Self {
        self.store
            .set_packet_commitment(&port_id, &channel_id, seq, commitment);
        self
    }

    /// Records that the client `client_id` has tracked its counterparty up to `height`.
    pub fn with_consensus_height(mut self, client_id: ClientId, height: Height) -> Self {
        self.consensus_heights.insert(client_id, height);
        self
    }

    /// Makes `state` the counterparty state committed at `height`, as a relayer would after
    /// updating the light client.
    pub fn with_counterparty_state(mut self, height: Height, state: MemoryStore) -> Self {
        self.commit_counterparty_state(height, state);
        self
    }

    pub fn commit_counterparty_state(&mut self, height: Height, state: MemoryStore) {
        self.counterparty.commit(height, state);
    }

    /// Accessor for the records of this chain, e.g. to snapshot them for the counterparty.
    pub fn store(&self) -> &ChannelStore<MemoryStore> {
        &self.store
    }

    /// Triggers the advancing of the host chain by one block.
    pub fn advance_host_chain_height(&mut self) {
        self.host_height = self.host_height.increment();
    }
}

impl ChannelReader for MockContext {
    fn channel_end(&self, pcid: &(PortId, ChannelId)) -> Result<Option<ChannelEnd>, Error> {
        self.store.channel_end(&pcid.0, &pcid.1)
    }

    fn connection_end(&self, cid: &ConnectionId) -> Result<Option<ConnectionEnd>, Error> {
        self.store.connection_end(cid)
    }

    fn channel_capability(&self, pcid: &(PortId, ChannelId)) -> Result<Option<Capability>, Error> {
        self.store.channel_capability(&pcid.0, &pcid.1)
    }

    fn get_next_sequence_send(
        &self,
        pcid: &(PortId, ChannelId),
    ) -> Result<Option<Sequence>, Error> {
        self.store.next_sequence_send(&pcid.0, &pcid.1)
    }

    fn get_next_sequence_recv(
        &self,
        pcid: &(PortId, ChannelId),
    ) -> Result<Option<Sequence>, Error> {
        self.store.next_sequence_recv(&pcid.0, &pcid.1)
    }

    fn get_packet_commitment(
        &self,
        key: &(PortId, ChannelId, Sequence),
    ) -> Result<Option<PacketCommitment>, Error> {
        Ok(self.store.packet_commitment(&key.0, &key.1, key.2))
    }

    fn get_packet_acknowledgement(
        &self,
        key: &(PortId, ChannelId, Sequence),
    ) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.store.packet_acknowledgement(&key.0, &key.1, key.2))
    }

    fn host_current_height(&self) -> Height {
        self.host_height
    }
}

impl ChannelKeeper for MockContext {
    fn store_next_sequence_send(
        &mut self,
        pcid: &(PortId, ChannelId),
        seq: Sequence,
    ) -> Result<(), Error> {
        self.store.set_next_sequence_send(&pcid.0, &pcid.1, seq);
        Ok(())
    }

    fn store_next_sequence_recv(
        &mut self,
        pcid: &(PortId, ChannelId),
        seq: Sequence,
    ) -> Result<(), Error> {
        self.store.set_next_sequence_recv(&pcid.0, &pcid.1, seq);
        Ok(())
    }

    fn store_packet_commitment(
        &mut self,
        key: &(PortId, ChannelId, Sequence),
        commitment: PacketCommitment,
    ) -> Result<(), Error> {
        self.store
            .set_packet_commitment(&key.0, &key.1, key.2, commitment);
        Ok(())
    }

    fn delete_packet_commitment(
        &mut self,
        key: &(PortId, ChannelId, Sequence),
    ) -> Result<(), Error> {
        self.store.delete_packet_commitment(&key.0, &key.1, key.2);
        Ok(())
    }

    fn store_packet_acknowledgement(
        &mut self,
        key: &(PortId, ChannelId, Sequence),
        ack: Vec<u8>,
    ) -> Result<(), Error> {
        self.store
            .set_packet_acknowledgement(&key.0, &key.1, key.2, ack);
        Ok(())
    }
}

impl ConsensusStateReader for MockContext {
    fn client_consensus_height(&self, client_id: &ClientId) -> Option<Height> {
        self.consensus_heights.get(client_id).copied()
    }
}

impl ProofVerifier for MockContext {
    fn verify_membership(
        &self,
        connection_end: &ConnectionEnd,
        proof_height: Height,
        proof: &CommitmentProof,
        path: &Path,
        value: &[u8],
    ) -> bool {
        self.counterparty
            .verify_membership(connection_end, proof_height, proof, path, value)
    }
}
