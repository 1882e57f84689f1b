//! Path-space as listed in ICS-024
//! <https://github.com/cosmos/ics/tree/master/spec/ics-024-host-requirements#path-space>
//!
//! The same path is used as the key of a record in the local store and as the key proven to
//! exist in the counterparty's committed state.
use std::fmt::{Display, Formatter, Result};

use crate::ics04_channel::packet::Sequence;
use crate::ics24_host::identifier::{ChannelId, ConnectionId, PortId};

/// The Path enum abstracts out the different sub-paths
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Path {
    Connections(ConnectionId),
    ChannelEnds(PortId, ChannelId),
    ChannelCapabilities(PortId, ChannelId),
    SeqSends(PortId, ChannelId),
    SeqRecvs(PortId, ChannelId),
    Commitments(PortId, ChannelId, Sequence),
    Acks(PortId, ChannelId, Sequence),
}

/// The Display trait adds the `.to_string()` method to the Path struct
/// This is where the different path strings are constructed
impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self {
            Path::Connections(id) => write!(f, "connections/{}", id),
            Path::ChannelEnds(port_id, channel_id) => {
                write!(f, "channelEnds/ports/{}/channels/{}", port_id, channel_id)
            }
            Path::ChannelCapabilities(port_id, channel_id) => {
                write!(f, "capabilities/ports/{}/channels/{}", port_id, channel_id)
            }
            Path::SeqSends(port_id, channel_id) => write!(
                f,
                "seqSends/ports/{}/channels/{}/nextSequenceSend",
                port_id, channel_id
            ),
            Path::SeqRecvs(port_id, channel_id) => write!(
                f,
                "seqRecvs/ports/{}/channels/{}/nextSequenceRecv",
                port_id, channel_id
            ),
            Path::Commitments(port_id, channel_id, seq) => write!(
                f,
                "commitments/ports/{}/channels/{}/packets/{}",
                port_id, channel_id, seq
            ),
            Path::Acks(port_id, channel_id, seq) => write!(
                f,
                "acks/ports/{}/channels/{}/acknowledgements/{}",
                port_id, channel_id, seq
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;
    use crate::ics04_channel::packet::Sequence;
    use crate::ics24_host::identifier::{ChannelId, PortId};

    #[test]
    fn packet_paths_are_canonical() {
        let port_id = PortId::default();
        let channel_id = ChannelId::default();

        assert_eq!(
            Path::Commitments(port_id.clone(), channel_id.clone(), Sequence::from(7)).to_string(),
            "commitments/ports/transfer/channels/channel-0/packets/7"
        );
        assert_eq!(
            Path::SeqRecvs(port_id.clone(), channel_id.clone()).to_string(),
            "seqRecvs/ports/transfer/channels/channel-0/nextSequenceRecv"
        );
        assert_eq!(
            Path::Acks(port_id.clone(), channel_id.clone(), Sequence::from(1)).to_string(),
            "acks/ports/transfer/channels/channel-0/acknowledgements/1"
        );
        assert_eq!(
            Path::ChannelCapabilities(port_id, channel_id).to_string(),
            "capabilities/ports/transfer/channels/channel-0"
        );
    }
}
