use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::ics04_channel::error::{Error, Kind};
use crate::ics24_host::identifier::{ChannelId, PortId};
use crate::Height;

/// The sequence number of a packet enforces ordering among packets from the same source.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub struct Sequence(u64);

impl Sequence {
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The following sequence, or `None` once the counter is exhausted.
    pub fn checked_increment(&self) -> Option<Sequence> {
        self.0.checked_add(1).map(Sequence)
    }

    /// Big-endian encoding, as stored for sequence counters and proven by the counterparty.
    pub fn to_be_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Option<Sequence> {
        let mut buf = [0u8; 8];
        if bytes.len() != buf.len() {
            return None;
        }
        buf.copy_from_slice(bytes);
        Some(Sequence(u64::from_be_bytes(buf)))
    }
}

impl From<u64> for Sequence {
    fn from(seq: u64) -> Self {
        Sequence(seq)
    }
}

impl From<Sequence> for u64 {
    fn from(s: Sequence) -> u64 {
        s.0
    }
}

impl FromStr for Sequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(
            s.parse::<u64>()
                .map_err(|e| Kind::InvalidPacket.context(e))?,
        ))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A packet sent from a source channel end to a destination channel end. Packets are built by
/// the sending application and never change afterwards.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub sequence: Sequence,
    pub source_port: PortId,
    pub source_channel: ChannelId,
    pub destination_port: PortId,
    pub destination_channel: ChannelId,
    pub data: Vec<u8>,
    /// Zero means the packet never times out.
    pub timeout_height: Height,
}

impl Packet {
    /// Checks the fields that can be checked without looking at any state.
    pub fn validate_basic(&self) -> Result<(), Error> {
        if self.sequence.is_zero() {
            return Err(Kind::ZeroPacketSequence.into());
        }
        Ok(())
    }

    /// Whether a chain whose view has reached `height` must consider this packet timed out.
    pub fn timed_out(&self, height: Height) -> bool {
        !self.timeout_height.is_zero() && height >= self.timeout_height
    }
}

/// Packet data can be large; keep the debug output to its length.
impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("sequence", &self.sequence)
            .field("source_port", &self.source_port)
            .field("source_channel", &self.source_channel)
            .field("destination_port", &self.destination_port)
            .field("destination_channel", &self.destination_channel)
            .field("data_len", &self.data.len())
            .field("timeout_height", &self.timeout_height)
            .finish()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seq:{}, path:{}/{}->{}/{}, toh:{}",
            self.sequence,
            self.source_channel,
            self.source_port,
            self.destination_channel,
            self.destination_port,
            self.timeout_height
        )
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::Packet;
    use crate::ics24_host::identifier::{ChannelId, PortId};
    use crate::Height;

    /// Returns a dummy `Packet` travelling between the default port/channel pair on both ends,
    /// for testing only!
    pub fn get_dummy_packet(sequence: u64, timeout_height: u64) -> Packet {
        Packet {
            sequence: sequence.into(),
            source_port: PortId::default(),
            source_channel: ChannelId::default(),
            destination_port: PortId::default(),
            destination_channel: ChannelId::default(),
            data: vec![sequence as u8, 0xab, 0xcd],
            timeout_height: Height::new(timeout_height),
        }
    }

    /// Returns a dummy `Packet` sent from `transfer/channel-1` to `bank/channel-2`, so that
    /// keys written under the source and the destination can be told apart. For testing only!
    pub fn get_dummy_routed_packet(sequence: u64, timeout_height: u64) -> Packet {
        Packet {
            source_port: "transfer".parse().unwrap(),
            source_channel: "channel-1".parse().unwrap(),
            destination_port: "bank".parse().unwrap(),
            destination_channel: "channel-2".parse().unwrap(),
            ..get_dummy_packet(sequence, timeout_height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::get_dummy_packet;
    use super::Sequence;
    use crate::ics04_channel::error::Kind;
    use crate::Height;

    #[test]
    fn packet_timeout_height() {
        let packet = get_dummy_packet(1, 10);
        assert!(!packet.timed_out(Height::new(9)));
        assert!(packet.timed_out(Height::new(10)));
        assert!(packet.timed_out(Height::new(11)));

        let no_timeout = get_dummy_packet(1, 0);
        assert!(!no_timeout.timed_out(Height::new(u64::MAX)));
    }

    #[test]
    fn packet_validate_basic() {
        assert!(get_dummy_packet(1, 10).validate_basic().is_ok());
        assert_eq!(
            get_dummy_packet(0, 10).validate_basic().unwrap_err().kind(),
            &Kind::ZeroPacketSequence
        );
    }

    #[test]
    fn sequence_encoding() {
        let seq = Sequence::from(258);
        assert_eq!(seq.to_be_bytes(), [0, 0, 0, 0, 0, 0, 1, 2]);
        assert_eq!(Sequence::from_be_bytes(&seq.to_be_bytes()), Some(seq));
        assert_eq!(Sequence::from_be_bytes(&[1]), None);
        assert_eq!(seq.checked_increment(), Some(Sequence::from(259)));
        assert_eq!(Sequence::from(u64::MAX).checked_increment(), None);
        assert_eq!("17".parse::<Sequence>().unwrap(), Sequence::from(17));
    }
}
