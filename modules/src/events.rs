use serde_derive::{Deserialize, Serialize};

use crate::ics04_channel::events as ChannelEvents;
use crate::Height;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum IBCEvent {
    SendPacket(ChannelEvents::SendPacket),
    ReceivePacket(ChannelEvents::ReceivePacket),
    WriteAcknowledgement(ChannelEvents::WriteAcknowledgement),
    CleanupPacket(ChannelEvents::CleanupPacket),
}

impl IBCEvent {
    /// Host height at which the event was emitted.
    pub fn height(&self) -> Height {
        match self {
            IBCEvent::SendPacket(ev) => ev.height,
            IBCEvent::ReceivePacket(ev) => ev.height,
            IBCEvent::WriteAcknowledgement(ev) => ev.height,
            IBCEvent::CleanupPacket(ev) => ev.height,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            IBCEvent::SendPacket(_) => "send_packet",
            IBCEvent::ReceivePacket(_) => "recv_packet",
            IBCEvent::WriteAcknowledgement(_) => "write_acknowledgement",
            IBCEvent::CleanupPacket(_) => "cleanup_packet",
        }
    }
}

impl From<ChannelEvents::SendPacket> for IBCEvent {
    fn from(v: ChannelEvents::SendPacket) -> Self {
        IBCEvent::SendPacket(v)
    }
}

impl From<ChannelEvents::ReceivePacket> for IBCEvent {
    fn from(v: ChannelEvents::ReceivePacket) -> Self {
        IBCEvent::ReceivePacket(v)
    }
}

impl From<ChannelEvents::WriteAcknowledgement> for IBCEvent {
    fn from(v: ChannelEvents::WriteAcknowledgement) -> Self {
        IBCEvent::WriteAcknowledgement(v)
    }
}

impl From<ChannelEvents::CleanupPacket> for IBCEvent {
    fn from(v: ChannelEvents::CleanupPacket) -> Self {
        IBCEvent::CleanupPacket(v)
    }
}

#[cfg(test)]
mod tests {
    use super::IBCEvent;
    use crate::ics04_channel::events::SendPacket;
    use crate::ics04_channel::packet::Packet;
    use crate::Height;

    #[test]
    fn event_serde() {
        let ev = IBCEvent::from(SendPacket {
            height: Height::new(7),
            packet: Packet::default(),
        });
        let json = serde_json::to_string(&ev).unwrap();
        let back: IBCEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(ev, back);
        assert_eq!(back.height(), Height::new(7));
        assert_eq!(back.event_type(), "send_packet");
    }
}
