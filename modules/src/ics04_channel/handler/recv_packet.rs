//! Protocol logic for accepting a packet on its destination channel end.

use crate::events::IBCEvent;
use crate::handler::{HandlerOutput, HandlerResult};
use crate::ics03_connection::connection::State as ConnectionState;
use crate::ics04_channel::channel::{Counterparty, Order, State};
use crate::ics04_channel::context::ChannelReader;
use crate::ics04_channel::error::{Error, Kind};
use crate::ics04_channel::events::{ReceivePacket, WriteAcknowledgement};
use crate::ics04_channel::handler::verify::{
    first_hop_connection, verify_channel_capability, verify_packet_recv_proofs,
};
use crate::ics04_channel::handler::{PacketResult, RecvPacketResult};
use crate::ics04_channel::msgs::recv_packet::MsgRecvPacket;
use crate::ics23_commitment::verifier::ProofVerifier;

pub(crate) fn process<Ctx>(ctx: &Ctx, msg: MsgRecvPacket) -> HandlerResult<PacketResult, Error>
where
    Ctx: ChannelReader + ProofVerifier,
{
    let mut output = HandlerOutput::builder();

    let packet = msg.packet;

    // The local end is looked up under the packet's source identifiers.
    let channel_end = ctx
        .channel_end(&(packet.source_port.clone(), packet.source_channel.clone()))?
        .ok_or_else(|| {
            Kind::ChannelNotFound(packet.source_port.clone(), packet.source_channel.clone())
        })?;

    if !channel_end.state_matches(&State::Open) {
        return Err(
            Kind::InvalidChannelState(packet.source_channel.clone(), *channel_end.state()).into(),
        );
    }

    verify_channel_capability(
        ctx,
        &packet.source_port,
        &packet.source_channel,
        &msg.capability,
    )?;

    // The packet must come from the channel's counterparty.
    let counterparty = Counterparty::new(packet.source_port.clone(), packet.source_channel.clone());

    if !channel_end.counterparty_matches(&counterparty) {
        return Err(Kind::InvalidPacketCounterparty(
            packet.source_port.clone(),
            packet.source_channel.clone(),
        )
        .into());
    }

    let (connection_id, connection_end) = first_hop_connection(ctx, &channel_end)?;

    if !connection_end.state_matches(&ConnectionState::Open) {
        return Err(Kind::ConnectionNotOpen(connection_id).into());
    }

    let host_height = ctx.host_current_height();
    if packet.timed_out(host_height) {
        return Err(Kind::LowPacketHeight(host_height, packet.timeout_height).into());
    }

    verify_packet_recv_proofs(ctx, &connection_end, &packet, &msg.proofs)?;

    let port_channel_id = (
        packet.destination_port.clone(),
        packet.destination_channel.clone(),
    );

    let next_seq_recv = match channel_end.ordering() {
        Order::Ordered => {
            let next_seq_recv = ctx.get_next_sequence_recv(&port_channel_id)?.ok_or_else(|| {
                Kind::MissingNextRecvSeq(
                    packet.destination_port.clone(),
                    packet.destination_channel.clone(),
                )
            })?;

            if packet.sequence != next_seq_recv {
                return Err(Kind::InvalidPacketSequence(packet.sequence, next_seq_recv).into());
            }

            let next_seq_recv = next_seq_recv.checked_increment().ok_or_else(|| {
                Kind::SequenceOverflow(
                    packet.destination_port.clone(),
                    packet.destination_channel.clone(),
                )
            })?;

            Some(next_seq_recv)
        }
        Order::Unordered => None,
    };

    let ack = if !msg.acknowledgement.is_empty() || channel_end.order_matches(&Order::Unordered) {
        Some(msg.acknowledgement)
    } else {
        None
    };

    output.log("success: packet receive");

    let result = PacketResult::Recv(RecvPacketResult {
        port_id: packet.destination_port.clone(),
        channel_id: packet.destination_channel.clone(),
        seq: packet.sequence,
        ack: ack.clone(),
        next_seq_recv,
    });

    if let Some(ack) = ack {
        output.log("success: acknowledgement written");
        output.emit(IBCEvent::WriteAcknowledgement(WriteAcknowledgement {
            height: host_height,
            packet: packet.clone(),
            ack,
        }));
    }

    output.emit(IBCEvent::ReceivePacket(ReceivePacket {
        height: host_height,
        packet,
    }));

    Ok(output.with_result(result))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::events::IBCEvent;
    use crate::ics03_connection::connection::{ConnectionEnd, State as ConnectionState};
    use crate::ics04_channel::channel::test_util::get_dummy_channel_end;
    use crate::ics04_channel::channel::{ChannelEnd, Counterparty, Order, State};
    use crate::ics04_channel::error::Kind;
    use crate::ics04_channel::handler::{deliver, dispatch, PacketResult};
    use crate::ics04_channel::msgs::recv_packet::test_util::get_dummy_msg_recv_packet;
    use crate::ics04_channel::msgs::recv_packet::MsgRecvPacket;
    use crate::ics04_channel::msgs::PacketMsg;
    use crate::ics04_channel::packet::test_utils::{get_dummy_packet, get_dummy_routed_packet};
    use crate::ics04_channel::packet::Sequence;
    use crate::ics05_port::capabilities::Capability;
    use crate::ics24_host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
    use crate::ics24_host::store::{MemoryStore, Store};
    use crate::ics24_host::Path;
    use crate::mock::context::MockContext;
    use crate::Height;

    /// Counterparty state at `height` in which the packet's channel path holds its data.
    fn proven_state(msg: &MsgRecvPacket) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(
            &Path::ChannelEnds(
                msg.packet.source_port.clone(),
                msg.packet.source_channel.clone(),
            ),
            msg.packet.data.clone(),
        );
        store
    }

    #[test]
    fn recv_packet_processing() {
        struct Test {
            name: String,
            ctx: MockContext,
            msg: MsgRecvPacket,
            want: Result<(), Kind>,
        }

        let port_id = PortId::default();
        let channel_id = ChannelId::default();
        let connection_id = ConnectionId::default();
        let client_id = ClientId::default();

        // Host height defaults to 5 in the mock, proofs refer to counterparty height 3.
        let msg = get_dummy_msg_recv_packet(1, 20, 3);
        let last_msg = get_dummy_msg_recv_packet(u64::MAX, 20, 3);
        let proof_height = Height::new(3);

        let context = |ordering: Order| {
            MockContext::default()
                .with_channel(
                    port_id.clone(),
                    channel_id.clone(),
                    get_dummy_channel_end(State::Open, ordering),
                )
                .with_channel_capability(port_id.clone(), channel_id.clone(), Capability::new(1))
                .with_connection(
                    connection_id.clone(),
                    ConnectionEnd::new(ConnectionState::Open, client_id.clone()),
                )
                .with_recv_sequence(port_id.clone(), channel_id.clone(), 1.into())
                .with_counterparty_state(proof_height, proven_state(&msg))
        };

        let tests: Vec<Test> = vec![
            Test {
                name: "Processing fails because no channel exists in the context".to_string(),
                ctx: MockContext::default(),
                msg: msg.clone(),
                want: Err(Kind::ChannelNotFound(port_id.clone(), channel_id.clone())),
            },
            Test {
                name: "Processing fails because the channel is not open".to_string(),
                ctx: context(Order::Ordered).with_channel(
                    port_id.clone(),
                    channel_id.clone(),
                    get_dummy_channel_end(State::TryOpen, Order::Ordered),
                ),
                msg: msg.clone(),
                want: Err(Kind::InvalidChannelState(
                    channel_id.clone(),
                    State::TryOpen,
                )),
            },
            Test {
                name: "Processing fails because the capability does not match".to_string(),
                ctx: context(Order::Ordered).with_channel_capability(
                    port_id.clone(),
                    channel_id.clone(),
                    Capability::new(9),
                ),
                msg: msg.clone(),
                want: Err(Kind::InvalidChannelCapability(
                    port_id.clone(),
                    channel_id.clone(),
                )),
            },
            Test {
                name: "Processing fails because the connection is not open".to_string(),
                ctx: context(Order::Ordered).with_connection(
                    connection_id.clone(),
                    ConnectionEnd::new(ConnectionState::TryOpen, client_id.clone()),
                ),
                msg: msg.clone(),
                want: Err(Kind::ConnectionNotOpen(connection_id.clone())),
            },
            Test {
                name: "Processing fails because the packet timed out at the host height"
                    .to_string(),
                ctx: context(Order::Ordered),
                msg: get_dummy_msg_recv_packet(1, 5, 3),
                want: Err(Kind::LowPacketHeight(Height::new(5), Height::new(5))),
            },
            Test {
                name: "Processing fails because the proof height was never committed".to_string(),
                ctx: context(Order::Ordered),
                msg: get_dummy_msg_recv_packet(1, 20, 4),
                want: Err(Kind::PacketVerificationFailed(Sequence::from(1))),
            },
            Test {
                name: "Processing fails because the proven data differs".to_string(),
                ctx: context(Order::Ordered),
                msg: {
                    let mut m = msg.clone();
                    m.packet.data.push(0);
                    m
                },
                want: Err(Kind::PacketVerificationFailed(Sequence::from(1))),
            },
            Test {
                name: "Processing fails because the ordered sequence is not the next one"
                    .to_string(),
                ctx: context(Order::Ordered).with_recv_sequence(
                    port_id.clone(),
                    channel_id.clone(),
                    2.into(),
                ),
                msg: msg.clone(),
                want: Err(Kind::InvalidPacketSequence(
                    Sequence::from(1),
                    Sequence::from(2),
                )),
            },
            Test {
                name: "Processing fails because the receive counter is exhausted".to_string(),
                ctx: context(Order::Ordered)
                    .with_recv_sequence(port_id.clone(), channel_id.clone(), u64::MAX.into())
                    .with_counterparty_state(proof_height, proven_state(&last_msg)),
                msg: last_msg.clone(),
                want: Err(Kind::SequenceOverflow(port_id.clone(), channel_id.clone())),
            },
            Test {
                name: "Good parameters on an ordered channel".to_string(),
                ctx: context(Order::Ordered),
                msg: msg.clone(),
                want: Ok(()),
            },
            Test {
                name: "Good parameters on an unordered channel".to_string(),
                ctx: context(Order::Unordered),
                msg: msg.clone(),
                want: Ok(()),
            },
        ];

        for test in tests {
            let res = dispatch(&test.ctx, PacketMsg::RecvPacket(test.msg.clone()));
            match (res, test.want) {
                (Ok(proto_output), Ok(())) => {
                    assert!(matches!(
                        proto_output.events.last(),
                        Some(IBCEvent::ReceivePacket(_))
                    ));
                    assert!(!proto_output.log.is_empty());
                }
                (Err(e), Err(kind)) => {
                    assert_eq!(e.kind(), &kind, "recv_packet: wrong error for test {}", test.name)
                }
                (res, want) => panic!(
                    "recv_packet: test {} returned {:?}, expected {:?}",
                    test.name,
                    res.map(|o| o.result),
                    want
                ),
            }
        }
    }

    #[test]
    fn recv_packet_acknowledgement_rules() {
        struct Test {
            name: String,
            ordering: Order,
            ack: Vec<u8>,
            want_ack: Option<Vec<u8>>,
            want_next_seq_recv: Option<Sequence>,
        }

        let tests: Vec<Test> = vec![
            Test {
                name: "Ordered channel with an acknowledgement".to_string(),
                ordering: Order::Ordered,
                ack: b"ok".to_vec(),
                want_ack: Some(b"ok".to_vec()),
                want_next_seq_recv: Some(2.into()),
            },
            Test {
                name: "Ordered channel without an acknowledgement".to_string(),
                ordering: Order::Ordered,
                ack: vec![],
                want_ack: None,
                want_next_seq_recv: Some(2.into()),
            },
            Test {
                name: "Unordered channel without an acknowledgement".to_string(),
                ordering: Order::Unordered,
                ack: vec![],
                want_ack: Some(vec![]),
                want_next_seq_recv: None,
            },
        ];

        for test in tests {
            let packet = get_dummy_packet(1, 0);
            let msg = MsgRecvPacket::new(
                packet.clone(),
                vec![1].into(),
                Height::new(3),
                test.ack.clone(),
                Capability::new(1),
            )
            .unwrap();

            let ctx = MockContext::default()
                .with_channel(
                    packet.source_port.clone(),
                    packet.source_channel.clone(),
                    get_dummy_channel_end(State::Open, test.ordering),
                )
                .with_channel_capability(
                    packet.source_port.clone(),
                    packet.source_channel.clone(),
                    Capability::new(1),
                )
                .with_connection(
                    ConnectionId::default(),
                    ConnectionEnd::new(ConnectionState::Open, ClientId::default()),
                )
                .with_recv_sequence(
                    packet.destination_port.clone(),
                    packet.destination_channel.clone(),
                    1.into(),
                )
                .with_counterparty_state(Height::new(3), proven_state(&msg));

            let output = dispatch(&ctx, PacketMsg::RecvPacket(msg)).unwrap();
            let wrote_ack = output
                .events
                .iter()
                .any(|e| matches!(e, IBCEvent::WriteAcknowledgement(_)));
            assert_eq!(wrote_ack, test.want_ack.is_some(), "{}", test.name);

            match output.result {
                PacketResult::Recv(res) => {
                    assert_eq!(res.ack, test.want_ack, "{}", test.name);
                    assert_eq!(res.next_seq_recv, test.want_next_seq_recv, "{}", test.name);
                }
                other => panic!("unexpected result {:?} for test {}", other, test.name),
            }
        }
    }

    #[test]
    fn recv_packet_writes_under_the_destination() {
        let packet = get_dummy_routed_packet(1, 20);
        let (src_port, src_channel) = (packet.source_port.clone(), packet.source_channel.clone());
        let (dst_port, dst_channel) = (
            packet.destination_port.clone(),
            packet.destination_channel.clone(),
        );
        let msg = MsgRecvPacket::new(
            packet.clone(),
            vec![1].into(),
            Height::new(3),
            b"ok".to_vec(),
            Capability::new(1),
        )
        .unwrap();

        // The channel end and capability are looked up under the packet source, the receive
        // counter under the packet destination.
        let context = |ordering: Order, state: MemoryStore| {
            MockContext::default()
                .with_channel(
                    src_port.clone(),
                    src_channel.clone(),
                    ChannelEnd::new(
                        State::Open,
                        ordering,
                        Counterparty::new(src_port.clone(), src_channel.clone()),
                        vec![ConnectionId::default()],
                    )
                    .unwrap(),
                )
                .with_channel_capability(src_port.clone(), src_channel.clone(), Capability::new(1))
                .with_connection(
                    ConnectionId::default(),
                    ConnectionEnd::new(ConnectionState::Open, ClientId::default()),
                )
                .with_recv_sequence(dst_port.clone(), dst_channel.clone(), 1.into())
                .with_counterparty_state(Height::new(3), state)
        };

        for ordering in vec![Order::Ordered, Order::Unordered] {
            let mut ctx = context(ordering, proven_state(&msg));
            deliver(&mut ctx, PacketMsg::RecvPacket(msg.clone())).unwrap();

            let store = ctx.store();
            assert_eq!(
                store.packet_acknowledgement(&dst_port, &dst_channel, 1.into()),
                Some(b"ok".to_vec()),
                "{:?}",
                ordering
            );
            assert_eq!(
                store.packet_acknowledgement(&src_port, &src_channel, 1.into()),
                None,
                "{:?}",
                ordering
            );

            let want_next = match ordering {
                Order::Ordered => Sequence::from(2),
                _ => Sequence::from(1),
            };
            assert_eq!(
                store.next_sequence_recv(&dst_port, &dst_channel).unwrap(),
                Some(want_next),
                "{:?}",
                ordering
            );
            assert_eq!(
                store.next_sequence_recv(&src_port, &src_channel).unwrap(),
                None,
                "{:?}",
                ordering
            );

            // The data has to be proven under the sending channel path, not the receiving one.
            let mut misplaced = MemoryStore::new();
            misplaced.set(
                &Path::ChannelEnds(dst_port.clone(), dst_channel.clone()),
                packet.data.clone(),
            );
            let ctx = context(ordering, misplaced);
            let err = dispatch(&ctx, PacketMsg::RecvPacket(msg.clone())).unwrap_err();
            assert_eq!(err.kind(), &Kind::PacketVerificationFailed(1.into()));
        }

        // A channel end stored under the destination is not the one a receive looks up.
        let ctx = MockContext::default()
            .with_channel(
                dst_port.clone(),
                dst_channel.clone(),
                get_dummy_channel_end(State::Open, Order::Ordered),
            )
            .with_counterparty_state(Height::new(3), proven_state(&msg));
        let err = dispatch(&ctx, PacketMsg::RecvPacket(msg)).unwrap_err();
        assert_eq!(err.kind(), &Kind::ChannelNotFound(src_port, src_channel));
    }
}
