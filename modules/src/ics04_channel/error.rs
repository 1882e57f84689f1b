use anomaly::{BoxError, Context};
use thiserror::Error;

use crate::ics04_channel::channel::{Order, State};
use crate::ics04_channel::packet::Sequence;
use crate::ics24_host::identifier::{ChannelId, ClientId, ConnectionId, PortId};
use crate::Height;

pub type Error = anomaly::Error<Kind>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Kind {
    #[error("channel order type unknown: {0}")]
    UnknownOrderType(String),

    #[error("channel state unknown: {0}")]
    UnknownState(i32),

    #[error("invalid connection hops length: expected {0}; actual {1}")]
    InvalidConnectionHopsLength(usize, usize),

    #[error("packet sequence cannot be 0")]
    ZeroPacketSequence,

    #[error("invalid packet")]
    InvalidPacket,

    #[error("invalid proof")]
    InvalidProof,

    #[error("channel end ({0}, {1}) not found")]
    ChannelNotFound(PortId, ChannelId),

    #[error("given connection hop {0} does not exist")]
    MissingConnection(ConnectionId),

    #[error("the channel end ({0}, {1}) has no capability associated")]
    NoChannelCapability(PortId, ChannelId),

    #[error("the consensus state for client id {0} could not be retrieved")]
    MissingClientConsensusState(ClientId),

    #[error("missing sequence number for sending packets on port {0} and channel {1}")]
    MissingNextSendSeq(PortId, ChannelId),

    #[error("missing sequence number for receiving packets on port {0} and channel {1}")]
    MissingNextRecvSeq(PortId, ChannelId),

    #[error("channel {0} is closed")]
    ChannelClosed(ChannelId),

    #[error("channel {0} should not be state {1}")]
    InvalidChannelState(ChannelId, State),

    #[error("connection {0} is not initialized")]
    ConnectionNotInitialized(ConnectionId),

    #[error("connection {0} is not open")]
    ConnectionNotOpen(ConnectionId),

    #[error("the capability presented for channel end ({0}, {1}) does not match the bound one")]
    InvalidChannelCapability(PortId, ChannelId),

    #[error("packet port {0} and channel {1} don't match the counterparty's port/channel")]
    InvalidPacketCounterparty(PortId, ChannelId),

    #[error("cleanup proof does not match the ordering {0} of the channel")]
    InvalidCleanupProof(Order),

    #[error("invalid packet sequence {0} ≠ expected sequence {1}")]
    InvalidPacketSequence(Sequence, Sequence),

    #[error("sequence counter on port {0} and channel {1} is exhausted")]
    SequenceOverflow(PortId, ChannelId),

    #[error("packet sequence {0} has not been received yet (counterparty next receive sequence {1})")]
    PacketNotYetReceived(Sequence, Sequence),

    #[error("receiving chain block height {0} >= packet timeout height {1}")]
    LowPacketHeight(Height, Height),

    #[error("packet commitment for sequence {0} not found")]
    PacketCommitmentNotFound(Sequence),

    #[error("packet commitment for sequence {0} does not match the packet data")]
    PacketCommitmentMismatch(Sequence),

    #[error("verification of the counterparty state failed for packet sequence {0}")]
    PacketVerificationFailed(Sequence),

    #[error("failed to encode or decode the record stored at {0}")]
    StoreCodec(String),
}

/// Coarse classification of a failure, one class per precondition family.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// The message is malformed independently of any state.
    Validation,
    /// A channel, connection, capability, consensus state or counter is absent.
    NotFound,
    /// A channel or connection is not in the state the operation requires.
    InvalidState,
    /// The presented capability does not authenticate the caller.
    Unauthorized,
    /// The packet disagrees with the channel's counterparty or ordering.
    Mismatch,
    /// The sequence does not match the expected next value.
    SequenceViolation,
    /// The packet timeout height has passed.
    Expired,
    /// No commitment, or a commitment that differs from the packet data.
    CommitmentMismatch,
    /// The counterparty state does not contain the claimed key/value.
    ProofFailure,
    /// A stored record could not be encoded or decoded.
    Storage,
}

impl Kind {
    pub fn context(self, source: impl Into<BoxError>) -> Context<Self> {
        Context::new(self, Some(source.into()))
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Kind::UnknownOrderType(_)
            | Kind::UnknownState(_)
            | Kind::InvalidConnectionHopsLength(_, _)
            | Kind::ZeroPacketSequence
            | Kind::InvalidPacket
            | Kind::InvalidProof => ErrorClass::Validation,

            Kind::ChannelNotFound(_, _)
            | Kind::MissingConnection(_)
            | Kind::NoChannelCapability(_, _)
            | Kind::MissingClientConsensusState(_)
            | Kind::MissingNextSendSeq(_, _)
            | Kind::MissingNextRecvSeq(_, _) => ErrorClass::NotFound,

            Kind::ChannelClosed(_)
            | Kind::InvalidChannelState(_, _)
            | Kind::ConnectionNotInitialized(_)
            | Kind::ConnectionNotOpen(_) => ErrorClass::InvalidState,

            Kind::InvalidChannelCapability(_, _) => ErrorClass::Unauthorized,

            Kind::InvalidPacketCounterparty(_, _) | Kind::InvalidCleanupProof(_) => {
                ErrorClass::Mismatch
            }

            Kind::InvalidPacketSequence(_, _)
            | Kind::PacketNotYetReceived(_, _)
            | Kind::SequenceOverflow(_, _) => ErrorClass::SequenceViolation,

            Kind::LowPacketHeight(_, _) => ErrorClass::Expired,

            Kind::PacketCommitmentNotFound(_) | Kind::PacketCommitmentMismatch(_) => {
                ErrorClass::CommitmentMismatch
            }

            Kind::PacketVerificationFailed(_) => ErrorClass::ProofFailure,

            Kind::StoreCodec(_) => ErrorClass::Storage,
        }
    }
}
