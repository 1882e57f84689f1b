//! ICS 03: Connection. Connection ends are negotiated by the connection handshake; the packet
//! handlers only read them.

pub mod connection;
