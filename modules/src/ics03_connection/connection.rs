use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::ics24_host::identifier::ClientId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEnd {
    state: State,
    client_id: ClientId,
}

impl ConnectionEnd {
    pub fn new(state: State, client_id: ClientId) -> Self {
        Self { state, client_id }
    }

    /// Getter for the state of this connection end.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Getter for the client id on the local party of this connection end.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Helper function to compare the state of this connection end with another state.
    pub fn state_matches(&self, other: &State) -> bool {
        self.state.eq(other)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Uninitialized,
    Init,
    TryOpen,
    Open,
}

impl State {
    /// Yields the State as a string.
    pub fn as_string(&self) -> &'static str {
        match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Init => "INIT",
            Self::TryOpen => "TRYOPEN",
            Self::Open => "OPEN",
        }
    }

    /// Parses the State out from a i32.
    pub fn from_i32(s: i32) -> Option<Self> {
        match s {
            0 => Some(Self::Uninitialized),
            1 => Some(Self::Init),
            2 => Some(Self::TryOpen),
            3 => Some(Self::Open),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionEnd, State};
    use crate::ics24_host::identifier::ClientId;

    #[test]
    fn connection_state_from_i32() {
        assert_eq!(State::from_i32(0), Some(State::Uninitialized));
        assert_eq!(State::from_i32(3), Some(State::Open));
        assert_eq!(State::from_i32(4), None);
    }

    #[test]
    fn connection_end_serde() {
        let conn = ConnectionEnd::new(State::Open, ClientId::default());
        let encoded = serde_json::to_vec(&conn).unwrap();
        let decoded: ConnectionEnd = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(conn, decoded);
        assert!(decoded.state_matches(&State::Open));
    }
}
