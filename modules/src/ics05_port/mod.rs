//! ICS 05: Port. Channel capabilities bound when a channel end is opened.

pub mod capabilities;
