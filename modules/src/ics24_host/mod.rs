//! ICS 24: Host Requirements

pub mod error;
pub mod identifier;
mod path;
pub use path::Path;
pub mod store;
pub mod validate;
