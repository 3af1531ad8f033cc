//! Dapr sidecar integration: state client and wire types.

pub mod client;
pub mod types;

pub use client::DaprClient;
pub use types::{StateEntry, SAVED_NUMBER_KEY, TOPICS};
