//! Template microservice backed by a Dapr sidecar.
//!
//! The service exposes a handful of HTTP routes and delegates all
//! persistence and messaging to a co-located Dapr sidecar:
//!
//! ```text
//! GET  /randomNumber    -> random integer in [0, 101]
//! POST /saveNumber      -> forwards {"number": n} to the state API
//! GET  /savedNumber     -> reads the stored value back, passed through
//! GET  /dapr/subscribe  -> declares topics ["A", "B"]
//! POST /A, POST /B      -> pub/sub callbacks, ack with {"success": true}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`dapr`]: Sidecar state client and wire types
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Counters for sidecar traffic
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod dapr;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
