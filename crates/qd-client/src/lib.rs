//! qd-client: blocking HTTP client for the BB84 simulator service.
//!
//! The service exposes two JSON endpoints, `POST /simulate` and
//! `POST /analyze`. This crate owns the transport and the mapping of
//! transport outcomes onto [`ClientError`]; it never interprets the
//! simulation payloads beyond decoding them.

pub mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, SimulatorClient};
pub use error::{ClientError, ClientResult};
