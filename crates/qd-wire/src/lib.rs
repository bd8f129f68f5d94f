//! qd-wire: wire contract for the BB84 simulator service.
//!
//! Contains:
//! - types (serde request/response bodies for /simulate and /analyze)
//! - display (pure text projections of simulation results)

pub mod display;
pub mod types;

pub use display::{KEY_PLACEHOLDER, KEY_PREVIEW_BITS, detection_label, format_qber, key_preview};
pub use types::*;
