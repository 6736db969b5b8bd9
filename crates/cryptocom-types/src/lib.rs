//! Shared types for the Crypto.com exchange REST API
//!
//! This crate holds the value types used by both the request signer and the
//! REST client. It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Params`], [`ParamValue`] - Request parameter mapping in canonical key order
//! - [`KlinePeriod`], [`DepthStep`] - Allow-listed market data arguments
//! - [`validate_date_time`] - Loose `YYYY-MM-DD HH:MM:SS` pattern check
//! - [`ErrorEnvelope`] - The `{code, msg}` body returned for transport failures
//! - [`TypeError`] - Validation errors

pub mod date;
pub mod enums;
pub mod envelope;
pub mod error;
pub mod params;

// Re-export commonly used types
pub use date::*;
pub use enums::*;
pub use envelope::*;
pub use error::*;
pub use params::*;
