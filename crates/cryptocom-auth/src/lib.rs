//! Credentials and request signing for the Crypto.com exchange REST API
//!
//! Private endpoints expect three extra parameters on every request: the
//! public `api_key`, a millisecond `time` stamp and a `sign` digest. This
//! crate produces them.
//!
//! # Signature
//!
//! The signature is the lowercase hex SHA-256 of
//!
//! ```text
//! "api_key" + <api key> + <k1><v1><k2><v2>... + "time" + <millis> + <secret key>
//! ```
//!
//! where the `k/v` pairs are the request parameters sorted by key.
//!
//! # Example
//!
//! ```no_run
//! use cryptocom_auth::{Credentials, RequestSigner};
//! use cryptocom_types::Params;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let signer = RequestSigner::new(creds);
//!
//! let signed = signer.sign(Params::new().with("symbol", "ethbtc"));
//! assert!(signed.contains_key("sign"));
//! # Ok(())
//! # }
//! ```

mod clock;
mod credentials;
mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credentials::{Credentials, RequestSigner, API_KEY_PARAM, SIGN_PARAM, TIME_PARAM};
pub use error::{AuthError, AuthResult};
