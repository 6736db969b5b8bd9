//! Authentication credentials and request signing
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! The secret is only ever read inside [`Credentials::signature`]. There is no
//! public accessor for it.

use cryptocom_types::Params;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::error::{AuthError, AuthResult};

/// Parameter carrying the public API key
pub const API_KEY_PARAM: &str = "api_key";
/// Parameter carrying the millisecond timestamp
pub const TIME_PARAM: &str = "time";
/// Parameter carrying the hex digest
pub const SIGN_PARAM: &str = "sign";

const API_KEY_ENV: &str = "CRYPTOCOM_API_KEY";
const SECRET_KEY_ENV: &str = "CRYPTOCOM_SECRET_KEY";

/// API credentials for authenticated requests
///
/// The secret key is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public, sent with every private request)
    api_key: String,
    /// Secret key (signing material only, never transmitted)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret key
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        let secret_key: String = secret_key.into();
        Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `CRYPTOCOM_API_KEY` and `CRYPTOCOM_SECRET_KEY`. Surrounding
    /// whitespace is trimmed; blank values are rejected.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = read_env(API_KEY_ENV)?;
        let secret_key = read_env(SECRET_KEY_ENV)?;

        Ok(Self::new(api_key, secret_key))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compute the request signature for `params` at `timestamp`
    ///
    /// Pure function of the api key, secret key, parameters and timestamp.
    /// Parameters are consumed in ascending key order whatever order they
    /// were inserted in; absent values contribute an empty string.
    pub fn signature(&self, params: &Params, timestamp: &str) -> String {
        let mut hasher = Sha256::new();

        hasher.update(API_KEY_PARAM.as_bytes());
        hasher.update(self.api_key.as_bytes());

        for (key, value) in params {
            hasher.update(key.as_bytes());
            hasher.update(value.as_text().as_bytes());
        }

        hasher.update(TIME_PARAM.as_bytes());
        hasher.update(timestamp.as_bytes());

        // expose_secret() provides controlled access to the key
        hasher.update(self.secret_key.expose_secret().as_bytes());

        hex::encode(hasher.finalize())
    }
}

fn read_env(name: &str) -> AuthResult<String> {
    let value = std::env::var(name).map_err(|_| AuthError::EnvVarNotSet(name.to_string()))?;
    let value = value.trim();

    if value.is_empty() {
        return Err(AuthError::InvalidCredentials(format!("{} is empty", name)));
    }

    Ok(value.to_string())
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretString with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Signs request parameters for private endpoints
///
/// Holds the credentials and the clock the `time` parameter is read from.
/// Signing touches no shared mutable state, so one signer can be used from
/// many tasks at once.
#[derive(Clone)]
pub struct RequestSigner {
    credentials: Credentials,
    clock: Arc<dyn Clock>,
}

impl RequestSigner {
    /// Create a signer using the system clock
    pub fn new(credentials: Credentials) -> Self {
        Self::with_clock(credentials, SystemClock)
    }

    /// Create a signer reading timestamps from `clock`
    pub fn with_clock(credentials: Credentials, clock: impl Clock + 'static) -> Self {
        Self {
            credentials,
            clock: Arc::new(clock),
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Current timestamp as decimal milliseconds
    pub fn timestamp(&self) -> String {
        self.clock.now_millis().to_string()
    }

    /// Sign `params` with a fresh timestamp
    ///
    /// Returns the parameters extended with `api_key`, `time` and `sign`.
    pub fn sign(&self, params: Params) -> Params {
        let timestamp = self.timestamp();
        self.sign_at(params, &timestamp)
    }

    /// Sign `params` with an explicit timestamp
    ///
    /// The three signing keys are inserted after the digest is computed, so
    /// any caller-supplied entries under those names are overwritten.
    pub fn sign_at(&self, mut params: Params, timestamp: &str) -> Params {
        let signature = self.credentials.signature(&params, timestamp);
        trace!(params = params.len(), timestamp, "Signed request parameters");

        params.insert(API_KEY_PARAM, self.credentials.api_key());
        params.insert(TIME_PARAM, timestamp);
        params.insert(SIGN_PARAM, signature);
        params
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
