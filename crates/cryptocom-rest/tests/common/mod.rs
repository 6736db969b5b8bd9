//! Common test utilities for integration tests
//!
//! Contains a recording mock transport and sample response bodies.

#![allow(dead_code)]

use async_trait::async_trait;
use cryptocom_auth::{FixedClock, RequestSigner};
use cryptocom_rest::{
    ClientConfig, Credentials, CryptoComClient, Params, Transport, TransportError, TransportResult,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "test_api_key";
pub const TEST_SECRET_KEY: &str = "test_secret";
pub const TEST_TIMESTAMP: u64 = 1_700_000_000_000;
pub const BASE_URL: &str = "https://api.test.invalid";

/// Sample success body, shaped like the exchange's v1 responses
pub const SUCCESS_BODY: &str = r#"{
    "code": "0",
    "msg": "suc",
    "data": []
}"#;

/// HTTP verb of a recorded request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

/// One request seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    pub verb: Verb,
    pub url: String,
    pub params: Params,
}

/// How the mock answers
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    MalformedBody,
}

/// Transport that records requests and answers with a canned reply
pub struct MockTransport {
    reply: Reply,
    calls: Mutex<Vec<Recorded>>,
}

impl MockTransport {
    pub fn replying(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn success() -> Arc<Self> {
        Self::replying(Reply::Json(serde_json::from_str(SUCCESS_BODY).unwrap()))
    }

    pub fn failing() -> Arc<Self> {
        Self::replying(Reply::MalformedBody)
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.calls().pop().expect("no request was sent")
    }

    fn answer(&self, verb: Verb, url: &str, params: &Params) -> TransportResult<Value> {
        self.calls.lock().unwrap().push(Recorded {
            verb,
            url: url.to_string(),
            params: params.clone(),
        });

        match &self.reply {
            Reply::Json(body) => Ok(body.clone()),
            Reply::MalformedBody => Err(TransportError::Decode(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, params: &Params) -> TransportResult<Value> {
        self.answer(Verb::Get, url, params)
    }

    async fn post(&self, url: &str, params: &Params) -> TransportResult<Value> {
        self.answer(Verb::Post, url, params)
    }
}

/// Public client on top of `transport`
pub fn public_client(transport: Arc<MockTransport>) -> CryptoComClient {
    CryptoComClient::with_transport(transport, ClientConfig::new().with_base_url(BASE_URL))
}

/// Authenticated client on top of `transport`, signing at [`TEST_TIMESTAMP`]
pub fn private_client(transport: Arc<MockTransport>) -> CryptoComClient {
    let credentials = Credentials::new(TEST_API_KEY, TEST_SECRET_KEY);
    let signer = RequestSigner::with_clock(credentials.clone(), FixedClock(TEST_TIMESTAMP));

    CryptoComClient::with_transport(
        transport,
        ClientConfig::new()
            .with_base_url(BASE_URL)
            .with_credentials(credentials),
    )
    .with_signer(signer)
}

/// Sorted keys of a parameter set
pub fn keys(params: &Params) -> Vec<&str> {
    params.keys().collect()
}
