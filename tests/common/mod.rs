//! Shared test fixtures: a scripted transport and client helpers.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use money_api_client::{
    ApiClient,
    error::{Error, Result},
    net::DefaultHostsProvider,
    transport::{EncodedRequest, Transport},
};
use tracing_subscriber::EnvFilter;

/// What the mock transport does for one submission.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with this body.
    Body(String),
    /// Fail with this HTTP status.
    Status(u16),
    /// Never respond.
    Pending,
}

/// Transport that records requests and answers from a script.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<EncodedRequest>>,
}

impl MockTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self { replies: Mutex::new(replies.into_iter().collect()), requests: Mutex::default() }
    }

    pub fn with_bodies<'a>(bodies: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(bodies.into_iter().map(|body| Reply::Body(body.to_owned())))
    }

    pub fn requests(&self) -> MutexGuard<'_, Vec<EncodedRequest>> {
        self.requests.lock().unwrap()
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

impl Transport for MockTransport {
    async fn submit<'a>(&'a self, request: &'a EncodedRequest) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Body(body)) => Ok(body.into_bytes()),
            Some(Reply::Status(status)) => Err(Error::UnexpectedStatus(status)),
            Some(Reply::Pending) => std::future::pending().await,
            None => panic!("mock transport has no reply left for {}", request.url),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "mock"
    }
}

pub fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    init_tracing();
    ApiClient::new(transport, DefaultHostsProvider::new().unwrap())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
