//! # Mock Transport
//!
//! Utilities for testing services and screen controllers in isolation.
//!
//! Use [`MockTransport::new`] to get a scripted transport, queue
//! responses with [`MockTransport::expect`], hand a clone to the code
//! under test, then assert with [`MockTransport::requests`] and
//! [`MockTransport::verify`].
//!
//! # Example
//! ```ignore
//! let mock = MockTransport::new();
//! mock.expect(Method::Get, "products").return_json(json!([]));
//!
//! let service = ProductService::new(Arc::new(mock.clone()));
//! assert!(service.list().await.unwrap().is_empty());
//! mock.verify(); // Ensures all expectations were consumed
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::http::{HttpTransport, Method, TransportError};

/// A scripted response for one expected request.
struct Expectation {
    method: Method,
    path: String,
    response: Result<Value, TransportError>,
}

/// One request as seen by the mock, kept for later assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockInner {
    expectations: Mutex<VecDeque<Expectation>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// A transport that answers from a queue of expectations.
///
/// Expectations are consumed in order. A request that arrives with no
/// queued expectation, or whose method/path does not match the next
/// one, panics. A test that sends an unexpected request is broken and
/// should fail loudly.
///
/// Cloning is cheap and clones share the same queue, so a test keeps
/// one handle for assertions while the code under test owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<MockInner>,
}

impl MockTransport {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an expectation for the next unconsumed request.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            inner: self.inner.clone(),
        }
    }

    /// Every request the mock has served, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let exps = self.inner.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        self.inner.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        let expectation = self.inner.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.method == method && exp.path == path => exp.response,
            Some(exp) => panic!(
                "Unexpected request: got {method} {path}, expected {} {}",
                exp.method, exp.path
            ),
            None => panic!("Unexpected request with no expectation: {method} {path}"),
        }
    }
}

/// Builder binding a response to a queued expectation.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    inner: Arc<MockInner>,
}

impl ExpectationBuilder {
    fn push(self, response: Result<Value, TransportError>) {
        self.inner.expectations.lock().unwrap().push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }

    /// The request succeeds with this JSON body.
    pub fn return_json(self, value: Value) {
        self.push(Ok(value));
    }

    /// The request succeeds with an empty body.
    pub fn return_empty(self) {
        self.push(Ok(Value::Null));
    }

    /// The server answers with a non-2xx status.
    pub fn return_status(self, status: u16) {
        self.push(Err(TransportError::Status {
            status,
            body: String::new(),
        }));
    }

    /// The request never reaches the server.
    pub fn return_network_error(self) {
        self.push(Err(TransportError::Network("connection refused".into())));
    }
}
