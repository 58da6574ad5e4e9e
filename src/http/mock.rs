//! Scripted in-memory transport for unit tests

use super::transport::Transport;
use crate::error::{ApiError, Error, Result};
use crate::types::Method;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

/// One recorded request
#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub method: Method,
    pub endpoint: String,
    pub body: Value,
}

impl Call {
    pub fn is(&self, method: Method, endpoint: &str) -> bool {
        self.method == method && self.endpoint == endpoint
    }

    pub fn query(&self) -> &str {
        self.body["query"].as_str().unwrap_or_default()
    }
}

/// What the mock answers with
pub(crate) enum Reply {
    Json(Value),
    Raw(&'static str),
    Fail(Error),
    /// Never completes; used to exercise cancellation of in-flight calls
    Hang,
}

type Responder = Box<dyn Fn(&Call, usize) -> Reply + Send + Sync>;

/// Transport that records calls and answers from a closure.
///
/// The closure receives the call and its zero-based index.
pub(crate) struct MockTransport {
    calls: Mutex<Vec<Call>>,
    responder: Responder,
}

impl MockTransport {
    pub fn new(responder: impl Fn(&Call, usize) -> Reply + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, endpoint: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.is(method, endpoint))
            .count()
    }

    async fn answer(&self, call: Call) -> Result<Bytes> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call.clone());
            calls.len() - 1
        };

        match (self.responder)(&call, index) {
            Reply::Json(value) => Ok(Bytes::from(value.to_string())),
            Reply::Raw(text) => Ok(Bytes::from_static(text.as_bytes())),
            Reply::Fail(err) => Err(err),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// Uploads and downloads are recorded with a JSON stand-in body:
/// `{"fileName", "content"}` for uploads, the query pairs for downloads.
#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Bytes> {
        self.answer(Call {
            method,
            endpoint: endpoint.to_string(),
            body: body.unwrap_or(Value::Null),
        })
        .await
    }

    async fn upload(&self, endpoint: &str, file_name: &str, content: Bytes) -> Result<Bytes> {
        self.answer(Call {
            method: Method::POST,
            endpoint: endpoint.to_string(),
            body: serde_json::json!({
                "fileName": file_name,
                "content": String::from_utf8_lossy(&content),
            }),
        })
        .await
    }

    async fn download(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Bytes> {
        let pairs: Map<String, Value> = query
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::from(*v)))
            .collect();
        self.answer(Call {
            method: Method::GET,
            endpoint: endpoint.to_string(),
            body: Value::Object(pairs),
        })
        .await
    }
}

/// A structured API error as the server would send it
pub(crate) fn api_error(status: u16, code: &str) -> Error {
    Error::Api(ApiError {
        status,
        code: code.to_string(),
        message: format!("mock failure {code}"),
        id: "mock-id".to_string(),
        errors: Map::new(),
    })
}

/// `count` numbered records starting at `first`, shaped like the platform's
pub(crate) fn numbered_records(first: usize, count: usize) -> Vec<Value> {
    (first..first + count)
        .map(|n| serde_json::json!({ "$id": { "type": "__ID__", "value": n.to_string() } }))
        .collect()
}
