//! Nullable transport: scripted responses, recorded requests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use xrpl_rpc::{Transport, TransportError};

/// A request as the client sent it.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Value,
}

/// A transport that answers from a script instead of a node.
///
/// Responses are handed out in order, whatever the method. Once the script runs dry
/// every call fails with [`TransportError::Unreachable`].
#[derive(Default)]
pub struct NullTransport {
    script: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a `result` object for the next call.
    pub fn respond(&self, result: Value) -> &Self {
        self.push(Ok(result))
    }

    /// Enqueue a node-level error (`status: "error"`) for the next call.
    pub fn respond_error(&self, error: &str, error_code: i64, error_message: &str) -> &Self {
        self.push(Ok(serde_json::json!({
            "status": "error",
            "error": error,
            "error_code": error_code,
            "error_message": error_message,
        })))
    }

    /// Enqueue a transport failure for the next call.
    pub fn fail(&self, error: TransportError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, response: Result<Value, TransportError>) -> &Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Scripted responses not consumed yet.
    pub fn pending(&self) -> usize {
        self.script.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn next(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                method: method.to_string(),
                params,
            });
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Unreachable("script exhausted".into())))
    }
}

#[async_trait]
impl Transport for NullTransport {
    async fn invoke(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        self.next(method, params)
    }
}
