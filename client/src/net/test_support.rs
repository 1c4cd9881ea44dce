//! Scripted transport for gateway and API tests.

use std::sync::{Mutex, PoisonError};

use super::transport::{ApiRequest, HttpTransport, RawResponse, TransportError};

#[derive(Clone, Debug)]
pub enum Reply {
    Respond(u16, String),
    Unreachable,
    BodyError,
    Hang,
}

/// Records every request and answers with a fixed reply.
#[derive(Debug)]
pub struct FakeTransport {
    reply: Reply,
    seen: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new(reply: Reply) -> Self {
        Self { reply, seen: Mutex::new(Vec::new()) }
    }

    pub fn respond(status: u16, body: &str) -> Self {
        Self::new(Reply::Respond(status, body.to_owned()))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        match &self.reply {
            Reply::Respond(status, body) => Ok(RawResponse { status: *status, body: body.clone() }),
            Reply::Unreachable => Err(TransportError::Unreachable("connection refused".to_owned())),
            Reply::BodyError => Err(TransportError::Body("stream reset".to_owned())),
            Reply::Hang => std::future::pending().await,
        }
    }
}
