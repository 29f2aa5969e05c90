//! In-memory transport for client unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::HideClient;
use crate::error::HideError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it sees.
///
/// Panics if a request arrives with nothing queued.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HideError> {
        self.requests.lock().unwrap().push(request.clone());
        let resp = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued for request");
        Ok(resp)
    }
}

/// Client at `http://hide.test` backed by `fake`, plus a handle for
/// inspecting the requests afterwards.
pub fn client_with(fake: FakeTransport) -> (HideClient, Arc<FakeTransport>) {
    let fake = Arc::new(fake);
    let client = HideClient::with_transport("http://hide.test", Arc::clone(&fake));
    (client, fake)
}
