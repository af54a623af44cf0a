//! Shared test fakes: scripted transport, recording navigator, fixtures.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::{Value, json};

use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::net::error::TransportError;
use crate::net::transport::{PreparedRequest, RawResponse, Transport};
use crate::net::types::UserProfile;
use crate::router::navigator::Navigator;
use crate::state::notices::NoticeBoard;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStore;

// =============================================================
// ScriptedTransport
// =============================================================

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<Result<RawResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<PreparedRequest>>>,
}

impl ScriptedTransport {
    pub fn push(&self, response: Result<RawResponse, TransportError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn push_ok(&self, data: Value) {
        self.push(Ok(ok_body(data)));
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> PreparedRequest {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Send("no scripted response".into())))
    }
}

pub fn ok_body(data: Value) -> RawResponse {
    RawResponse { status: 200, body: json!({ "code": 200, "message": "Success", "data": data }).to_string() }
}

pub fn envelope_body(code: i64, message: &str) -> RawResponse {
    RawResponse { status: 200, body: json!({ "code": code, "message": message, "data": null }).to_string() }
}

pub fn status_body(status: u16, body: &str) -> RawResponse {
    RawResponse { status, body: body.to_owned() }
}

// =============================================================
// RecordingNavigator
// =============================================================

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

// =============================================================
// Fixtures
// =============================================================

pub fn profile_json(id: i64, username: &str, role: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "realName": format!("{username} name"),
        "email": format!("{username}@example.com"),
        "userType": "STUDENT",
        "status": "ACTIVE",
        "role": { "id": 1, "name": role, "description": null, "systemRole": true },
        "branchId": 1,
        "createTime": "2024-01-01T00:00:00"
    })
}

pub fn profile(id: i64, username: &str, role: &str) -> UserProfile {
    serde_json::from_value(profile_json(id, username, role)).expect("fixture profile parses")
}

/// Everything wired together over in-memory fakes.
pub struct Harness {
    pub api: ApiClient,
    pub session: SessionStore,
    pub storage: MemoryStore,
    pub transport: ScriptedTransport,
    pub navigator: RecordingNavigator,
    pub notices: NoticeBoard,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(MemoryStore::new())
    }

    pub fn with_storage(storage: MemoryStore) -> Self {
        let session = SessionStore::rehydrate(Rc::new(storage.clone()));
        let transport = ScriptedTransport::default();
        let navigator = RecordingNavigator::default();
        let notices = NoticeBoard::new();
        let api = ApiClient::new(
            ClientConfig::default(),
            Rc::new(transport.clone()),
            session.clone(),
            Rc::new(navigator.clone()),
            Rc::new(notices.clone()),
        );
        Self { api, session, storage, transport, navigator, notices }
    }
}
