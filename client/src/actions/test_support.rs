//! Fakes for driving workflows natively.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::net::api::{ApiError, ApiRequest, ApiResponse, Catalog, Transport};
use crate::util::dialog::Dialogs;

/// Records every request and answers from a scripted queue.
///
/// An exhausted queue answers `Transport("no scripted response")`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl RecordingTransport {
    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
    }
}

pub fn catalog(transport: RecordingTransport) -> Catalog<RecordingTransport> {
    Catalog::new(transport)
}

/// Answers dialogs from scripted queues and records what was asked.
#[derive(Default)]
pub struct ScriptedDialogs {
    confirms: RefCell<VecDeque<bool>>,
    prompts: RefCell<VecDeque<Option<String>>>,
    pub asked: RefCell<Vec<(String, Option<String>)>>,
}

impl ScriptedDialogs {
    pub fn confirming(answer: bool) -> Self {
        let dialogs = Self::default();
        dialogs.confirms.borrow_mut().push_back(answer);
        dialogs
    }

    pub fn prompting(answers: &[Option<&str>]) -> Self {
        let dialogs = Self::default();
        dialogs.prompts.borrow_mut().extend(answers.iter().map(|a| a.map(str::to_owned)));
        dialogs
    }
}

impl Dialogs for ScriptedDialogs {
    async fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push((message.to_owned(), None));
        self.confirms.borrow_mut().pop_front().unwrap_or(false)
    }

    async fn prompt(&self, message: &str, default: &str) -> Option<String> {
        self.asked.borrow_mut().push((message.to_owned(), Some(default.to_owned())));
        self.prompts.borrow_mut().pop_front().flatten()
    }
}
