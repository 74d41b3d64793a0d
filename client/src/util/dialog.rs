//! Async replacement for blocking `confirm`/`prompt` dialogs.
//!
//! DESIGN
//! ======
//! A workflow asks for input by opening a request on `DialogChannel` and
//! awaiting the returned one-shot receiver. `DialogHost` renders whatever
//! request is current and resolves it from the user's click. Only one dialog
//! is open at a time: opening a new one drops the previous sender, which the
//! waiting workflow observes as "declined".

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use std::future::Future;

use futures::channel::oneshot;
use leptos::prelude::*;

/// What the user is being asked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogRequest {
    Confirm { message: String },
    Prompt { message: String, default: String },
}

impl DialogRequest {
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt { .. })
    }

    /// Answer recorded when the dialog is dismissed without accepting.
    pub fn cancel_response(&self) -> DialogResponse {
        match self {
            Self::Confirm { .. } => DialogResponse::Confirmed(false),
            Self::Prompt { .. } => DialogResponse::Text(None),
        }
    }
}

/// How the user answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogResponse {
    Confirmed(bool),
    /// `None` when the prompt was cancelled.
    Text(Option<String>),
}

#[derive(Debug)]
struct PendingDialog {
    id: u64,
    request: DialogRequest,
    reply: oneshot::Sender<DialogResponse>,
}

/// The single open dialog, if any.
#[derive(Debug, Default)]
pub struct DialogChannel {
    next_id: u64,
    pending: Option<PendingDialog>,
}

impl DialogChannel {
    /// Open `request`, replacing (and thereby cancelling) any open dialog.
    pub fn open(&mut self, request: DialogRequest) -> oneshot::Receiver<DialogResponse> {
        let (reply, rx) = oneshot::channel();
        self.next_id += 1;
        self.pending = Some(PendingDialog { id: self.next_id, request, reply });
        rx
    }

    /// Id and contents of the open dialog.
    pub fn current(&self) -> Option<(u64, &DialogRequest)> {
        self.pending.as_ref().map(|p| (p.id, &p.request))
    }

    /// Answer the open dialog. Returns `false` if nothing was waiting.
    pub fn resolve(&mut self, response: DialogResponse) -> bool {
        match self.pending.take() {
            Some(pending) => pending.reply.send(response).is_ok(),
            None => false,
        }
    }
}

/// Await a confirm answer; a dropped dialog counts as declined.
pub async fn confirmed(rx: oneshot::Receiver<DialogResponse>) -> bool {
    matches!(rx.await, Ok(DialogResponse::Confirmed(true)))
}

/// Await a prompt answer; a dropped dialog counts as cancelled.
pub async fn prompted(rx: oneshot::Receiver<DialogResponse>) -> Option<String> {
    match rx.await {
        Ok(DialogResponse::Text(text)) => text,
        _ => None,
    }
}

/// Interactive confirmation and text entry.
pub trait Dialogs {
    fn confirm(&self, message: &str) -> impl Future<Output = bool>;
    fn prompt(&self, message: &str, default: &str) -> impl Future<Output = Option<String>>;
}

/// Context handle onto the app's `DialogChannel`.
#[derive(Clone, Copy)]
pub struct DialogHandle {
    pub channel: RwSignal<DialogChannel>,
}

impl DialogHandle {
    pub fn new() -> Self {
        Self { channel: RwSignal::new(DialogChannel::default()) }
    }

    pub fn resolve(&self, response: DialogResponse) {
        self.channel.update(|c| {
            c.resolve(response);
        });
    }
}

impl Default for DialogHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialogs for DialogHandle {
    fn confirm(&self, message: &str) -> impl Future<Output = bool> {
        let request = DialogRequest::Confirm { message: message.to_owned() };
        let rx = self.channel.try_update(|c| c.open(request));
        async move {
            match rx {
                Some(rx) => confirmed(rx).await,
                None => false,
            }
        }
    }

    fn prompt(&self, message: &str, default: &str) -> impl Future<Output = Option<String>> {
        let request = DialogRequest::Prompt { message: message.to_owned(), default: default.to_owned() };
        let rx = self.channel.try_update(|c| c.open(request));
        async move {
            match rx {
                Some(rx) => prompted(rx).await,
                None => None,
            }
        }
    }
}
