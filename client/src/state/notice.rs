//! User-facing notices, shown in a non-blocking bar.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Milliseconds before a success notice dismisses itself.
pub const SUCCESS_DISMISS_MS: u32 = 4_000;

/// Errors stay up longer so they can be read.
pub const ERROR_DISMISS_MS: u32 = 12_000;

/// Most notices shown at once; the oldest is dropped first.
pub const MAX_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn dismiss_after_ms(self) -> u32 {
        match self {
            Self::Success => SUCCESS_DISMISS_MS,
            Self::Error => ERROR_DISMISS_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notices in the order they were raised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id, dropping the oldest past `MAX_NOTICES`.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice { id, kind, message: message.into() });
        let overflow = self.notices.len().saturating_sub(MAX_NOTICES);
        self.notices.drain(..overflow);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message)
    }

    /// Remove a notice. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }
}
