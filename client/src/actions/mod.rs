//! Async workflows behind the console's buttons and forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each workflow is generic over `Transport` (and `Dialogs` when it asks the
//! user something) and returns plain data. Components apply the result to
//! signals and raise notices, so every request sequence here runs natively
//! against fakes.

pub mod categories;
pub mod products;
pub mod refresh;
pub mod storefront;

#[cfg(test)]
pub(crate) mod test_support;

use crate::net::api::ApiError;
use crate::state::forms::FormError;

/// Failure of a workflow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl ActionError {
    /// Message shown to the user for a failed `action`.
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Form(e) => format!("{action}: {e}"),
            Self::Api(e) => e.user_message(action),
            Self::NotFound(what) => format!("{what} not found"),
        }
    }
}

/// Result of a workflow the user may abort at a dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Cancelled,
    Completed(T),
}
