//! Notification service contract.

use crate::model::session::UserId;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Notification fetch failure.
///
/// Both variants are recovered locally by the synchronizer; they exist so
/// log events can distinguish transport from server trouble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    Network(String),
    Server { message: String },
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(details) => write!(f, "network failure: {details}"),
            Self::Server { message } => write!(f, "server error: {message}"),
        }
    }
}

impl Error for NotifyError {}

/// Remote unread-count endpoint contract.
///
/// Safe to call repeatedly; a user with no notifications yields `Ok(0)`,
/// not an error.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn unread_count(&self, user_id: UserId) -> NotifyResult<u64>;
}
