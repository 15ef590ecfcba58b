use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::activities::core::ports::StoreError;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::SignUpRejected;
use crate::modules::activities::use_cases::unregister_from_activity::decision::UnregisterRejected;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound { activity_name: String },

    #[error(transparent)]
    SignUpRejected(#[from] SignUpRejected),

    #[error(transparent)]
    UnregisterRejected(#[from] UnregisterRejected),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl ApplicationError {
    /// Message safe to hand to any client; store failures are logged and hidden.
    pub fn client_message(&self) -> String {
        match self {
            Self::ActivityNotFound { activity_name } => {
                tracing::debug!(activity = %activity_name, "activity not found");
                self.to_string()
            }
            Self::SignUpRejected(_) | Self::UnregisterRejected(_) => self.to_string(),
            Self::Store(err) => {
                tracing::error!(error = %err, "activity store error");
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ActivityNotFound { .. } => StatusCode::NOT_FOUND,
            Self::SignUpRejected(_) | Self::UnregisterRejected(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorDetail::new(self.client_message()))).into_response()
    }
}
