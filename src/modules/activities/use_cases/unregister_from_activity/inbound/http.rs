use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::activities::use_cases::errors::ErrorDetail;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http::{
    EmailParams, MessageResponse,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> impl IntoResponse {
    let Ok(Query(params)) = params else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDetail::new("email query parameter is required")),
        )
            .into_response();
    };

    let command = UnregisterFromActivity {
        activity_name,
        email: params.email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(err) => err.into_response(),
    }
}
