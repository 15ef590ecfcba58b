use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Map, Value};

use crate::modules::activities::use_cases::errors::ErrorDetail;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let activities = match state.queries.list_activities().await {
        Ok(activities) => activities,
        Err(err) => {
            tracing::error!(error = %err, "listing activities failed");
            return internal_error();
        }
    };

    let mut body = Map::with_capacity(activities.len());
    for view in activities {
        let name = view.name.clone();
        match serde_json::to_value(view) {
            Ok(value) => {
                body.insert(name, value);
            }
            Err(err) => {
                tracing::error!(error = %err, "serializing activity failed");
                return internal_error();
            }
        }
    }
    Json(Value::Object(body)).into_response()
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDetail::new("Internal server error")),
    )
        .into_response()
}
