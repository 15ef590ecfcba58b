use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::config::Config;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity_name}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_http::handle),
        )
        .with_state(state)
}

/// Full application: the activities API plus the frontend, GraphQL and middleware.
pub fn app(state: AppState, config: &Config) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/graphql", get(graphql::graphiql).post(graphql::graphql))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .merge(router(state))
        .layer(Extension(schema))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if origins.is_empty() {
        return CorsLayer::new();
    }
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}
