pub mod auth;
pub mod notes;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/docs") }))
        .merge(auth::router())
        .merge(notes::router())
        .with_state(state)
}
