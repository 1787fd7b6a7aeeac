use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::user::{LoginForm, TokenResponse, UserOut};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(login_for_access_token))
        .route("/users/me", get(current_user_info))
}

#[utoipa::path(
    post,
    path = "/token",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password", body = crate::error::ErrorBody),
    ),
    tag = "Auth"
)]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .users
        .get_by_username(&form.username)
        .await?
        .filter(|u| state.hasher.verify(&form.password, &u.password_hash))
        .ok_or(ApiError::BadCredentials)?;

    let access_token = state
        .tokens
        .issue(&user.username)
        .map_err(|e| ApiError::Internal(format!("failed to sign token: {e}")))?;

    tracing::debug!("issued token for {}", user.username);
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Authenticated user", body = UserOut),
        (status = 401, description = "Missing, invalid or expired token", body = crate::error::ErrorBody),
        (status = 404, description = "Token subject no longer exists", body = crate::error::ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Auth"
)]
pub async fn current_user_info(AuthUser(user): AuthUser) -> Json<UserOut> {
    Json(user.into())
}
