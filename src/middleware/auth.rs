use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::token::TokenError;
use crate::error::ApiError;
use crate::models::note::Note;
use crate::models::user::User;
use crate::AppState;

/// Extractor for authenticated requests: validates the bearer token, then
/// resolves the subject against the credential store on every request.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let state = state.clone();
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        async move {
            let header = auth_header.ok_or(ApiError::InvalidToken)?;
            let token = header.strip_prefix("Bearer ").ok_or(ApiError::InvalidToken)?;

            let subject = state.tokens.validate(token).map_err(|e| match e {
                TokenError::Expired => ApiError::TokenExpired,
                TokenError::Invalid => ApiError::InvalidToken,
            })?;

            // A structurally valid token can still name a since-deleted account.
            let user = state
                .users
                .get_by_username(&subject)
                .await?
                .ok_or(ApiError::UserNotFound)?;

            Ok(AuthUser(user))
        }
    }
}

/// Ownership check: a note is accessible only to its author. There is no
/// admin bypass; every account is bound by the same rule.
pub fn authorize_note_access(
    user: &User,
    note: &Note,
    action: &'static str,
) -> Result<(), ApiError> {
    if note.author_id == user.id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(action))
    }
}
