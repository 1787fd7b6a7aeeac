use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Form, Json, Router};

use crate::error::ApiError;
use crate::middleware::auth::{authorize_note_access, AuthUser};
use crate::models::note::{NoteForm, NoteRead, SpellcheckOpt};
use crate::spellcheck::{describe_issues, SpellVerdict};
use crate::store::NewNote;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

fn ensure_title(form: &NoteForm) -> Result<(), ApiError> {
    if form.title.trim().is_empty() {
        return Err(ApiError::Validation("Title must not be empty".to_string()));
    }
    Ok(())
}

/// Run title and content through the gateway; a non-empty verdict aborts the
/// mutation with the flagged words spelled out for the client.
async fn spellcheck_note(state: &AppState, form: &NoteForm) -> Result<(), ApiError> {
    let text = match form.content.as_deref() {
        Some(content) => format!("{} {}", form.title, content),
        None => form.title.clone(),
    };
    match state.speller.check(&text).await? {
        SpellVerdict::Clean => Ok(()),
        SpellVerdict::Issues(issues) => Err(ApiError::Validation(format!(
            "Spelling errors found: {}",
            describe_issues(&issues)
        ))),
    }
}

#[utoipa::path(
    post,
    path = "/notes",
    params(SpellcheckOpt),
    request_body(content = NoteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Note created", body = NoteRead),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorBody),
        (status = 422, description = "Empty title or spelling errors", body = crate::error::ErrorBody),
        (status = 502, description = "Spell-check provider failed", body = crate::error::ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(opts): Query<SpellcheckOpt>,
    Form(form): Form<NoteForm>,
) -> Result<(StatusCode, Json<NoteRead>), ApiError> {
    ensure_title(&form)?;
    if !opts.bypassed() {
        spellcheck_note(&state, &form).await?;
    }

    let note = state
        .notes
        .insert(NewNote {
            title: form.title,
            content: form.content,
            author_id: user.id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NoteRead::with_author(note, &user.username)),
    ))
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Caller's notes, oldest first", body = Vec<NoteRead>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notes"
)]
pub async fn list_notes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<NoteRead>>, ApiError> {
    let notes = state.notes.list_by_author(user.id).await?;
    Ok(Json(
        notes
            .into_iter()
            .map(|n| NoteRead::with_author(n, &user.username))
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(("id" = i64, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note", body = NoteRead),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorBody),
        (status = 403, description = "Owned by another user", body = crate::error::ErrorBody),
        (status = 404, description = "No such note", body = crate::error::ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notes"
)]
pub async fn get_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(note_id): Path<i64>,
) -> Result<Json<NoteRead>, ApiError> {
    let note = state
        .notes
        .get_by_id(note_id)
        .await?
        .ok_or(ApiError::NoteNotFound)?;
    authorize_note_access(&user, &note, "access")?;
    Ok(Json(NoteRead::with_author(note, &user.username)))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(("id" = i64, Path, description = "Note id"), SpellcheckOpt),
    request_body(content = NoteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Updated note", body = NoteRead),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorBody),
        (status = 403, description = "Owned by another user", body = crate::error::ErrorBody),
        (status = 404, description = "No such note", body = crate::error::ErrorBody),
        (status = 422, description = "Empty title or spelling errors", body = crate::error::ErrorBody),
        (status = 502, description = "Spell-check provider failed", body = crate::error::ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notes"
)]
pub async fn update_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(note_id): Path<i64>,
    Query(opts): Query<SpellcheckOpt>,
    Form(form): Form<NoteForm>,
) -> Result<Json<NoteRead>, ApiError> {
    ensure_title(&form)?;
    let note = state
        .notes
        .get_by_id(note_id)
        .await?
        .ok_or(ApiError::NoteNotFound)?;
    authorize_note_access(&user, &note, "update")?;
    if !opts.bypassed() {
        spellcheck_note(&state, &form).await?;
    }

    let updated = state
        .notes
        .update_fields(note.id, &form.title, form.content.as_deref())
        .await?
        .ok_or(ApiError::NoteNotFound)?;

    Ok(Json(NoteRead::with_author(updated, &user.username)))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = i64, Path, description = "Note id")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorBody),
        (status = 403, description = "Owned by another user", body = crate::error::ErrorBody),
        (status = 404, description = "No such note", body = crate::error::ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(note_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let note = state
        .notes
        .get_by_id(note_id)
        .await?
        .ok_or(ApiError::NoteNotFound)?;
    authorize_note_access(&user, &note, "delete")?;
    state.notes.delete(note.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
