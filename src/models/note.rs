use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub author_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NoteForm {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SpellcheckOpt {
    /// Skip the external spelling validation for this request.
    pub dont_spellcheck: Option<bool>,
}

impl SpellcheckOpt {
    pub fn bypassed(&self) -> bool {
        self.dont_spellcheck.unwrap_or(false)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteRead {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub author_id: i64,
    pub author_username: String,
}

impl NoteRead {
    /// The note row carries only `author_id`; the username is attached by the
    /// handler, which already holds the resolved author.
    pub fn with_author(note: Note, author_username: &str) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            author_id: note.author_id,
            author_username: author_username.to_string(),
        }
    }
}
