pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::note::Note;
use crate::models::user::User;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: Option<String>,
    pub author_id: i64,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;
    /// Used by bootstrap seeding; there is no registration endpoint.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, StoreError>;
    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Note>, StoreError>;
    async fn insert(&self, note: NewNote) -> Result<Note, StoreError>;
    /// Title and content only; `author_id` is immutable post-creation.
    async fn update_fields(
        &self,
        id: i64,
        title: &str,
        content: Option<&str>,
    ) -> Result<Option<Note>, StoreError>;
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
