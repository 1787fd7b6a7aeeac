use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::note::Note;
use crate::models::user::User;
use crate::store::{CredentialStore, NewNote, NewUser, NoteStore, StoreError};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, username, email, password_hash",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}

#[async_trait]
impl NoteStore for PgStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, author_id FROM notes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, author_id FROM notes
             WHERE author_id = $1 ORDER BY id",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, content, author_id)
             VALUES ($1, $2, $3)
             RETURNING id, title, content, author_id",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.author_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(note)
    }

    async fn update_fields(
        &self,
        id: i64,
        title: &str,
        content: Option<&str>,
    ) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = $2, content = $3 WHERE id = $1
             RETURNING id, title, content, author_id",
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
