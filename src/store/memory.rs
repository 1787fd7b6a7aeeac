use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::note::Note;
use crate::models::user::User;
use crate::store::{CredentialStore, NewNote, NewUser, NoteStore, StoreError};

/// In-process store backed by DashMap. Used by the test suite and usable as
/// a throwaway dev backend; it never returns `StoreError`.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<i64, User>,
    notes: DashMap<i64, Note>,
    next_user_id: AtomicI64,
    next_note_id: AtomicI64,
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.clone()))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(&id).map(|entry| entry.clone()))
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, StoreError> {
        Ok(self.notes.get(&id).map(|entry| entry.clone()))
    }

    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Note>, StoreError> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|entry| entry.author_id == author_id)
            .map(|entry| entry.clone())
            .collect();
        notes.sort_by_key(|n| n.id);
        Ok(notes)
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        let id = self.next_note_id.fetch_add(1, Ordering::SeqCst) + 1;
        let note = Note {
            id,
            title: note.title,
            content: note.content,
            author_id: note.author_id,
        };
        self.notes.insert(id, note.clone());
        Ok(note)
    }

    async fn update_fields(
        &self,
        id: i64,
        title: &str,
        content: Option<&str>,
    ) -> Result<Option<Note>, StoreError> {
        Ok(self.notes.get_mut(&id).map(|mut entry| {
            entry.title = title.to_string();
            entry.content = content.map(|c| c.to_string());
            entry.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.notes.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(author_id: i64, title: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            content: None,
            author_id,
        }
    }

    #[tokio::test]
    async fn users_are_found_by_username_and_id() {
        let store = MemoryStore::default();
        let user = CredentialStore::insert(
            &store,
            NewUser {
                username: "user1".to_string(),
                email: Some("user1@example.com".to_string()),
                password_hash: "digest".to_string(),
            },
        )
        .await
        .unwrap();
        let by_name = store.get_by_username("user1").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        let by_id = CredentialStore::get_by_id(&store, user.id).await.unwrap();
        assert_eq!(by_id.unwrap().username, "user1");
        assert!(store.get_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn notes_are_filtered_by_author() {
        let store = MemoryStore::default();
        NoteStore::insert(&store, new_note(1, "first")).await.unwrap();
        NoteStore::insert(&store, new_note(2, "other author")).await.unwrap();
        NoteStore::insert(&store, new_note(1, "second")).await.unwrap();

        let notes = store.list_by_author(1).await.unwrap();
        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
        assert!(store.list_by_author(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_preserves_author_and_delete_removes() {
        let store = MemoryStore::default();
        let note = NoteStore::insert(&store, new_note(1, "draft")).await.unwrap();

        let updated = store
            .update_fields(note.id, "final", Some("body"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "final");
        assert_eq!(updated.content.as_deref(), Some("body"));
        assert_eq!(updated.author_id, 1);

        assert!(store.delete(note.id).await.unwrap());
        assert!(!store.delete(note.id).await.unwrap());
        assert!(NoteStore::get_by_id(&store, note.id)
            .await
            .unwrap()
            .is_none());
        assert!(store.update_fields(note.id, "x", None).await.unwrap().is_none());
    }
}
