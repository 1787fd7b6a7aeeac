pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod spellcheck;
pub mod store;

use std::sync::Arc;

use auth::password::CredentialHasher;
use auth::token::TokenService;
use spellcheck::SpellChecker;
use store::{CredentialStore, NoteStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn CredentialStore>,
    pub notes: Arc<dyn NoteStore>,
    pub tokens: TokenService,
    pub hasher: CredentialHasher,
    pub speller: SpellChecker,
}
