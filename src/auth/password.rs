use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};

/// Argon2id hasher, constructed once at startup and shared through `AppState`.
#[derive(Clone, Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password with a fresh random salt. Returns a
    /// PHC-format string suitable for the `password_hash` column.
    pub fn hash(&self, plaintext: &str) -> Result<String, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)?
            .to_string())
    }

    /// Verify a plaintext against a stored digest. A malformed digest is a
    /// mismatch, never an error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        PasswordHash::new(digest)
            .map(|parsed| {
                self.argon2
                    .verify_password(plaintext.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
