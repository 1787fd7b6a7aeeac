use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SPELLER_URL: &str =
    "https://speller.yandex.net/services/spellservice.json/checkText";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingIssue {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Tagged outcome of a provider round-trip. A provider failure is a
/// `SpellCheckError`, never `Clean` — callers must not accept unchecked
/// content because the provider was down.
#[derive(Debug, PartialEq, Eq)]
pub enum SpellVerdict {
    Clean,
    Issues(Vec<SpellingIssue>),
}

#[derive(Debug, Error)]
pub enum SpellCheckError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {0}")]
    Status(StatusCode),
}

/// Provider wire shape: `[{"word": "...", "s": ["...", ...]}, ...]`.
#[derive(Debug, Deserialize)]
struct ProviderIssue {
    word: String,
    #[serde(rename = "s")]
    suggestions: Vec<String>,
}

#[derive(Clone)]
pub struct SpellChecker {
    client: Client,
    endpoint: String,
}

impl SpellChecker {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub async fn check(&self, text: &str) -> Result<SpellVerdict, SpellCheckError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .form(&[("text", text)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("spell-check provider returned {status}");
            return Err(SpellCheckError::Status(status));
        }

        let issues: Vec<ProviderIssue> = resp.json().await?;
        if issues.is_empty() {
            Ok(SpellVerdict::Clean)
        } else {
            Ok(SpellVerdict::Issues(
                issues
                    .into_iter()
                    .map(|i| SpellingIssue {
                        word: i.word,
                        suggestions: i.suggestions,
                    })
                    .collect(),
            ))
        }
    }
}

/// Join flagged words into one human-readable message, e.g.
/// `teh (the); wrod (word, world)`.
pub fn describe_issues(issues: &[SpellingIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{} ({})", i.word, i.suggestions.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
