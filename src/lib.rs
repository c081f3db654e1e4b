pub mod article;
pub mod converter;
pub mod merge;
pub mod render;

#[cfg(feature = "cli")]
pub mod cli;

use std::path::PathBuf;

use serde_json::error::Category;

pub use article::{Article, Language, Text};
pub use converter::{json_to_bilingual_html, json_to_html, merge_json, MergedDocument};
pub use merge::{merge_articles, MergeOptions};
pub use render::RenderOptions;

/// Error type for article conversion and merging
#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    #[error("{0}")]
    Usage(String),

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// A required key is missing or holds the wrong kind of value.
    #[error("Missing or invalid field: {message}")]
    MissingField { message: String },

    #[error("Missing '{group}' in the {side} document")]
    MissingGroup { group: &'static str, side: Language },

    #[error("{what} differ in length: english has {english}, korean has {korean}")]
    LengthMismatch {
        what: &'static str,
        english: usize,
        korean: usize,
    },

    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<serde_json::Error> for ArticleError {
    fn from(source: serde_json::Error) -> Self {
        match source.classify() {
            Category::Data => ArticleError::MissingField {
                message: source.to_string(),
            },
            Category::Syntax | Category::Eof | Category::Io => ArticleError::InvalidJson { source },
        }
    }
}

/// Parse an article document
///
/// # Arguments
/// * `json_data` - The article as a JSON string
///
/// # Returns
/// * `Ok(Article)` - The typed document
/// * `Err(ArticleError)` - `InvalidJson` for malformed input, `MissingField`
///   when a required key is absent
pub fn parse_article(json_data: &str) -> Result<Article, ArticleError> {
    Ok(serde_json::from_str(json_data)?)
}
