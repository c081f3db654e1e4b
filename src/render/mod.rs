//! HTML fragment generation for the static site.

pub mod bilingual;
mod blocks;
pub mod html;
pub mod monolingual;

use crate::article::Language;

/// Options for the bilingual page.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Language used where only one rendering fits (front matter, image alt).
    /// Visible body text always starts out in Korean.
    pub language: Language,
}
