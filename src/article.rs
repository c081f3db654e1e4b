//! Typed article document shared by the converters and the merger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of a bilingual field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    En,
    #[default]
    Ko,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ko" => Ok(Language::Ko),
            other => Err(format!("Unsupported language: {} (expected 'en' or 'ko')", other)),
        }
    }
}

/// A content field that is either a plain string or an `{en, ko}` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Plain(String),
    Bilingual {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        en: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ko: Option<String>,
    },
}

impl Text {
    pub fn bilingual(en: impl Into<String>, ko: impl Into<String>) -> Self {
        Text::Bilingual {
            en: Some(en.into()),
            ko: Some(ko.into()),
        }
    }

    /// Resolve to one language, falling back to the other side when the
    /// requested one is absent or empty.
    pub fn resolve(&self, lang: Language) -> &str {
        match self {
            Text::Plain(s) => s,
            Text::Bilingual { en, ko } => {
                let (wanted, fallback) = match lang {
                    Language::En => (en, ko),
                    Language::Ko => (ko, en),
                };
                non_empty(wanted)
                    .or_else(|| non_empty(fallback))
                    .unwrap_or("")
            }
        }
    }

    /// Both renderings as `(en, ko)`.
    pub fn pair(&self) -> (&str, &str) {
        (self.resolve(Language::En), self.resolve(Language::Ko))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Text::Plain(s) => s.is_empty(),
            Text::Bilingual { en, ko } => non_empty(en).is_none() && non_empty(ko).is_none(),
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::Plain(s.to_string())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// An optional text, if present and non-empty.
pub(crate) fn present(value: &Option<Text>) -> Option<&Text> {
    value.as_ref().filter(|t| !t.is_empty())
}

/// An optional string, if present and non-empty.
pub(crate) fn present_str(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn default_layout() -> String {
    "post".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub metadata: Metadata,
    pub hero: Hero,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_insight: Option<OpeningInsight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_context: Option<InterviewContext>,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Highlight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_section: Option<BonusSection>,
    pub footer: Footer,
}

impl Article {
    pub fn opening_insight(&self) -> Option<&OpeningInsight> {
        self.opening_insight.as_ref().filter(|g| g.enabled)
    }

    pub fn interview_context(&self) -> Option<&InterviewContext> {
        self.interview_context.as_ref().filter(|g| g.enabled)
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref().filter(|g| g.enabled)
    }

    pub fn bonus_section(&self) -> Option<&BonusSection> {
        self.bonus_section.as_ref().filter(|g| g.enabled)
    }

    /// Highlights placed directly after the 1-based section `number`.
    pub fn highlights_after(&self, number: usize) -> impl Iterator<Item = &Highlight> {
        let position = position_after(number);
        self.highlights
            .iter()
            .filter(move |h| h.position == position)
    }

    /// Statistics block, if it is placed directly after section `number`.
    pub fn statistics_after(&self, number: usize) -> Option<&Statistics> {
        self.statistics()
            .filter(|s| s.position == position_after(number))
    }

    /// Positions that reference no section and will not be emitted.
    pub fn unplaced_positions(&self) -> Vec<&str> {
        let placed: Vec<String> = (1..=self.sections.len()).map(position_after).collect();
        let mut unplaced: Vec<&str> = self
            .highlights
            .iter()
            .map(|h| h.position.as_str())
            .filter(|p| !placed.iter().any(|q| q.as_str() == *p))
            .collect();
        if let Some(stats) = self.statistics() {
            if !placed.iter().any(|q| *q == stats.position) {
                unplaced.push(&stats.position);
            }
        }
        unplaced
    }
}

/// Position key for content placed after the 1-based section `number`.
pub fn position_after(number: usize) -> String {
    format!("after_section_{}", number)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Text,
    pub description: Text,
    pub date: String,
    #[serde(default = "default_layout")]
    pub layout: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: Text,
    pub subtitle: Text,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Text>,
    pub guest: Guest,
}

/// Interviewee details; never translated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn enabled_by_default() -> bool {
    true
}

fn is_enabled(enabled: &bool) -> bool {
    *enabled
}

/// Pull quote opening the article. `text` is the English original and
/// `translation` the Korean rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningInsight {
    #[serde(default = "enabled_by_default", skip_serializing_if = "is_enabled")]
    pub enabled: bool,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewContext {
    #[serde(default = "enabled_by_default", skip_serializing_if = "is_enabled")]
    pub enabled: bool,
    pub title: Text,
    pub text: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Shown as written; strings such as `"01"` are kept verbatim.
    pub number: serde_json::Value,
    pub title: Text,
    pub question: Text,
    pub answer: Text,
    pub layout: String,
    pub knowledge_items: Vec<KnowledgeItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_question: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_answer: Option<Text>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub term_ko: String,
    pub term_en: String,
    pub description: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub position: String,
    pub text: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Text>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default = "enabled_by_default", skip_serializing_if = "is_enabled")]
    pub enabled: bool,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    pub items: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    pub value: serde_json::Value,
    pub label: Text,
}

impl StatItem {
    pub fn display_value(&self) -> String {
        display_scalar(&self.value)
    }
}

impl Section {
    pub fn display_number(&self) -> String {
        display_scalar(&self.number)
    }
}

/// Scalar as displayed: strings verbatim, null as empty, anything else via
/// its JSON text.
pub fn display_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusSection {
    #[serde(default = "enabled_by_default", skip_serializing_if = "is_enabled")]
    pub enabled: bool,
    pub title: Text,
    pub question: Text,
    pub answer: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_question: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_answer: Option<Text>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub meta_text: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Text>,
}
