use tracing::info;

use crate::merge::{merge_articles, MergeOptions};
use crate::render::{bilingual, monolingual, RenderOptions};
use crate::{parse_article, ArticleError};

/// Result of merging two monolingual documents.
#[derive(Debug, Clone)]
pub struct MergedDocument {
    pub json: String,
    pub section_count: usize,
}

pub fn json_to_html(json_str: &str) -> Result<String, ArticleError> {
    let article = parse_article(json_str)?;
    let html = monolingual::render_article(&article);
    info!("Rendered {} sections into {} characters", article.sections.len(), html.chars().count());
    Ok(html)
}

pub fn json_to_bilingual_html(json_str: &str, options: &RenderOptions) -> Result<String, ArticleError> {
    let article = parse_article(json_str)?;
    let html = bilingual::render_article(&article, options);
    info!(
        "Rendered {} bilingual sections into {} characters",
        article.sections.len(),
        html.chars().count()
    );
    Ok(html)
}

pub fn merge_json(
    english_str: &str,
    korean_str: &str,
    options: &MergeOptions,
) -> Result<MergedDocument, ArticleError> {
    let english = parse_article(english_str)?;
    let korean = parse_article(korean_str)?;
    let merged = merge_articles(&english, &korean, options)?;

    let mut json = serde_json::to_string_pretty(&merged).map_err(ArticleError::Serialize)?;
    json.push('\n');

    Ok(MergedDocument {
        json,
        section_count: merged.sections.len(),
    })
}
