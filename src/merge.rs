//! Zip an English and a Korean article into one bilingual article.
//!
//! Pairing is positional. Structural values (dates, layouts, numbers, guest
//! details, positions, links) always come from the English document.

use tracing::{debug, info, warn};

use crate::article::{
    Article, BonusSection, Footer, Hero, Highlight, InterviewContext, KnowledgeItem, Language,
    Metadata, OpeningInsight, Section, StatItem, Statistics, Text,
};
use crate::ArticleError;

/// Options for the merger.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Drop the excess items of the longer list instead of failing when
    /// paired lists differ in length.
    pub truncate: bool,
}

/// Merge two structurally parallel articles.
pub fn merge_articles(
    english: &Article,
    korean: &Article,
    options: &MergeOptions,
) -> Result<Article, ArticleError> {
    let sections = zip_checked("sections", &english.sections, &korean.sections, options)?
        .map(|(en, ko)| merge_section(en, ko, options))
        .collect::<Result<Vec<_>, _>>()?;

    let highlights = zip_checked("highlights", &english.highlights, &korean.highlights, options)?
        .map(|(en, ko)| merge_highlight(en, ko))
        .collect::<Result<Vec<_>, _>>()?;

    let opening_insight = merge_group(
        "opening_insight",
        english.opening_insight(),
        korean.opening_insight.as_ref(),
        |en, ko| Ok(merge_opening_insight(en, ko)),
    )?;
    let interview_context = merge_group(
        "interview_context",
        english.interview_context(),
        korean.interview_context.as_ref(),
        |en, ko| {
            Ok(InterviewContext {
                enabled: true,
                title: pair(&en.title, &ko.title),
                text: pair(&en.text, &ko.text),
            })
        },
    )?;
    let statistics = merge_group(
        "statistics",
        english.statistics(),
        korean.statistics.as_ref(),
        |en, ko| merge_statistics(en, ko, options),
    )?;
    let bonus_section = merge_group(
        "bonus_section",
        english.bonus_section(),
        korean.bonus_section.as_ref(),
        merge_bonus_section,
    )?;

    info!("Merged {} sections", sections.len());

    Ok(Article {
        metadata: merge_metadata(&english.metadata, &korean.metadata),
        hero: merge_hero(&english.hero, &korean.hero)?,
        opening_insight,
        interview_context,
        sections,
        highlights,
        statistics,
        bonus_section,
        footer: merge_footer(&english.footer, &korean.footer)?,
    })
}

/// `{en, ko}` from the English rendering of one field and the Korean
/// rendering of its counterpart.
fn pair(en: &Text, ko: &Text) -> Text {
    Text::bilingual(en.resolve(Language::En), ko.resolve(Language::Ko))
}

/// Pair an optional field that the English side decides on.
fn pair_optional(
    field: &'static str,
    en: &Option<Text>,
    ko: &Option<Text>,
) -> Result<Option<Text>, ArticleError> {
    match (en, ko) {
        (Some(en), Some(ko)) => Ok(Some(pair(en, ko))),
        (Some(_), None) => Err(ArticleError::MissingGroup {
            group: field,
            side: Language::Ko,
        }),
        (None, _) => Ok(None),
    }
}

/// Merge an optional group the English side enables; the Korean document must
/// then carry it too.
fn merge_group<T>(
    name: &'static str,
    en: Option<&T>,
    ko: Option<&T>,
    merge: impl FnOnce(&T, &T) -> Result<T, ArticleError>,
) -> Result<Option<T>, ArticleError> {
    let Some(en) = en else {
        return Ok(None);
    };
    let ko = ko.ok_or(ArticleError::MissingGroup {
        group: name,
        side: Language::Ko,
    })?;
    merge(en, ko).map(Some)
}

fn zip_checked<'a, T>(
    what: &'static str,
    english: &'a [T],
    korean: &'a [T],
    options: &MergeOptions,
) -> Result<impl Iterator<Item = (&'a T, &'a T)>, ArticleError> {
    if english.len() != korean.len() {
        if !options.truncate {
            return Err(ArticleError::LengthMismatch {
                what,
                english: english.len(),
                korean: korean.len(),
            });
        }
        warn!(
            "{} differ in length (en={}, ko={}), dropping the excess",
            what,
            english.len(),
            korean.len()
        );
    }
    Ok(english.iter().zip(korean.iter()))
}

fn merge_metadata(en: &Metadata, ko: &Metadata) -> Metadata {
    Metadata {
        title: pair(&en.title, &ko.title),
        description: pair(&en.description, &ko.description),
        date: en.date.clone(),
        layout: en.layout.clone(),
    }
}

fn merge_hero(en: &Hero, ko: &Hero) -> Result<Hero, ArticleError> {
    Ok(Hero {
        title: pair(&en.title, &ko.title),
        subtitle: pair(&en.subtitle, &ko.subtitle),
        image: en.image.clone(),
        image_alt: pair_optional("hero.image_alt", &en.image_alt, &ko.image_alt)?,
        category: pair_optional("hero.category", &en.category, &ko.category)?,
        guest: en.guest.clone(),
    })
}

fn merge_opening_insight(en: &OpeningInsight, ko: &OpeningInsight) -> OpeningInsight {
    let translation = ko
        .translation
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| ko.text.clone());
    OpeningInsight {
        enabled: true,
        text: en.text.clone(),
        translation: Some(translation),
        original_link: en.original_link.clone(),
        source: en.source.clone(),
    }
}

fn merge_section(en: &Section, ko: &Section, options: &MergeOptions) -> Result<Section, ArticleError> {
    debug!("Merging section {}", en.display_number());
    let knowledge_items = zip_checked(
        "knowledge_items",
        &en.knowledge_items,
        &ko.knowledge_items,
        options,
    )?
    .map(|(en, ko)| merge_knowledge_item(en, ko))
    .collect();

    Ok(Section {
        number: en.number.clone(),
        title: pair(&en.title, &ko.title),
        question: pair(&en.question, &ko.question),
        answer: pair(&en.answer, &ko.answer),
        layout: en.layout.clone(),
        knowledge_items,
        follow_up_question: pair_optional(
            "follow_up_question",
            &en.follow_up_question,
            &ko.follow_up_question,
        )?,
        follow_up_answer: pair_optional(
            "follow_up_answer",
            &en.follow_up_answer,
            &ko.follow_up_answer,
        )?,
    })
}

/// Both terms come from the English document, `term_ko` included. The Korean
/// document only contributes the description.
fn merge_knowledge_item(en: &KnowledgeItem, ko: &KnowledgeItem) -> KnowledgeItem {
    KnowledgeItem {
        term_ko: en.term_ko.clone(),
        term_en: en.term_en.clone(),
        description: pair(&en.description, &ko.description),
    }
}

fn merge_highlight(en: &Highlight, ko: &Highlight) -> Result<Highlight, ArticleError> {
    Ok(Highlight {
        position: en.position.clone(),
        text: pair(&en.text, &ko.text),
        author: pair_optional("highlights.author", &en.author, &ko.author)?,
    })
}

fn merge_statistics(
    en: &Statistics,
    ko: &Statistics,
    options: &MergeOptions,
) -> Result<Statistics, ArticleError> {
    let items = zip_checked("statistics items", &en.items, &ko.items, options)?
        .map(|(en, ko)| StatItem {
            value: en.value.clone(),
            label: pair(&en.label, &ko.label),
        })
        .collect();

    Ok(Statistics {
        enabled: true,
        position: en.position.clone(),
        title: pair_optional("statistics.title", &en.title, &ko.title)?,
        items,
    })
}

fn merge_bonus_section(en: &BonusSection, ko: &BonusSection) -> Result<BonusSection, ArticleError> {
    Ok(BonusSection {
        enabled: true,
        title: pair(&en.title, &ko.title),
        question: pair(&en.question, &ko.question),
        answer: pair(&en.answer, &ko.answer),
        follow_up_question: pair_optional(
            "bonus_section.follow_up_question",
            &en.follow_up_question,
            &ko.follow_up_question,
        )?,
        follow_up_answer: pair_optional(
            "bonus_section.follow_up_answer",
            &en.follow_up_answer,
            &ko.follow_up_answer,
        )?,
    })
}

fn merge_footer(en: &Footer, ko: &Footer) -> Result<Footer, ArticleError> {
    Ok(Footer {
        meta_text: pair(&en.meta_text, &ko.meta_text),
        credits: pair_optional("footer.credits", &en.credits, &ko.credits)?,
    })
}
