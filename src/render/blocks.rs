//! Body blocks shared by both pages. A page decides how a text field and the
//! opening quote are written; the markup and ordering around them is common.

use tracing::{debug, warn};

use super::html::element;
use crate::article::{
    present, Article, BonusSection, Highlight, InterviewContext, KnowledgeItem, OpeningInsight,
    Section, Statistics, Text,
};

pub(crate) trait PageStyle {
    /// Markup for a text field; `class` names the field for bilingual spans.
    fn text(&self, class: &str, text: &Text) -> String;

    fn opening_insight(&self, insight: &OpeningInsight) -> String;
}

/// Everything between the hero and the footer, in document order. Blocks
/// positioned `after_section_<N>` follow the N-th section (1-based index).
pub(crate) fn render_body(article: &Article, style: &impl PageStyle) -> String {
    let mut output = String::new();
    let mut block = |html: String| {
        output.push('\n');
        output.push_str(&html);
    };

    if let Some(insight) = article.opening_insight() {
        block(style.opening_insight(insight));
    }
    if let Some(context) = article.interview_context() {
        block(render_interview_context(context, style));
    }

    for (idx, section) in article.sections.iter().enumerate() {
        let number = idx + 1;
        debug!("Rendering section {} ({})", number, section.display_number());
        block(render_section(section, style));

        for highlight in article.highlights_after(number) {
            block(render_highlight(highlight, style));
        }
        if let Some(stats) = article.statistics_after(number) {
            block(render_statistics(stats, style));
        }
    }

    for position in article.unplaced_positions() {
        warn!("No section matches position '{}', block skipped", position);
    }

    if let Some(bonus) = article.bonus_section() {
        block(render_bonus_section(bonus, style));
    }

    output
}

fn render_interview_context(context: &InterviewContext, style: &impl PageStyle) -> String {
    let mut output = String::from("<div class=\"interview-context\">\n");
    output.push_str(&element("  ", "h3", "context-title", &style.text("context-title-text", &context.title)));
    output.push_str(&element("  ", "p", "context-text", &style.text("context-body", &context.text)));
    output.push_str("</div>\n");
    output
}

/// Question and answer lines, followed by the follow-ups when present.
fn render_qa(
    output: &mut String,
    indent: &str,
    question: &Text,
    answer: &Text,
    follow_ups: (&Option<Text>, &Option<Text>),
    style: &impl PageStyle,
) {
    output.push_str(&element(indent, "p", "question", &style.text("question-text", question)));
    output.push_str(&element(indent, "div", "answer", &style.text("answer-text", answer)));
    if let Some(q) = present(follow_ups.0) {
        output.push_str(&element(indent, "p", "question follow-up", &style.text("follow-up-question", q)));
    }
    if let Some(a) = present(follow_ups.1) {
        output.push_str(&element(indent, "div", "answer follow-up", &style.text("follow-up-answer", a)));
    }
}

fn render_section(section: &Section, style: &impl PageStyle) -> String {
    let number = section.display_number();
    let mut output = format!(
        "<section class=\"interview-section layout-{}\" id=\"section-{}\">\n",
        section.layout, number
    );
    output.push_str("  <div class=\"section-header\">\n");
    output.push_str(&element("    ", "span", "section-number", &number));
    output.push_str(&element("    ", "h2", "section-title", &style.text("section-title-text", &section.title)));
    output.push_str("  </div>\n");
    output.push_str("  <div class=\"section-body\">\n");
    output.push_str("    <div class=\"interview-qa\">\n");
    render_qa(
        &mut output,
        "      ",
        &section.question,
        &section.answer,
        (&section.follow_up_question, &section.follow_up_answer),
        style,
    );
    output.push_str("    </div>\n");

    if !section.knowledge_items.is_empty() {
        output.push_str("    <aside class=\"knowledge-box\">\n");
        for item in &section.knowledge_items {
            output.push_str(&render_knowledge_item(item, style));
        }
        output.push_str("    </aside>\n");
    }

    output.push_str("  </div>\n");
    output.push_str("</section>\n");
    output
}

fn render_knowledge_item(item: &KnowledgeItem, style: &impl PageStyle) -> String {
    let term = format!("{} <span class=\"term-en\">{}</span>", item.term_ko, item.term_en);
    let mut output = String::from("      <div class=\"knowledge-item\">\n");
    output.push_str(&element("        ", "h4", "knowledge-term", &term));
    output.push_str(&element(
        "        ",
        "p",
        "knowledge-description",
        &style.text("knowledge-description-text", &item.description),
    ));
    output.push_str("      </div>\n");
    output
}

fn render_highlight(highlight: &Highlight, style: &impl PageStyle) -> String {
    let mut output = String::from("<div class=\"highlight-box\">\n");
    output.push_str(&element("  ", "p", "highlight-text", &style.text("highlight-quote", &highlight.text)));
    if let Some(author) = present(&highlight.author) {
        output.push_str(&element("  ", "span", "highlight-author", &style.text("highlight-author-name", author)));
    }
    output.push_str("</div>\n");
    output
}

fn render_statistics(stats: &Statistics, style: &impl PageStyle) -> String {
    let mut output = String::from("<div class=\"statistics-grid\">\n");
    if let Some(title) = present(&stats.title) {
        output.push_str(&element("  ", "h3", "statistics-title", &style.text("statistics-title-text", title)));
    }
    for item in &stats.items {
        output.push_str("  <div class=\"stat-item\">\n");
        output.push_str(&element("    ", "span", "stat-value", &item.display_value()));
        output.push_str(&element("    ", "span", "stat-label", &style.text("stat-label-text", &item.label)));
        output.push_str("  </div>\n");
    }
    output.push_str("</div>\n");
    output
}

fn render_bonus_section(bonus: &BonusSection, style: &impl PageStyle) -> String {
    let mut output = String::from("<section class=\"bonus-section\">\n");
    output.push_str(&element("  ", "h2", "bonus-title", &style.text("bonus-title-text", &bonus.title)));
    render_qa(
        &mut output,
        "  ",
        &bonus.question,
        &bonus.answer,
        (&bonus.follow_up_question, &bonus.follow_up_answer),
        style,
    );
    output.push_str("</section>\n");
    output
}
