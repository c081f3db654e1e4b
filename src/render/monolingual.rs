use super::blocks::{render_body, PageStyle};
use super::html::{element, front_matter, Include};
use crate::article::{present_str, Article, Footer, Hero, Language, OpeningInsight, Text};

const LANG: Language = Language::Ko;

struct Korean;

impl PageStyle for Korean {
    fn text(&self, _class: &str, text: &Text) -> String {
        text.resolve(LANG).to_string()
    }

    fn opening_insight(&self, insight: &OpeningInsight) -> String {
        let mut output = String::from("<div class=\"opening-insight\">\n");
        output.push_str(&element("  ", "blockquote", "insight-text", &insight.text));
        if let Some(translation) = present_str(&insight.translation) {
            output.push_str(&element("  ", "p", "insight-translation", translation));
        }
        if let Some(source) = present_str(&insight.source) {
            output.push_str(&element("  ", "cite", "insight-source", source));
        }
        if let Some(original_link) = present_str(&insight.original_link) {
            output.push_str(&format!(
                "  <a class=\"insight-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">원문 보기</a>\n",
                original_link
            ));
        }
        output.push_str("</div>\n");
        output
    }
}

/// Render a single-language article page.
pub fn render_article(article: &Article) -> String {
    let mut output = String::new();

    let meta = &article.metadata;
    output.push_str(&front_matter(
        &meta.layout,
        meta.title.resolve(LANG),
        meta.description.resolve(LANG),
        &meta.date,
    ));
    output.push('\n');
    output.push_str(&render_hero(&article.hero));
    output.push_str(&render_body(article, &Korean));
    output.push('\n');
    output.push_str(&render_footer(&article.footer));
    output
}

fn render_hero(hero: &Hero) -> String {
    Include::new("hero-split.html")
        .param("title", hero.title.resolve(LANG))
        .param("subtitle", hero.subtitle.resolve(LANG))
        .param("image", &hero.image)
        .param_opt("image_alt", hero.image_alt.as_ref().map(|t| t.resolve(LANG)))
        .param_opt("category", hero.category.as_ref().map(|t| t.resolve(LANG)))
        .param("guest_name", &hero.guest.name)
        .param("guest_title", &hero.guest.title)
        .param_opt("guest_image", hero.guest.image.as_deref())
        .render()
}

fn render_footer(footer: &Footer) -> String {
    Include::new("article-footer.html")
        .param("meta_text", footer.meta_text.resolve(LANG))
        .param_opt("credits", footer.credits.as_ref().map(|t| t.resolve(LANG)))
        .render()
}
