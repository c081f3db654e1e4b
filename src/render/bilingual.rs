use super::blocks::{render_body, PageStyle};
use super::html::{bilingual_span, element, front_matter, Include};
use super::RenderOptions;
use crate::article::{present, present_str, Article, Footer, Hero, OpeningInsight, Text};

/// Client-side switcher flipping `.bilingual-text` elements between their
/// `data-en` and `data-ko` values; the choice persists in `localStorage`.
pub const TOGGLE_SCRIPT: &str = include_str!("language_toggle.js");

const TOGGLE_BUTTON: &str = "<button id=\"lang-toggle\" class=\"lang-toggle\" type=\"button\" aria-label=\"Switch language\">\n  <span class=\"lang-option lang-ko active\">KO</span>\n  <span class=\"lang-option lang-en\">EN</span>\n</button>\n";

struct Spans;

impl PageStyle for Spans {
    /// Span for a field, showing the Korean rendering until toggled.
    fn text(&self, class: &str, text: &Text) -> String {
        let (en, ko) = text.pair();
        bilingual_span(class, en, ko, ko)
    }

    /// The opening quote keeps its own convention: `text` is English and
    /// `translation` is Korean.
    fn opening_insight(&self, insight: &OpeningInsight) -> String {
        let en = insight.text.as_str();
        let ko = present_str(&insight.translation).unwrap_or(en);

        let mut output = String::from("<div class=\"opening-insight\">\n");
        output.push_str(&element(
            "  ",
            "blockquote",
            "insight-text",
            &bilingual_span("insight-quote", en, ko, ko),
        ));
        if let Some(source) = present_str(&insight.source) {
            output.push_str(&element("  ", "cite", "insight-source", source));
        }
        if let Some(original_link) = present_str(&insight.original_link) {
            output.push_str(&format!(
                "  <a class=\"insight-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>\n",
                original_link,
                bilingual_span("insight-link-label", "Read original", "원문 보기", "원문 보기")
            ));
        }
        output.push_str("</div>\n");
        output
    }
}

/// Render an article page carrying both languages.
pub fn render_article(article: &Article, options: &RenderOptions) -> String {
    let lang = options.language;
    let mut output = String::new();

    let meta = &article.metadata;
    output.push_str(&front_matter(
        &meta.layout,
        meta.title.resolve(lang),
        meta.description.resolve(lang),
        &meta.date,
    ));
    output.push('\n');
    output.push_str(TOGGLE_BUTTON);
    output.push('\n');
    output.push_str(&render_hero(&article.hero, options));
    output.push_str(&render_body(article, &Spans));
    output.push('\n');
    output.push_str(&render_footer(&article.footer));
    output.push('\n');
    output.push_str("<script>\n");
    output.push_str(TOGGLE_SCRIPT);
    output.push_str("</script>\n");
    output
}

fn render_hero(hero: &Hero, options: &RenderOptions) -> String {
    let (title_en, title_ko) = hero.title.pair();
    let (subtitle_en, subtitle_ko) = hero.subtitle.pair();
    let category = present(&hero.category).map(Text::pair);

    Include::new("hero-split-bilingual.html")
        .param("title_en", title_en)
        .param("title_ko", title_ko)
        .param("subtitle_en", subtitle_en)
        .param("subtitle_ko", subtitle_ko)
        .param("image", &hero.image)
        .param_opt(
            "image_alt",
            hero.image_alt.as_ref().map(|t| t.resolve(options.language)),
        )
        .param_opt("category_en", category.map(|(en, _)| en))
        .param_opt("category_ko", category.map(|(_, ko)| ko))
        .param("guest_name", &hero.guest.name)
        .param("guest_title", &hero.guest.title)
        .param_opt("guest_image", hero.guest.image.as_deref())
        .render()
}

fn render_footer(footer: &Footer) -> String {
    let mut output = String::from("<footer class=\"article-footer\">\n");
    output.push_str(&element("  ", "p", "footer-meta", &Spans.text("footer-meta-text", &footer.meta_text)));
    if let Some(credits) = present(&footer.credits) {
        output.push_str(&element("  ", "p", "footer-credits", &Spans.text("footer-credits-text", credits)));
    }
    output.push_str("</footer>\n");
    output
}
