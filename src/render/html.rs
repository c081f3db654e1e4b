/// Escape the characters that break out of a double-quoted HTML attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Double-quoted YAML scalar.
pub fn yaml_quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Jekyll front matter block. `title` and `description` are free text and are
/// always written as quoted scalars; `layout` is a template name and `date`
/// must stay a plain scalar so YAML reads it as a timestamp.
pub fn front_matter(layout: &str, title: &str, description: &str, date: &str) -> String {
    let mut output = String::from("---\n");
    output.push_str(&format!("layout: {}\n", layout));
    output.push_str(&format!("title: {}\n", yaml_quote(title)));
    output.push_str(&format!("description: {}\n", yaml_quote(description)));
    output.push_str(&format!("date: {}\n", date));
    output.push_str("---\n");
    output
}

/// One indented `<tag class="...">inner</tag>` line.
pub fn element(indent: &str, tag: &str, class: &str, inner: &str) -> String {
    format!("{indent}<{tag} class=\"{class}\">{inner}</{tag}>\n")
}

/// A `{% include file.html key="value" %}` directive for the site generator.
pub struct Include {
    template: &'static str,
    params: Vec<(&'static str, String)>,
}

impl Include {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: &str) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Adds the parameter only when the value is present and non-empty.
    pub fn param_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.param(key, v),
            _ => self,
        }
    }

    pub fn render(&self) -> String {
        let mut output = format!("{{% include {}", self.template);
        for (key, value) in &self.params {
            output.push_str(&format!(" {}=\"{}\"", key, escape_html(value)));
        }
        output.push_str(" %}\n");
        output
    }
}

/// `<span class="bilingual-text">` carrying both renderings. Attribute values
/// are escaped; the visible text is inserted as-is.
pub fn bilingual_span(class: &str, en: &str, ko: &str, visible: &str) -> String {
    format!(
        "<span class=\"bilingual-text {}\" data-en=\"{}\" data-ko=\"{}\">{}</span>",
        class,
        escape_html(en),
        escape_html(ko),
        visible
    )
}
