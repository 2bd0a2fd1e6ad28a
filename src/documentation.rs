//! Docstring normalization and light HTML rendering.
//!
//! Documentation is free-form prose following the `Args:` / `Returns:`
//! convention. [`clean`] recovers the section structure as line breaks and
//! [`beautify`] turns that into headings, emphasized labels and links. This
//! is structural recovery, not a documentation-language parser.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Words followed by a colon that never start a section.
const NON_SECTION_LABELS: [&str; 6] = ["Credit", "http", "https", "by", "Mustache", "article"];

static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"));

static LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?P<word>\w+):").expect("Invalid label regex pattern"));

static LINE_LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n(?P<label>(?P<word>\w+):)").expect("Invalid line label regex pattern")
});

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s"<>]+"#).expect("Invalid URL regex pattern"));

fn is_section_label(word: &str) -> bool {
    !NON_SECTION_LABELS.contains(&word)
}

/// Collapses whitespace and puts every section label on its own line.
///
/// # Examples
///
/// ```rust
/// use function_api::documentation::clean;
///
/// let text = clean("Rule of 72.\n\n    Args:\n        rate: yearly rate\n\n    Returns:\n        Years.");
/// assert_eq!(text, "Rule of 72. \n\nArgs:\nrate: yearly rate \n\nReturns:\nYears.");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    let collapsed = WHITESPACE_PATTERN.replace_all(text, " ");
    let sectioned = LABEL_PATTERN.replace_all(collapsed.trim(), |captures: &Captures<'_>| {
        if is_section_label(&captures["word"]) {
            format!("\n{}", &captures[0])
        } else {
            captures[0].to_string()
        }
    });
    sectioned
        .replace("Args: ", "\nArgs:")
        .replace("Returns: ", "\nReturns:\n")
}

/// Renders cleaned documentation as HTML.
///
/// Absent or empty input yields an empty string.
///
/// # Examples
///
/// ```rust
/// use function_api::documentation::{beautify, clean};
///
/// assert_eq!(beautify(None), "");
/// assert_eq!(beautify(Some("")), "");
///
/// let html = beautify(Some(&clean("See https://example.com Args: x: a value")));
/// assert!(html.starts_with("<h3>Usage:</h3>\n"));
/// assert!(html.contains(r#"<a href="https://example.com">https://example.com</a>"#));
/// assert!(html.contains("<h3>Args:</h3>"));
/// assert!(html.contains("<strong>x:</strong>"));
/// ```
#[must_use]
pub fn beautify(text: Option<&str>) -> String {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return String::new();
    };

    let headed = escape_and_link(text)
        .replace("Args:", "<h3>Args:</h3>")
        .replace("Returns:", "<h3>Returns:</h3>");
    let emphasized = LINE_LABEL_PATTERN.replace_all(&headed, |captures: &Captures<'_>| {
        if is_section_label(&captures["word"]) {
            format!("\n<strong>{}</strong>", &captures["label"])
        } else {
            captures[0].to_string()
        }
    });

    format!("<h3>Usage:</h3>\n{emphasized}")
}

/// Produces the help text for one function.
#[must_use]
pub fn render(documentation: Option<&str>, html: bool) -> String {
    let cleaned = clean(documentation.unwrap_or_default());
    if html { beautify(Some(&cleaned)) } else { cleaned }
}

/// Escapes `text`, turning each bare URL into an anchor.
///
/// URLs are matched before escaping so that neighbouring markup characters
/// never become part of a link.
fn escape_and_link(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    let mut rest = 0;
    for url in URL_PATTERN.find_iter(text) {
        html.push_str(&escape_html(&text[rest..url.start()]));
        let href = escape_html(url.as_str());
        html.push_str(&format!(r#"<a href="{href}">{href}</a>"#));
        rest = url.end();
    }
    html.push_str(&escape_html(&text[rest..]));
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
