use regex::RegexBuilder;

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// HTML-escapes `text` and wraps every case-insensitive occurrence of each
/// whitespace-separated query term in `<mark>` tags.
///
/// Terms are matched literally against the unescaped text, so a term such as
/// `<script` is found even though it is emitted as `&lt;script`.
#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    let mut terms = query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();
    if terms.is_empty() {
        return escape_html(text);
    }
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(pattern) = RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
    else {
        return escape_html(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        out.push_str(&escape_html(&text[cursor..found.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(found.as_str()));
        out.push_str(MARK_CLOSE);
        cursor = found.end();
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}
