use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// `{word}` in any letter case, or a printf-style `%s`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    // Static pattern; compilation cannot fail.
    Regex::new(r"(?i:\{word\})|%s").expect("placeholder pattern is valid")
});

/// Substitute the percent-encoded `word` into a source template.
///
/// Every placeholder is replaced in a single pass, so text produced by the
/// encoding is never re-scanned. A template without a placeholder gets the
/// encoded word appended.
pub fn resolve_lookup_url(template: &str, word: &str) -> String {
    let encoded = encode_component(word);
    if PLACEHOLDER.is_match(template) {
        PLACEHOLDER
            .replace_all(template, NoExpand(&encoded))
            .into_owned()
    } else {
        format!("{template}{encoded}")
    }
}

/// Percent-encode `word` for a URL component, leaving `!'()*` literal the
/// way browsers' `encodeURIComponent` does.
fn encode_component(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for part in word.split_inclusive(['!', '\'', '(', ')', '*']) {
        match part.char_indices().last() {
            Some((i, c @ ('!' | '\'' | '(' | ')' | '*'))) => {
                out.push_str(&urlencoding::encode(&part[..i]));
                out.push(c);
            }
            _ => out.push_str(&urlencoding::encode(part)),
        }
    }
    out
}
