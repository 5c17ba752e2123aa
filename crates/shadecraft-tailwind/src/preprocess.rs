use regex::Regex;
use std::sync::LazyLock;

static STYLE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"style=["']([^"']*)["']"#).unwrap());

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]*)\}").unwrap());

/// Pull the declaration list out of pasted HTML or a CSS rule.
///
/// The first non-empty `style="..."` attribute wins, then the body of the
/// first `{ ... }` block. Anything else is returned unchanged.
pub fn preprocess_css_input(input: &str) -> &str {
    if let Some(body) = first_capture(&STYLE_ATTR_RE, input) {
        return body;
    }
    if input.contains('{') && input.contains('}') {
        if let Some(body) = first_capture(&BLOCK_RE, input) {
            return body;
        }
    }
    input
}

fn first_capture<'a>(re: &Regex, input: &'a str) -> Option<&'a str> {
    re.captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|body| !body.is_empty())
}
