//! Bracketed arbitrary values and the lenient number readers handlers use.
//!
//! Every `[...]` class this crate emits is built here, so the output is
//! always a run of space-free, quote-free tokens.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

static LEADING_INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[+-]?\d+").unwrap());

/// Make `value` safe inside a class attribute.
///
/// Whitespace runs become `_` and double quotes become single quotes.
pub fn escape(value: &str) -> String {
    WHITESPACE_RE.replace_all(value, "_").replace('"', "'")
}

/// `prefix-[value]`.
pub fn arbitrary(prefix: &str, value: &str) -> String {
    format!("{prefix}-[{}]", escape(value))
}

/// `[property:value]`, Tailwind's arbitrary-property form.
pub fn arbitrary_property(property: &str, value: &str) -> String {
    format!("[{}:{}]", escape(property), escape(value))
}

/// The number at the start of `s`, ignoring any trailing unit.
///
/// `"16px"` reads as `16.0`, `".5rem"` as `0.5`, `"px"` as `None`.
pub fn leading_number(s: &str) -> Option<f64> {
    let m = LEADING_NUMBER_RE.find(s)?;
    m.as_str().trim().parse().ok()
}

/// The integer at the start of `s`; fractions and units are ignored.
///
/// Read as `f64` so out-of-range values still compare sensibly.
pub fn leading_int(s: &str) -> Option<f64> {
    let m = LEADING_INT_RE.find(s)?;
    m.as_str().trim().parse().ok()
}
