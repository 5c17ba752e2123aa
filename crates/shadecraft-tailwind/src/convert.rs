//! Declaration parsing and the top-level translation entry point.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use crate::arbitrary::arbitrary_property;
use crate::property::Property;

static OUTER_BRACES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{|\}\s*$").unwrap());

/// One `property: value` pair, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
}

impl<'a> Declaration<'a> {
    /// Split a single declaration on its first `:`.
    ///
    /// Returns `None` for lines without a colon or with an empty property.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (property, value) = line.split_once(':')?;
        let property = property.trim();
        if property.is_empty() {
            return None;
        }
        Some(Self {
            property,
            value: value.trim(),
        })
    }

    /// Classes for this declaration; unknown properties use the
    /// `[property:value]` form.
    pub fn to_classes(&self) -> String {
        match Property::from_name(self.property) {
            Some(property) => property.translate(self.value),
            None => {
                trace!(property = self.property, "no dedicated mapping");
                arbitrary_property(self.property, self.value)
            }
        }
    }
}

/// Split a declaration list into declarations, in source order.
///
/// One leading `{` and one trailing `}` are ignored. Empty and malformed
/// lines are skipped.
pub fn parse_declarations(input: &str) -> Vec<Declaration<'_>> {
    let body = strip_outer_braces(input);
    body.split(';')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let declaration = Declaration::parse(line);
            if declaration.is_none() {
                trace!(line, "skipping malformed declaration");
            }
            declaration
        })
        .collect()
}

fn strip_outer_braces(input: &str) -> &str {
    let mut start = 0;
    let mut end = input.len();
    for m in OUTER_BRACES_RE.find_iter(input) {
        if m.start() == 0 {
            start = m.end();
        } else {
            end = end.min(m.start());
        }
    }
    &input[start..end]
}

/// Translate a CSS declaration list into a space-separated class list.
pub fn convert_css_to_tailwind(input: &str) -> String {
    parse_declarations(input)
        .iter()
        .map(Declaration::to_classes)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon_only() {
        let decl = Declaration::parse("background: url(http://x/y.png)").unwrap();
        assert_eq!(decl.property, "background");
        assert_eq!(decl.value, "url(http://x/y.png)");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(Declaration::parse("no colon here"), None);
        assert_eq!(Declaration::parse("  : 5"), None);
    }

    #[test]
    fn parses_in_order() {
        let decls = parse_declarations("a: 1; ; b : 2 ;junk; c:3");
        let pairs: Vec<_> = decls.iter().map(|d| (d.property, d.value)).collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "3")]);
    }

    #[test]
    fn strips_one_pair_of_outer_braces() {
        assert_eq!(strip_outer_braces("  { color: red; }  "), " color: red; ");
        assert_eq!(strip_outer_braces("color: red"), "color: red");
        assert_eq!(strip_outer_braces("{}"), "");
        assert_eq!(strip_outer_braces("{{a}}"), "{a}");
    }

    #[test]
    fn empty_value_is_kept() {
        let decls = parse_declarations("color:");
        assert_eq!(decls, vec![Declaration { property: "color", value: "" }]);
    }
}
