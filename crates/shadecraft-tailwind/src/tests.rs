use super::*;

#[test]
fn single_keyword_declaration() {
    assert_eq!(convert_css_to_tailwind("display: flex;"), "flex");
}

#[test]
fn padding_shorthand() {
    assert_eq!(convert_css_to_tailwind("padding: 8px 16px;"), "py-2 px-4");
}

#[test]
fn white_text() {
    assert_eq!(convert_css_to_tailwind("color: #ffffff;"), "text-white");
}

#[test]
fn pill_radius() {
    assert_eq!(convert_css_to_tailwind("border-radius: 9999px;"), "rounded-full");
}

#[test]
fn unknown_property() {
    assert_eq!(convert_css_to_tailwind("weird-prop: 5;"), "[weird-prop:5]");
    assert_eq!(
        convert_css_to_tailwind("grid-template-columns: 1fr 2fr"),
        "[grid-template-columns:1fr_2fr]"
    );
}

#[test]
fn empty_and_junk_input() {
    assert_eq!(convert_css_to_tailwind(""), "");
    assert_eq!(convert_css_to_tailwind(";;;"), "");
    assert_eq!(convert_css_to_tailwind("just some words"), "");
    assert_eq!(convert_css_to_tailwind("{}"), "");
}

#[test]
fn malformed_lines_do_not_stop_processing() {
    assert_eq!(
        convert_css_to_tailwind("display: flex; oops; : 3; position: relative"),
        "flex relative"
    );
}

#[test]
fn order_is_preserved() {
    assert_eq!(
        convert_css_to_tailwind("position: relative; display: block; z-index: 10"),
        "relative block z-10"
    );
}

#[test]
fn outer_braces_are_ignored() {
    assert_eq!(
        convert_css_to_tailwind("{ display: grid; gap: 8px; }"),
        "grid gap-2"
    );
}

#[test]
fn preprocessed_html() {
    let input = preprocess_css_input(r#"<div style="color: red;">"#);
    assert_eq!(input, "color: red;");
    assert_eq!(convert_css_to_tailwind(input), "text-[red]");
}

#[test]
fn preprocessed_rule() {
    let input = preprocess_css_input(".card {\n  padding: 16px;\n  margin: 0 auto;\n}");
    assert_eq!(convert_css_to_tailwind(input), "p-4 my-0 mx-auto");
}

#[test]
fn fallback_output_is_stable() {
    let first = convert_css_to_tailwind("weird-prop: a b;");
    assert_eq!(first, "[weird-prop:a_b]");

    let inner = first
        .strip_prefix("[weird-prop:")
        .and_then(|s| s.strip_suffix(']'))
        .unwrap();
    let second = convert_css_to_tailwind(&format!("weird-prop: [{inner}];"));
    assert_eq!(second, "[weird-prop:[a_b]]");
    assert_eq!(second.split(' ').count(), 1);
}

#[test]
fn output_is_safe_in_a_class_attribute() {
    let hostile = r#"font-family: "Inter", sans-serif; content: "a  b"; width: calc(100% - "x")"#;
    let classes = convert_css_to_tailwind(hostile);
    assert!(!classes.contains('"'));
    assert_eq!(classes.split(' ').count(), 3);
}

#[test]
fn every_snippet_translates() {
    let expected = [
        (
            "Button",
            "inline-flex py-2 px-4 bg-[#3b82f6] text-white rounded font-medium cursor-pointer transition-colors",
        ),
        (
            "Card",
            "flex flex-col bg-white rounded-lg p-4 shadow-[0_1px_3px_rgba(0,0,0,0.12)]",
        ),
        ("Flex Container", "flex justify-between items-center gap-4 p-3"),
        (
            "Gradient Button",
            "inline-block py-2.5 px-5 bg-gradient-to-r from-[#6366f1] to-[#8b5cf6] text-white rounded font-medium text-center shadow-[0_4px_6px_rgba(0,0,0,0.1)]",
        ),
        ("Positioning", "absolute top-0 right-0 z-10 m-4 opacity-80"),
    ];

    assert_eq!(SNIPPETS.len(), expected.len());
    for (name, classes) in expected {
        let snippet = find_snippet(name).unwrap();
        assert_eq!(convert_css_to_tailwind(snippet.css), classes, "{name}");
    }
}

#[test]
fn find_snippet_ignores_case() {
    assert_eq!(find_snippet("card").map(|s| s.name), Some("Card"));
    assert!(find_snippet("Modal").is_none());
}
