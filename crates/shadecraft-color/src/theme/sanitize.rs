//! Theme name and CSS value sanitization.
//!
//! Colors are accepted only as hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
//! or `rgb()`/`rgba()` with numeric arguments. Anything containing
//! `expression(`, `url(`, `javascript:`, `;`, `{`, `}`, `<` or `>` is rejected.

/// Name used when a theme name sanitizes to nothing.
pub const DEFAULT_THEME_NAME: &str = "theme";

// =============================================================================
// NAMES
// =============================================================================

/// Reduce `name` to a safe custom-property segment.
///
/// Keeps ASCII alphanumerics, `-` and `_`, turns whitespace runs into a
/// single `-` and drops everything else.
pub fn sanitize_theme_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;

    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            out.push(ch);
        }
    }

    if out.is_empty() {
        DEFAULT_THEME_NAME.to_string()
    } else {
        out
    }
}

// =============================================================================
// VALUES
// =============================================================================

/// Validate a CSS color value bound for a custom property.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }

    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(format!(
        "Invalid CSS color: only hex and rgb()/rgba() allowed, got '{trimmed}'"
    ))
}

// =============================================================================
// HELPERS
// =============================================================================

fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "@import",
        "behavior:",
        "-moz-binding",
    ];

    if let Some(pattern) = dangerous.iter().find(|p| lower.contains(*p)) {
        return Err(format!("CSS injection blocked: contains '{pattern}'"));
    }

    if let Some(ch) = [';', '{', '}', '<', '>'].into_iter().find(|&c| value.contains(c)) {
        return Err(format!("CSS injection blocked: contains '{ch}'"));
    }

    Ok(())
}

fn validate_hex_color(value: &str) -> Result<(), String> {
    let hex = &value[1..];

    if !matches!(hex.len(), 3 | 4 | 6 | 8) {
        return Err(format!(
            "Invalid hex color length: expected 3/4/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color: non-hex character in '{value}'"));
    }

    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), String> {
    let (inner, expected) = if let Some(rest) = value.strip_prefix("rgba(") {
        (rest, 4)
    } else if let Some(rest) = value.strip_prefix("rgb(") {
        (rest, 3)
    } else {
        return Err(format!("Malformed rgb/rgba: '{value}'"));
    };
    let inner = inner
        .strip_suffix(')')
        .ok_or_else(|| format!("Malformed rgb/rgba: '{value}'"))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(format!(
            "Expected {expected} arguments in '{value}', got {}",
            parts.len()
        ));
    }

    if let Some((i, part)) = parts
        .iter()
        .enumerate()
        .find(|(_, p)| p.parse::<f64>().is_err())
    {
        return Err(format!(
            "Non-numeric argument at position {i} in '{value}': '{part}'"
        ));
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
