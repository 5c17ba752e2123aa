use shadecraft_common::ColorEntry;

use super::sanitize::{sanitize_theme_name, validate_css_color};

/// Render a Tailwind v4 `@theme` block, one `--color-<name>-<index>` per entry.
pub fn generate_tailwind_theme(name: &str, palette: &[ColorEntry]) -> String {
    let name = sanitize_theme_name(name);
    let mut css = String::from("@theme {\n");
    push_variables(&mut css, palette, |index| format!("--color-{name}-{index}"));
    css.push('}');
    css
}

/// Render bare `--<name>-<index>` declarations without a surrounding block.
pub fn generate_css_variables(name: &str, palette: &[ColorEntry]) -> String {
    let name = sanitize_theme_name(name);
    let mut css = String::new();
    push_variables(&mut css, palette, |index| format!("--{name}-{index}"));
    css
}

/// Wrap declarations from [`generate_css_variables`] in a `:root` rule.
pub fn wrap_root(variables: &str) -> String {
    format!(":root {{\n{variables}}}")
}

fn push_variables(css: &mut String, palette: &[ColorEntry], property: impl Fn(u32) -> String) {
    for entry in palette {
        let name = property(entry.index);
        match validate_css_color(&entry.hex) {
            Ok(()) => {
                css.push_str(&format!("  {name}: {};\n", entry.hex));
            }
            Err(e) => {
                tracing::warn!(
                    name = %name,
                    value = %entry.hex,
                    error = %e,
                    "Theme variable rejected by sanitizer"
                );
            }
        }
    }
}
