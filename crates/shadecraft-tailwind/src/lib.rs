//! CSS to Tailwind class translation.
//!
//! Takes pasted CSS (a bare declaration list, a rule, or HTML with a
//! `style` attribute) and produces the equivalent utility classes. The
//! translation is total: declarations without a stock utility degrade to
//! Tailwind's arbitrary-value forms instead of failing.
//!
//! ```
//! use shadecraft_tailwind::convert_css_to_tailwind;
//!
//! assert_eq!(convert_css_to_tailwind("padding: 8px 16px;"), "py-2 px-4");
//! ```

pub mod arbitrary;
pub mod convert;
pub mod handlers;
pub mod nearest;
pub mod preprocess;
pub mod property;
pub mod snippets;
pub mod spacing;

#[cfg(test)]
mod tests;

pub use convert::{convert_css_to_tailwind, parse_declarations, Declaration};
pub use preprocess::preprocess_css_input;
pub use property::Property;
pub use snippets::{find_snippet, Snippet, SNIPPETS};
pub use spacing::map_spacing_value;
