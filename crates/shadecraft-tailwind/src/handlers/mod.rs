//! Per-property value translators. Each is total over its input.

pub(crate) mod background;
pub(crate) mod border;
pub(crate) mod box_model;
pub(crate) mod color;
pub(crate) mod effects;
pub(crate) mod keyword;
pub(crate) mod shadow;

pub use box_model::{BoxEdge, Side};
pub use keyword::{Fallback, KeywordTable};
