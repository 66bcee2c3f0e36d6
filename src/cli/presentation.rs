//! CLI presentation: text and json formatters per command family.

mod args;
mod flags;

pub use args::{format_classification_json, format_classification_text};
pub use flags::format_flags_text;
