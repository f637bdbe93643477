//! Rendering of results: text reporting and JSON serialization.

mod format;
mod json;
mod text;

pub use format::format_time;
pub use json::{to_json, to_json_pretty};
pub use text::TextReporter;
