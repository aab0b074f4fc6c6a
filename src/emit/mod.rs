mod json;
mod text;

pub use json::{JsonReport, SourceInfo};
pub use text::{render_text, TextOptions};
