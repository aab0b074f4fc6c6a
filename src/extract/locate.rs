use crate::error::{ExtractError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").unwrap());

/// Remove `/* ... */` and `// ...` comments in one left-to-right pass.
///
/// Whichever comment opens first wins, so a `/*` inside a line comment does
/// not start a block. Each comment becomes a single space so tokens on either
/// side stay apart.
pub fn strip_comments(text: &str) -> String {
    COMMENT_PATTERN.replace_all(text, " ").into_owned()
}

/// Text strictly between `struct <name> {` and the first `}` followed by `;`.
///
/// No brace balancing: function-pointer tables have no nested braces.
pub fn locate_struct_body<'a>(source: &'a str, name: &str) -> Result<&'a str> {
    let pattern = Regex::new(&format!(
        r"(?s)\bstruct\s+{}\s*\{{(.*?)\}}\s*;",
        regex::escape(name)
    ))
    .map_err(|source| ExtractError::InvalidPattern {
        rule: "struct",
        source,
    })?;

    pattern
        .captures(source)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ExtractError::StructNotFound {
            name: name.to_string(),
        })
}
