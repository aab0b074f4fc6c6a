/// Split a comment-free struct body into normalized member declarations,
/// in source order.
///
/// Run [`strip_comments`](super::strip_comments) first: a `;` inside a comment
/// would otherwise split a declaration.
pub fn split_declarations(body: &str) -> Vec<String> {
    body.split(';')
        .map(normalize_whitespace)
        .filter(|decl| !decl.is_empty())
        .collect()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
