//! Case-insensitive substring search over question text

use crate::model::Question;

/// Questions whose text contains `term`, ignoring case.
///
/// An empty term matches everything; callers reject empty terms before
/// getting here.
pub fn search<'a>(questions: &'a [Question], term: &str) -> Vec<&'a Question> {
    let needle = term.to_lowercase();
    questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}

/// Escape `term` for use inside a SQL `LIKE`/`ILIKE` pattern with `\` as the
/// escape character, so it only ever matches literally.
pub fn like_literal(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
