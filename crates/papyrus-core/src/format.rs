//! Pure display formatters for result and reference text.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Structural abstract keywords that commonly open a new paragraph
/// (case-insensitive, matched as whole words).
static STRUCTURAL_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "background",
        "objective",
        "objectives",
        "introduction",
        "methods",
        "results",
        "findings",
        "discussion",
        "conclusion",
        "conclusions",
    ]
    .into_iter()
    .collect()
});

/// Normalize a comma-separated author list: trim each entry, drop empties,
/// rejoin with ", ". Order is preserved. Empty input yields "".
pub fn format_authors(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reflow an abstract for display: collapse whitespace runs to single
/// spaces and insert a paragraph break before recognized structural
/// keywords ("Methods", "Results", ...). Best-effort readability aid;
/// it will not find every semantic boundary. Empty input yields "".
pub fn format_abstract(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if out.is_empty() {
            out.push_str(word);
            continue;
        }
        if is_structural_keyword(word) {
            out.push_str("\n\n");
        } else {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Whole-word keyword test, tolerating trailing ':' or '.' punctuation.
fn is_structural_keyword(word: &str) -> bool {
    let bare = word.trim_end_matches([':', '.']);
    !bare.is_empty() && STRUCTURAL_KEYWORDS.contains(bare.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authors_collapse_irregular_spacing() {
        assert_eq!(
            format_authors("Smith J,  Doe A ,Lee K"),
            "Smith J, Doe A, Lee K"
        );
    }

    #[test]
    fn authors_preserve_order() {
        assert_eq!(format_authors("Zed A, Abel B"), "Zed A, Abel B");
    }

    #[test]
    fn authors_empty_input_is_empty() {
        assert_eq!(format_authors(""), "");
        assert_eq!(format_authors(" , , "), "");
    }

    #[test]
    fn abstract_collapses_whitespace() {
        assert_eq!(format_abstract("a  b\n\tc"), "a b c");
    }

    #[test]
    fn abstract_breaks_before_structural_keywords() {
        let out = format_abstract("Background: stuff happened. Methods: we measured Results: good");
        assert_eq!(
            out,
            "Background: stuff happened.\n\nMethods: we measured\n\nResults: good"
        );
    }

    #[test]
    fn abstract_keyword_match_is_case_insensitive() {
        assert_eq!(format_abstract("intro METHODS here"), "intro\n\nMETHODS here");
    }

    #[test]
    fn abstract_no_break_at_start() {
        assert_eq!(format_abstract("Methods: first word"), "Methods: first word");
    }

    #[test]
    fn abstract_ignores_keyword_substrings() {
        // "methodsology" is not a whole-word match
        assert_eq!(format_abstract("a methodsology b"), "a methodsology b");
    }

    #[test]
    fn abstract_empty_input_is_empty() {
        assert_eq!(format_abstract(""), "");
        assert_eq!(format_abstract("   \n "), "");
    }
}
