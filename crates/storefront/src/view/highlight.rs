//! Search-match highlighting for product titles.

use regex::RegexBuilder;

/// A run of title text, marked when it matched the search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The text run, original casing preserved
    pub text: String,
    /// Whether this run matched the query
    pub matched: bool,
}

impl Fragment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `text` into fragments on case-insensitive occurrences of `query`.
///
/// The query is matched literally; regex metacharacters in it have no
/// effect. Matched fragments keep the casing of `text`, not of the query.
/// An empty query yields the whole text as a single unmatched fragment,
/// and empty runs between adjacent matches are skipped.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<Fragment> {
    if query.is_empty() {
        return vec![Fragment::plain(text)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return vec![Fragment::plain(text)];
    };

    let mut fragments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            fragments.push(Fragment::plain(&text[last..found.start()]));
        }
        fragments.push(Fragment::matched(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        fragments.push(Fragment::plain(&text[last..]));
    }

    if fragments.is_empty() {
        // Empty text with a non-empty query
        fragments.push(Fragment::plain(text));
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match_splits_title() {
        let fragments = highlight("Wireless Mouse", "mouse");
        assert_eq!(
            fragments,
            vec![Fragment::plain("Wireless "), Fragment::matched("Mouse")]
        );
    }

    #[test]
    fn test_match_preserves_title_casing() {
        let fragments = highlight("MOUSE trap", "mouse");
        assert_eq!(
            fragments,
            vec![Fragment::matched("MOUSE"), Fragment::plain(" trap")]
        );
    }

    #[test]
    fn test_multiple_occurrences() {
        let fragments = highlight("Mouse for a mouse", "mouse");
        assert_eq!(
            fragments,
            vec![
                Fragment::matched("Mouse"),
                Fragment::plain(" for a "),
                Fragment::matched("mouse"),
            ]
        );
    }

    #[test]
    fn test_empty_query_is_one_plain_fragment() {
        let fragments = highlight("Wireless Mouse", "");
        assert_eq!(fragments, vec![Fragment::plain("Wireless Mouse")]);
    }

    #[test]
    fn test_no_match_is_one_plain_fragment() {
        let fragments = highlight("Keyboard", "mouse");
        assert_eq!(fragments, vec![Fragment::plain("Keyboard")]);
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let fragments = highlight("Slim Fit (Limited) Shirt", "(limited)");
        assert_eq!(
            fragments,
            vec![
                Fragment::plain("Slim Fit "),
                Fragment::matched("(Limited)"),
                Fragment::plain(" Shirt"),
            ]
        );
    }

    #[test]
    fn test_adjacent_matches_skip_empty_runs() {
        let fragments = highlight("aaa", "a");
        assert_eq!(
            fragments,
            vec![
                Fragment::matched("a"),
                Fragment::matched("a"),
                Fragment::matched("a"),
            ]
        );
    }

    #[test]
    fn test_whole_title_match() {
        let fragments = highlight("Mouse", "mouse");
        assert_eq!(fragments, vec![Fragment::matched("Mouse")]);
    }
}
