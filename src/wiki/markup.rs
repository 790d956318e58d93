use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<.*?>").expect("tag pattern should compile"))
}

/// Remove `<...>` tags (e.g. `<span class="searchmatch">`) from a search snippet.
/// A tag never spans a line break.
pub(crate) fn strip_tags(snippet: &str) -> Cow<'_, str> {
    tag_pattern().replace_all(snippet, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_searchmatch_spans() {
        let s = r#"<span class="searchmatch">Albert</span> <span class="searchmatch">Einstein</span> was a physicist"#;
        assert_eq!(strip_tags(s), "Albert Einstein was a physicist");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
    }

    #[test]
    fn only_tags_yields_empty() {
        assert_eq!(strip_tags("<b></b><i/>"), "");
    }

    #[test]
    fn unclosed_angle_is_kept() {
        assert_eq!(strip_tags("x < y"), "x < y");
        assert_eq!(strip_tags("bold</b> and 1 < 2"), "bold and 1 < 2");
    }

    #[test]
    fn tag_does_not_cross_newline() {
        assert_eq!(strip_tags("a <x\ny> b"), "a <x\ny> b");
    }

    #[test]
    fn stripping_is_idempotent() {
        for s in [
            r#"<span class="searchmatch">Rust</span> (programming language)"#,
            "<<b>>nested<</b>>",
            "a <x\ny> b",
            "<>",
            "",
        ] {
            let once = strip_tags(s).into_owned();
            assert_eq!(strip_tags(&once), once, "input: {s:?}");
        }
    }
}
