// Text normalization: the two canonical forms the detectors match against.
//
// The policies are kept as two separate functions on purpose: the boundary
// matcher needs word separation preserved, the tokenizing matcher needs it
// gone so that "f u c k" reads as one word.

use std::sync::LazyLock;

use regex_lite::Regex;

/// One or more whitespace characters. Covers the full Unicode space set
/// (including NBSP, the U+2000 block, ideographic space and BOM), not just
/// ASCII, so exotic separators can't be used to split a banned word.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{0085}\x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("whitespace pattern is valid")
});

/// Policy A: lower-case, then collapse each whitespace run to a single space.
///
/// Leading and trailing runs become one space as well; nothing is trimmed.
pub fn collapse_whitespace(text: &str) -> String {
    let lower = text.to_lowercase();
    WHITESPACE_RUN.replace_all(&lower, " ").into_owned()
}

/// Policy B: lower-case, then drop every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    let lower = text.to_lowercase();
    WHITESPACE_RUN.replace_all(&lower, "").into_owned()
}
