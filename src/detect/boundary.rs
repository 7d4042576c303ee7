// Word-boundary matcher (Detector A).
//
// Matches Policy-A text (lower-case, whitespace runs collapsed) against its
// word list with a single Aho-Corasick automaton. In relaxed mode, which is
// what the service runs, a term buried inside a longer word still counts.
// Whole-word mode additionally requires a non-alphanumeric character (or the
// edge of the text) on both sides of the occurrence.

use std::collections::BTreeSet;
use std::ops::Range;

use aho_corasick::AhoCorasick;

use super::traits::Detector;
use crate::normalize::collapse_whitespace;
use crate::wordlist::{WordList, WordListError};

/// Replacement written over every censored span.
pub const GRAWLIX: &str = "*****";

pub struct BoundaryDetector {
    matcher: AhoCorasick,
    whole_word: bool,
}

impl BoundaryDetector {
    pub fn new(words: &WordList, whole_word: bool) -> Result<Self, WordListError> {
        let terms: BTreeSet<String> = words.iter().map(collapse_whitespace).collect();
        Ok(Self {
            matcher: AhoCorasick::new(&terms)?,
            whole_word,
        })
    }

    pub fn whole_word(&self) -> bool {
        self.whole_word
    }

    pub fn term_count(&self) -> usize {
        self.matcher.patterns_len()
    }

    /// Normalize `text` and replace every matched span with [`GRAWLIX`].
    ///
    /// Overlapping or adjacent matches are merged into a single span.
    pub fn censor(&self, text: &str) -> String {
        let normalized = self.normalize(text);

        let mut spans: Vec<Range<usize>> = self.occurrences(&normalized).collect();
        if spans.is_empty() {
            return normalized;
        }
        spans.sort_by_key(|span| span.start);

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
        for span in spans {
            if let Some(last) = merged.last_mut() {
                if span.start <= last.end {
                    last.end = last.end.max(span.end);
                    continue;
                }
            }
            merged.push(span);
        }

        let mut out = String::with_capacity(normalized.len());
        let mut cursor = 0;
        for span in merged {
            out.push_str(&normalized[cursor..span.start]);
            out.push_str(GRAWLIX);
            cursor = span.end;
        }
        out.push_str(&normalized[cursor..]);
        out
    }

    /// Byte ranges of every term occurrence in `haystack`, overlaps included,
    /// honoring whole-word mode.
    fn occurrences<'a>(&'a self, haystack: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.matcher
            .find_overlapping_iter(haystack)
            .map(|m| m.range())
            .filter(move |span| !self.whole_word || on_word_boundary(haystack, span))
    }
}

impl Detector for BoundaryDetector {
    fn name(&self) -> &'static str {
        "boundary"
    }

    fn normalize(&self, text: &str) -> String {
        collapse_whitespace(text)
    }

    fn is_match(&self, normalized: &str) -> bool {
        if self.whole_word {
            self.occurrences(normalized).next().is_some()
        } else {
            self.matcher.is_match(normalized)
        }
    }
}

fn on_word_boundary(haystack: &str, span: &Range<usize>) -> bool {
    let before = haystack[..span.start].chars().next_back();
    let after = haystack[span.end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordListBuilder;

    fn detector(terms: &[&str], whole_word: bool) -> BoundaryDetector {
        let words = WordListBuilder::new()
            .add_terms(terms.iter().copied())
            .build()
            .unwrap();
        BoundaryDetector::new(&words, whole_word).unwrap()
    }

    #[test]
    fn relaxed_mode_matches_inside_words() {
        let d = detector(&["fuck"], false);
        assert!(d.detect("absofuckinglutely"));
        assert!(d.detect("what the FUCK"));
        assert!(!d.detect("what the heck"));
    }

    #[test]
    fn whole_word_mode_requires_boundaries() {
        let d = detector(&["arsch"], true);
        assert!(d.detect("du arsch!"));
        assert!(d.detect("arsch"));
        assert!(!d.detect("der barsch schwimmt"));
        assert!(!d.detect("arschig"));
    }

    #[test]
    fn whole_word_boundaries_are_unicode_aware() {
        let d = detector(&["spast"], true);
        assert!(!d.detect("spastübung"));
        assert!(d.detect("spast, echt"));
    }

    #[test]
    fn multi_word_terms_survive_whitespace_collapse() {
        let d = detector(&["piss   off"], false);
        assert!(d.detect("just PISS \t off"));
    }

    #[test]
    fn censor_replaces_each_span() {
        let d = detector(&["shit", "bullshit"], false);
        assert_eq!(d.censor("Total  BULLSHIT, shit!"), "total *****, *****!");
    }

    #[test]
    fn whole_word_finds_a_bounded_term_inside_a_longer_one() {
        // "bullshit" is not bounded here, but the overlapping "shit" is.
        let d = detector(&["bullshit", "shit"], true);
        assert!(!d.detect("bullshitting"));
        assert!(d.detect("bull-shit"));
        assert_eq!(d.censor("bullshit"), "*****");
    }

    #[test]
    fn term_count_ignores_duplicates_after_normalization() {
        let d = detector(&["piss off", "piss   off", "shit"], false);
        assert_eq!(d.term_count(), 2);
    }

    #[test]
    fn censor_leaves_clean_text_normalized() {
        let d = detector(&["shit"], false);
        assert_eq!(d.censor("Hello   World"), "hello world");
    }

    #[test]
    fn censor_handles_multibyte_text() {
        let d = detector(&["scheiße"], false);
        assert_eq!(d.censor("Ärger, SCHEIßE"), "ärger, *****");
    }
}
