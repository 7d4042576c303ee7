// Tokenizing matcher (Detector B).
//
// Works on Policy-B text: lower-case with all whitespace removed. On top of
// that it folds common look-alike characters ("5h1t" -> "shit"), splits into
// tokens, and flags a token if it contains a banned term. With whitespace
// already gone, a spaced-out word such as "f u c k" arrives as a single token.
//
// Tokens break on characters that are neither letters nor digits, except for
// punctuation that occurs inside a term itself ("f-word"), so every term can
// still match its own literal spelling.

use std::collections::BTreeSet;

use aho_corasick::AhoCorasick;

use super::traits::Detector;
use crate::normalize::strip_whitespace;
use crate::wordlist::{WordList, WordListError};

/// Character substitutions commonly used to dodge word filters.
const LOOKALIKES: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'i'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('@', 'a'),
    ('$', 's'),
];

pub struct TokenDetector {
    matcher: AhoCorasick,
    /// Non-alphanumeric characters that appear inside some term.
    joiners: BTreeSet<char>,
}

impl TokenDetector {
    /// Terms go through the same whitespace stripping and folding as input
    /// text, so they live in the same space as tokens.
    pub fn new(words: &WordList) -> Result<Self, WordListError> {
        let terms: BTreeSet<String> = words
            .iter()
            .map(|term| fold_lookalikes(&strip_whitespace(term)))
            .collect();
        let joiners = terms
            .iter()
            .flat_map(|term| term.chars())
            .filter(|c| !c.is_alphanumeric())
            .collect();
        Ok(Self {
            matcher: AhoCorasick::new(&terms)?,
            joiners,
        })
    }

    pub fn term_count(&self) -> usize {
        self.matcher.patterns_len()
    }

    fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(move |c: char| !c.is_alphanumeric() && !self.joiners.contains(&c))
            .filter(|token| !token.is_empty())
    }
}

impl Detector for TokenDetector {
    fn name(&self) -> &'static str {
        "token"
    }

    fn normalize(&self, text: &str) -> String {
        strip_whitespace(text)
    }

    fn is_match(&self, normalized: &str) -> bool {
        let folded = fold_lookalikes(normalized);
        let hit = self
            .tokens(&folded)
            .any(|token| self.matcher.is_match(token));
        hit
    }
}

fn fold_lookalikes(text: &str) -> String {
    text.chars()
        .map(|c| {
            LOOKALIKES
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordListBuilder;

    fn detector(terms: &[&str]) -> TokenDetector {
        let words = WordListBuilder::new()
            .add_terms(terms.iter().copied())
            .build()
            .unwrap();
        TokenDetector::new(&words).unwrap()
    }

    #[test]
    fn spaced_out_words_are_caught() {
        let d = detector(&["fuck"]);
        assert!(d.detect("f u c k"));
        assert!(d.detect("F\tU\nC  K off"));
    }

    #[test]
    fn lookalikes_are_folded() {
        let d = detector(&["shit", "fick"]);
        assert!(d.detect("5h1t happens"));
        assert!(d.detect("f1ck dich"));
        assert!(d.detect("$hit"));
    }

    #[test]
    fn punctuation_splits_tokens() {
        let d = detector(&["shit"]);
        assert!(!d.detect("s.h.i.t"));
        assert!(d.detect("oh...shit!"));
    }

    #[test]
    fn tokens_drop_empty_pieces() {
        let d = detector(&["shit"]);
        let tokens: Vec<&str> = d.tokens("..ab,,cd..").collect();
        assert_eq!(tokens, vec!["ab", "cd"]);
    }

    #[test]
    fn terms_are_folded_like_input() {
        let d = detector(&["b@d w0rd", "badword"]);
        assert_eq!(d.term_count(), 1);
        assert!(d.detect("BAD WORD"));
    }

    #[test]
    fn punctuated_terms_match_their_own_spelling() {
        let d = detector(&["f-word"]);
        assert!(d.detect("what the F-word"));
        assert!(d.detect("the f - word"));
        assert!(!d.detect("fword"));
        assert!(!d.detect("f.word"));
    }

    #[test]
    fn term_punctuation_does_not_hide_other_terms() {
        let d = detector(&["f-word", "shit"]);
        assert!(d.detect("oh-shit"));
        assert!(!d.detect("s-hit"));
    }

    #[test]
    fn clean_text_passes() {
        let d = detector(&["fuck", "scheiße"]);
        assert!(!d.detect("hello world"));
        assert!(!d.detect("Guten Morgen, wie geht es dir?"));
    }
}
