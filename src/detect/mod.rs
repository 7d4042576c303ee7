// Profanity detection: two independent word-list matchers combined with OR.
//
// BoundaryDetector and TokenDetector each carry their own normalization and
// their own word list. ProfanityFilter owns one of each and flags text if
// either of them does. It is built once at startup and then only read.

pub mod boundary;
pub mod token;
pub mod traits;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::wordlist::{read_terms_file, Catalog, Language, WordListBuilder, WordListError};
use boundary::BoundaryDetector;
use token::TokenDetector;
use traits::Detector;

/// How to assemble the filter at startup.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Require word boundaries around boundary-detector matches.
    pub whole_word: bool,
    /// Extra newline-separated terms added to both detectors.
    pub extra_words: Option<PathBuf>,
}

/// What each detector said about one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorVerdicts {
    pub boundary: bool,
    pub token: bool,
}

impl DetectorVerdicts {
    pub fn any(&self) -> bool {
        self.boundary || self.token
    }
}

pub struct ProfanityFilter {
    boundary: BoundaryDetector,
    token: TokenDetector,
}

impl ProfanityFilter {
    pub fn new(boundary: BoundaryDetector, token: TokenDetector) -> Self {
        Self { boundary, token }
    }

    /// Build both detectors from every embedded language pack plus any extra
    /// word file. Fails if a source can't be read or a list ends up empty.
    pub fn build(options: &FilterOptions) -> Result<Self, WordListError> {
        let mut boundary_words = WordListBuilder::new();
        let mut token_words = WordListBuilder::new();
        for language in Language::ALL {
            boundary_words = boundary_words.add_pack(Catalog::Boundary, language);
            token_words = token_words.add_pack(Catalog::Token, language);
        }

        if let Some(path) = &options.extra_words {
            let extra = read_terms_file(path)?;
            info!(
                path = %path.display(),
                terms = extra.len(),
                "Loaded extra word list"
            );
            boundary_words = boundary_words.add_terms(&extra);
            token_words = token_words.add_terms(&extra);
        }

        let boundary = BoundaryDetector::new(&boundary_words.build()?, options.whole_word)?;
        let token = TokenDetector::new(&token_words.build()?)?;

        info!(
            boundary_terms = boundary.term_count(),
            token_terms = token.term_count(),
            whole_word = options.whole_word,
            "Profanity filter ready"
        );

        Ok(Self::new(boundary, token))
    }

    /// True if either detector flags the text.
    pub fn contains_profanity(&self, text: &str) -> bool {
        self.boundary.detect(text) || self.token.detect(text)
    }

    /// Run both detectors without short-circuiting.
    pub fn verdicts(&self, text: &str) -> DetectorVerdicts {
        let verdicts = DetectorVerdicts {
            boundary: self.boundary.detect(text),
            token: self.token.detect(text),
        };
        for (detector, hit) in [
            (self.boundary.name(), verdicts.boundary),
            (self.token.name(), verdicts.token),
        ] {
            debug!(detector, hit, "Detector verdict");
        }
        verdicts
    }

    pub fn boundary(&self) -> &BoundaryDetector {
        &self.boundary
    }

    pub fn token(&self) -> &TokenDetector {
        &self.token
    }

    pub fn languages(&self) -> Vec<&'static str> {
        Language::ALL.iter().map(|l| l.code()).collect()
    }
}
