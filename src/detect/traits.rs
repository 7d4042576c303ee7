// Detector trait: the seam both word-list matchers plug into.
//
// Each detector owns its normalization as well as its word list, so the two
// pipelines stay fully independent. Detection is synchronous and read-only:
// a detector is built once at startup and shared across request tasks.

/// A word-list matcher that decides whether text contains a banned term.
pub trait Detector: Send + Sync {
    /// Short stable name used in logs.
    fn name(&self) -> &'static str;

    /// Bring raw text into the canonical form this detector matches against.
    fn normalize(&self, text: &str) -> String;

    /// Match already-normalized text against the word list.
    fn is_match(&self, normalized: &str) -> bool;

    /// Normalize, then match.
    fn detect(&self, text: &str) -> bool {
        self.is_match(&self.normalize(text))
    }
}
