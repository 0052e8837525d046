use crate::scorer::Scorer;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};
use std::sync::Mutex;

/// Fuzzy subsequence scorer backed by nucleo. Terms that do not match score
/// 0.0; matching terms score nucleo's (unbounded, integer) match score.
pub struct NucleoScorer {
    matcher: Mutex<Matcher>,
    case_matching: CaseMatching,
}

impl Default for NucleoScorer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl NucleoScorer {
    pub fn new(case_sensitive: bool) -> Self {
        let case_matching = if case_sensitive {
            CaseMatching::Respect
        } else {
            CaseMatching::Ignore
        };
        Self {
            matcher: Mutex::new(Matcher::new(nucleo_matcher::Config::DEFAULT)),
            case_matching,
        }
    }
}

impl Scorer for NucleoScorer {
    fn compare(&self, text: &str, term: &str) -> f64 {
        let pattern = Pattern::parse(term, self.case_matching, Normalization::Smart);
        let mut buf = Vec::new();
        let haystack = Utf32Str::new(text, &mut buf);

        // The matcher only holds scratch space, so a poisoned lock is still usable.
        let mut matcher = self
            .matcher
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        pattern
            .score(haystack, &mut matcher)
            .map(f64::from)
            .unwrap_or(0.0)
    }
}
