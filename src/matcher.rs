use crate::model::{Candidate, ScoredCandidate};
use crate::scorer::{NopScorer, Scorer};
use log::debug;
use std::cmp::Ordering;

/// Candidates scoring below this are hidden unless configured otherwise.
pub const DEFAULT_HIDE_LESS_THAN: f64 = 1.0;

/// Ranks candidates against a query with a pluggable scorer.
pub struct FuzzyMatcher<S = NopScorer> {
    scorer: S,
    hide_less_than: f64,
}

impl Default for FuzzyMatcher<NopScorer> {
    fn default() -> Self {
        Self::new(NopScorer)
    }
}

impl<S: Scorer> FuzzyMatcher<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            hide_less_than: DEFAULT_HIDE_LESS_THAN,
        }
    }

    pub fn with_hide_less_than(mut self, threshold: f64) -> Self {
        self.hide_less_than = threshold;
        self
    }

    /// Mean of the per-term scores of `text` over `terms`.
    pub fn aggregate_score(&self, text: &str, terms: &[&str]) -> f64 {
        let total: f64 = terms.iter().map(|term| self.scorer.compare(text, term)).sum();
        total / terms.len() as f64
    }

    /// Builds the live view for `query`.
    ///
    /// An empty (or all-whitespace) query returns every candidate unscored in
    /// insertion order. Otherwise candidates are scored, those below the
    /// threshold dropped, and the rest sorted by descending score. Equal
    /// scores rank the candidate whose length is closer to the query's first,
    /// and remaining ties keep insertion order.
    pub fn filter<'a>(&self, query: &str, candidates: &'a [Candidate]) -> Vec<ScoredCandidate<'a>> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return candidates.iter().map(ScoredCandidate::new).collect();
        }

        let mut live: Vec<ScoredCandidate<'a>> = candidates
            .iter()
            .map(|c| ScoredCandidate::with_score(c, self.aggregate_score(c.search_text(), &terms)))
            // NaN never passes the threshold.
            .filter(|s| s.score >= self.hide_less_than)
            .collect();

        let query_len = query.chars().count();
        live.sort_by(|a, b| rank(a, b, query_len));

        debug!(
            "FuzzyMatcher: query='{}', terms={}, live={}/{}",
            query,
            terms.len(),
            live.len(),
            candidates.len()
        );
        live
    }
}

fn length_distance(text: &str, query_len: usize) -> usize {
    text.chars().count().abs_diff(query_len)
}

fn rank(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>, query_len: usize) -> Ordering {
    // NaN never reaches here; the threshold filter drops it.
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            length_distance(a.search_text(), query_len)
                .cmp(&length_distance(b.search_text(), query_len))
        })
}
