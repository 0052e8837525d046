use crate::model::ScoredCandidate;

/// Text shown for one live row. Verbose rows carry their score.
pub fn row_text(row: &ScoredCandidate<'_>, verbose: bool) -> String {
    if verbose {
        format!("{} [{:.6}]", row.search_text(), row.score)
    } else {
        row.search_text().to_string()
    }
}

/// Counter shown next to the prompt, e.g. `3/120`.
pub fn counter(live: usize, total: usize) -> String {
    format!("{}/{}", live, total)
}
