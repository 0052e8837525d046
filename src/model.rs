/// One selectable item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    search_text: String,  // Text scored against the query and displayed
    return_value: String, // Text printed when the row is selected
}

impl Candidate {
    pub fn new(search_text: impl Into<String>, return_value: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            return_value: return_value.into(),
        }
    }

    /// A candidate whose displayed and returned text are the same line.
    pub fn line(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            search_text: text.clone(),
            return_value: text,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn return_value(&self) -> &str {
        &self.return_value
    }
}

/// Score given to candidates before any query has been applied.
pub const UNSCORED: f64 = 1.0;

/// A candidate paired with its aggregate score for one filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    pub score: f64,
}

impl<'a> ScoredCandidate<'a> {
    pub fn new(candidate: &'a Candidate) -> Self {
        Self {
            candidate,
            score: UNSCORED,
        }
    }

    pub fn with_score(candidate: &'a Candidate, score: f64) -> Self {
        Self { candidate, score }
    }

    pub fn search_text(&self) -> &'a str {
        self.candidate.search_text()
    }

    pub fn return_value(&self) -> &'a str {
        self.candidate.return_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_candidate_returns_its_own_text() {
        let c = Candidate::line("src/main.rs");
        assert_eq!(c.search_text(), "src/main.rs");
        assert_eq!(c.return_value(), "src/main.rs");
    }

    #[test]
    fn fresh_scored_candidate_is_visible_by_default() {
        let c = Candidate::new("Firefox", "firefox.desktop");
        let scored = ScoredCandidate::new(&c);
        assert_eq!(scored.score, UNSCORED);
        assert_eq!(scored.return_value(), "firefox.desktop");
    }
}
