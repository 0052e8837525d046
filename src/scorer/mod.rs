//! Text scorers used by the match engine.
//!
//! A scorer compares a candidate's text against one query term and returns a
//! similarity score. Larger is better. Scorers are pure: the same inputs and
//! configuration always give the same score.

pub mod nucleo;
pub mod smith_waterman;

pub use self::nucleo::NucleoScorer;
pub use self::smith_waterman::{MatchMismatch, SmithWatermanGotoh};

pub trait Scorer {
    fn compare(&self, text: &str, term: &str) -> f64;
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn compare(&self, text: &str, term: &str) -> f64 {
        (**self).compare(text, term)
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn compare(&self, text: &str, term: &str) -> f64 {
        (**self).compare(text, term)
    }
}

/// Adapts a plain function or closure into a scorer.
#[derive(Debug, Clone, Copy)]
pub struct FnScorer<F>(pub F);

impl<F> Scorer for FnScorer<F>
where
    F: Fn(&str, &str) -> f64,
{
    fn compare(&self, text: &str, term: &str) -> f64 {
        (self.0)(text, term)
    }
}

/// Scores everything as 1.0 so an unscored set stays fully visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopScorer;

impl Scorer for NopScorer {
    fn compare(&self, _text: &str, _term: &str) -> f64 {
        1.0
    }
}

/// True when the query contains an uppercase letter. Decides case
/// sensitivity for the whole session.
pub fn has_upper(query: &str) -> bool {
    query.chars().any(|c| c.is_alphabetic() && c.is_uppercase())
}
