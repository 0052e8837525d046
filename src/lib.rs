//! Interactive line picker: rank candidates against a query as it is typed
//! and return the value of the chosen line.

pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod scorer;
pub mod signals;
pub mod sources;
pub mod state;
pub mod ui;

pub use crate::error::{PickError, Result};
pub use crate::matcher::FuzzyMatcher;
pub use crate::model::{Candidate, ScoredCandidate};
pub use crate::scorer::Scorer;
pub use crate::state::{Event, Outcome, Session, SessionOptions, SessionState};

use crate::config::ThemeConfig;
use crate::ui::{Display, TerminalDisplay};

/// Runs a picker over `candidates` on the controlling terminal.
pub fn find<S: Scorer>(
    candidates: &[Candidate],
    matcher: FuzzyMatcher<S>,
    options: SessionOptions,
    query: &str,
) -> Result<Outcome> {
    let mut display = TerminalDisplay::new(ThemeConfig::default());
    find_with_display(candidates, matcher, options, query, &mut display)
}

/// Same as [`find`] with a caller supplied display.
pub fn find_with_display<S: Scorer, D: Display>(
    candidates: &[Candidate],
    matcher: FuzzyMatcher<S>,
    options: SessionOptions,
    query: &str,
    display: &mut D,
) -> Result<Outcome> {
    Session::new(candidates, matcher, options, query).run(display)
}
