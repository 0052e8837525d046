use crate::error::Result;
use crate::matcher::FuzzyMatcher;
use crate::model::{Candidate, ScoredCandidate};
use crate::scorer::Scorer;
use crate::ui::{Display, View, render};
use log::{debug, info};

/// Semantic input events. Display implementations translate raw key and
/// pointer input into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The query text changed; carries the full new text.
    QueryChanged(String),
    Previous,
    Next,
    /// Move up by this many rows, clamped at the first row.
    PageUp(usize),
    /// Move down by this many rows, clamped at the last row.
    PageDown(usize),
    Confirm,
    Cancel,
    /// A row was picked directly (e.g. clicked). Same as highlight + confirm.
    Pick(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState<'a> {
    Editing {
        query: String,
        live: Vec<ScoredCandidate<'a>>,
        highlighted: usize,
    },
    Selected(String),
    /// The initial query left exactly one candidate; no interaction happened.
    AutoResolved(String),
    Cancelled,
}

impl SessionState<'_> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Editing { .. })
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(String),
    AutoResolved(String),
    Cancelled,
}

impl Outcome {
    /// The value to print, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Outcome::Selected(v) | Outcome::AutoResolved(v) => Some(v),
            Outcome::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionOptions {
    /// Append each row's score to its displayed text.
    pub verbose: bool,
    /// Return immediately when the initial query leaves one candidate.
    pub return_one_result: bool,
    /// Overrides the matcher's visibility threshold.
    pub hide_less_than: Option<f64>,
}

/// One interactive selection over a fixed candidate set.
pub struct Session<'a, S> {
    candidates: &'a [Candidate],
    matcher: FuzzyMatcher<S>,
    options: SessionOptions,
    state: SessionState<'a>,
}

impl<'a, S: Scorer> Session<'a, S> {
    /// Runs the first filter pass with `initial_query`. With
    /// `return_one_result` set and exactly one live candidate the session is
    /// already resolved when this returns.
    pub fn new(
        candidates: &'a [Candidate],
        matcher: FuzzyMatcher<S>,
        options: SessionOptions,
        initial_query: &str,
    ) -> Self {
        let matcher = match options.hide_less_than {
            Some(threshold) => matcher.with_hide_less_than(threshold),
            None => matcher,
        };
        let live = matcher.filter(initial_query, candidates);

        let state = match live.as_slice() {
            [only] if options.return_one_result => {
                info!("Session: initial query resolved to a single candidate");
                SessionState::AutoResolved(only.return_value().to_string())
            }
            _ => SessionState::Editing {
                query: initial_query.to_string(),
                live,
                highlighted: 0,
            },
        };

        Self {
            candidates,
            matcher,
            options,
            state,
        }
    }

    pub fn state(&self) -> &SessionState<'a> {
        &self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match &self.state {
            SessionState::Editing { .. } => None,
            SessionState::Selected(v) => Some(Outcome::Selected(v.clone())),
            SessionState::AutoResolved(v) => Some(Outcome::AutoResolved(v.clone())),
            SessionState::Cancelled => Some(Outcome::Cancelled),
        }
    }

    /// Applies one event. Returns true when the visible rows or the
    /// highlight changed and the display should be redrawn.
    pub fn handle(&mut self, event: Event) -> bool {
        let SessionState::Editing {
            query,
            live,
            highlighted,
        } = &mut self.state
        else {
            return false;
        };
        debug!("Session: {:?}", event);

        match event {
            Event::QueryChanged(text) => {
                *live = self.matcher.filter(&text, self.candidates);
                *query = text;
                *highlighted = 0;
                true
            }
            Event::Previous => move_highlight(highlighted, live.len(), -1),
            Event::Next => move_highlight(highlighted, live.len(), 1),
            Event::PageUp(rows) => move_highlight(highlighted, live.len(), -(rows.max(1) as isize)),
            Event::PageDown(rows) => move_highlight(highlighted, live.len(), rows.max(1) as isize),
            Event::Confirm => {
                let value = live.get(*highlighted).map(|row| row.return_value());
                if let Some(value) = value {
                    self.state = SessionState::Selected(value.to_string());
                }
                false
            }
            Event::Pick(row) => {
                let value = live.get(row).map(|picked| picked.return_value());
                if let Some(value) = value {
                    self.state = SessionState::Selected(value.to_string());
                }
                false
            }
            Event::Cancel => {
                self.state = SessionState::Cancelled;
                false
            }
        }
    }

    /// What the display should currently show.
    pub fn view(&self) -> View<'_> {
        match &self.state {
            SessionState::Editing {
                query,
                live,
                highlighted,
            } => View {
                query,
                rows: live
                    .iter()
                    .map(|row| render::row_text(row, self.options.verbose))
                    .collect(),
                highlighted: (!live.is_empty()).then_some(*highlighted),
                total: self.candidates.len(),
            },
            _ => View {
                query: "",
                rows: Vec::new(),
                highlighted: None,
                total: self.candidates.len(),
            },
        }
    }

    /// Drives the session to a terminal state using `display`. A session that
    /// auto-resolved never touches the display.
    pub fn run<D: Display>(mut self, display: &mut D) -> Result<Outcome> {
        if let Some(outcome) = self.outcome() {
            return Ok(outcome);
        }

        let initial_query = match &self.state {
            SessionState::Editing { query, .. } => query.clone(),
            _ => String::new(),
        };
        display.start(&initial_query)?;

        let result = self.event_loop(display);
        let restored = display.finish();
        let outcome = result?;
        restored?;

        info!("Session: finished with {:?}", outcome);
        Ok(outcome)
    }

    fn event_loop<D: Display>(&mut self, display: &mut D) -> Result<Outcome> {
        display.render(&self.view())?;
        loop {
            let event = display.next_event()?;
            if self.handle(event) {
                display.render(&self.view())?;
            }
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
        }
    }
}

fn move_highlight(highlighted: &mut usize, len: usize, delta: isize) -> bool {
    if len == 0 {
        return false;
    }
    let target = highlighted.saturating_add_signed(delta).min(len - 1);
    let changed = target != *highlighted;
    *highlighted = target;
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::FnScorer;

    fn exact(text: &str, term: &str) -> f64 {
        if text == term { 2.0 } else { 0.0 }
    }

    fn contains(text: &str, term: &str) -> f64 {
        if text.contains(term) { 2.0 } else { 0.0 }
    }

    fn fruit() -> Vec<Candidate> {
        ["apple", "banana", "cherry"]
            .into_iter()
            .map(Candidate::line)
            .collect()
    }

    fn highlighted(session: &Session<'_, impl Scorer>) -> usize {
        match session.state() {
            SessionState::Editing { highlighted, .. } => *highlighted,
            other => panic!("not editing: {:?}", other),
        }
    }

    #[test]
    fn single_match_auto_resolves() {
        let all = fruit();
        let options = SessionOptions {
            return_one_result: true,
            ..Default::default()
        };
        let session = Session::new(&all, FuzzyMatcher::new(FnScorer(exact)), options, "banana");
        assert_eq!(session.outcome(), Some(Outcome::AutoResolved("banana".to_string())));
    }

    #[test]
    fn single_match_without_flag_stays_interactive() {
        let all = fruit();
        let session = Session::new(&all, FuzzyMatcher::new(FnScorer(exact)), SessionOptions::default(), "banana");
        assert!(!session.state().is_terminal());
    }

    #[test]
    fn query_change_resets_highlight() {
        let all = fruit();
        let mut session = Session::new(&all, FuzzyMatcher::new(FnScorer(contains)), SessionOptions::default(), "");
        assert!(session.handle(Event::Next));
        assert_eq!(highlighted(&session), 1);
        assert!(session.handle(Event::QueryChanged("an".to_string())));
        assert_eq!(highlighted(&session), 0);
        assert_eq!(session.view().rows, vec!["banana".to_string()]);
    }

    #[test]
    fn navigation_clamps_at_edges() {
        let all = fruit();
        let mut session = Session::new(&all, FuzzyMatcher::new(FnScorer(contains)), SessionOptions::default(), "");
        assert!(!session.handle(Event::Previous));
        assert_eq!(highlighted(&session), 0);
        session.handle(Event::PageDown(10));
        assert_eq!(highlighted(&session), 2);
        assert!(!session.handle(Event::Next));
        assert_eq!(highlighted(&session), 2);
        session.handle(Event::PageUp(10));
        assert_eq!(highlighted(&session), 0);
    }

    #[test]
    fn confirm_on_empty_live_set_is_noop() {
        let all = fruit();
        let mut session = Session::new(&all, FuzzyMatcher::new(FnScorer(contains)), SessionOptions::default(), "zzz");
        session.handle(Event::Confirm);
        assert!(!session.state().is_terminal());
        session.handle(Event::Next);
        assert!(!session.state().is_terminal());
        assert_eq!(session.view().highlighted, None);
    }

    #[test]
    fn confirm_returns_highlighted_value() {
        let all = vec![Candidate::new("Firefox", "firefox.desktop"), Candidate::new("Kitty", "kitty.desktop")];
        let mut session = Session::new(&all, FuzzyMatcher::default(), SessionOptions::default(), "");
        session.handle(Event::Next);
        session.handle(Event::Confirm);
        assert_eq!(session.outcome(), Some(Outcome::Selected("kitty.desktop".to_string())));
    }

    #[test]
    fn pick_out_of_range_is_ignored() {
        let all = fruit();
        let mut session = Session::new(&all, FuzzyMatcher::default(), SessionOptions::default(), "");
        session.handle(Event::Pick(7));
        assert!(!session.state().is_terminal());
        session.handle(Event::Pick(2));
        assert_eq!(session.outcome(), Some(Outcome::Selected("cherry".to_string())));
    }

    #[test]
    fn events_after_terminal_state_are_ignored() {
        let all = fruit();
        let mut session = Session::new(&all, FuzzyMatcher::default(), SessionOptions::default(), "");
        session.handle(Event::Cancel);
        assert!(!session.handle(Event::QueryChanged("a".to_string())));
        session.handle(Event::Confirm);
        assert_eq!(session.outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn hide_less_than_override_applies() {
        let all = fruit();
        let options = SessionOptions {
            hide_less_than: Some(3.0),
            ..Default::default()
        };
        let session = Session::new(&all, FuzzyMatcher::new(FnScorer(contains)), options, "a");
        assert!(session.view().rows.is_empty());
    }

    #[test]
    fn verbose_view_shows_scores() {
        let all = fruit();
        let options = SessionOptions {
            verbose: true,
            ..Default::default()
        };
        let session = Session::new(&all, FuzzyMatcher::new(FnScorer(contains)), options, "cherry");
        assert_eq!(session.view().rows, vec!["cherry [2.000000]".to_string()]);
        assert_eq!(session.view().total, 3);
    }
}
