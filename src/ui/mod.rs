//! Display capability: anything that can show the live rows, collect query
//! edits and report key or pointer input as session events.

use crate::error::Result;
use crate::state::Event;

pub mod input;
pub mod keymap;
pub mod render;
pub mod terminal;

pub use self::terminal::TerminalDisplay;

/// Snapshot of what should be on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'v> {
    pub query: &'v str,
    /// Display strings of the live rows, in rank order.
    pub rows: Vec<String>,
    /// `None` when there are no rows.
    pub highlighted: Option<usize>,
    /// Size of the unfiltered candidate set.
    pub total: usize,
}

pub trait Display {
    /// Prepares the surface and seeds the query field. On error nothing is
    /// left half initialised.
    fn start(&mut self, initial_query: &str) -> Result<()>;

    fn render(&mut self, view: &View<'_>) -> Result<()>;

    /// Blocks until the next event that concerns the session.
    fn next_event(&mut self) -> Result<Event>;

    /// Releases the surface. Called once after the session ends.
    fn finish(&mut self) -> Result<()>;
}
