use crate::config::ThemeConfig;
use crate::error::{PickError, Result};
use crate::signals;
use crate::state::Event;
use crate::ui::input::QueryInput;
use crate::ui::keymap::{self, KeyAction};
use crate::ui::{Display, View, render};
use crossterm::cursor;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::time::Duration;

type Tty = Terminal<CrosstermBackend<Box<dyn Write>>>;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Rows and highlight last handed to `render`, kept so the screen can be
/// redrawn on resize or cursor movement without asking the session.
#[derive(Debug, Default)]
struct Screen {
    rows: Vec<String>,
    highlighted: Option<usize>,
    total: usize,
}

/// Full-screen picker drawn on the controlling terminal with ratatui.
///
/// Drawing goes to `/dev/tty` (stderr when that cannot be opened) so stdout
/// stays free for the selected value.
pub struct TerminalDisplay {
    terminal: Option<Tty>,
    theme: ThemeConfig,
    input: QueryInput,
    screen: Screen,
    list_state: ListState,
    list_area: Rect,
}

impl TerminalDisplay {
    pub fn new(theme: ThemeConfig) -> Self {
        Self {
            terminal: None,
            theme,
            input: QueryInput::default(),
            screen: Screen::default(),
            list_state: ListState::default(),
            list_area: Rect::default(),
        }
    }

    fn open_tty() -> Box<dyn Write> {
        match OpenOptions::new().write(true).open("/dev/tty") {
            Ok(tty) => Box::new(tty),
            Err(e) => {
                warn!("cannot open /dev/tty ({}), drawing on stderr", e);
                Box::new(io::stderr())
            }
        }
    }

    fn init_terminal() -> io::Result<Tty> {
        enable_raw_mode()?;
        let mut out = Self::open_tty();
        execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(out))
    }

    fn restore_terminal(terminal: &mut Tty) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        )?;
        terminal.show_cursor()
    }

    fn page_size(&self) -> usize {
        usize::from(self.list_area.height).max(1)
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            theme,
            input,
            screen,
            list_state,
            list_area,
        } = self;
        let Some(terminal) = terminal.as_mut() else {
            return Ok(());
        };
        list_state.select(screen.highlighted);
        terminal
            .draw(|frame| {
                *list_area = draw_frame(frame, theme, input, screen, list_state);
            })
            .map_err(PickError::Terminal)?;
        Ok(())
    }
}

impl Display for TerminalDisplay {
    fn start(&mut self, initial_query: &str) -> Result<()> {
        self.input = QueryInput::new(initial_query);
        match Self::init_terminal() {
            Ok(terminal) => {
                self.terminal = Some(terminal);
                Ok(())
            }
            Err(e) => {
                // Undo whatever part of the setup succeeded.
                let _ = disable_raw_mode();
                let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
                Err(PickError::Terminal(e))
            }
        }
    }

    fn render(&mut self, view: &View<'_>) -> Result<()> {
        self.screen = Screen {
            rows: view.rows.clone(),
            highlighted: view.highlighted,
            total: view.total,
        };
        self.draw()
    }

    fn next_event(&mut self) -> Result<Event> {
        loop {
            if signals::terminated() {
                debug!("termination signal received");
                return Ok(Event::Cancel);
            }
            if !event::poll(POLL_INTERVAL).map_err(PickError::Terminal)? {
                continue;
            }
            match event::read().map_err(PickError::Terminal)? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let page_size = self.page_size();
                    match keymap::map_key(key, &mut self.input, page_size) {
                        KeyAction::Session(event) => {
                            debug!("key {:?} -> {:?}", key.code, event);
                            return Ok(event);
                        }
                        KeyAction::CursorMoved => self.draw()?,
                        KeyAction::Ignored => {}
                    }
                }
                TermEvent::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        let picked = keymap::row_at(
                            self.list_area,
                            self.list_state.offset(),
                            self.screen.rows.len(),
                            mouse.column,
                            mouse.row,
                        );
                        if let Some(row) = picked {
                            return Ok(Event::Pick(row));
                        }
                    }
                }
                TermEvent::Resize(..) => self.draw()?,
                _ => {}
            }
        }
    }

    fn finish(&mut self) -> Result<()> {
        match self.terminal.take() {
            Some(mut terminal) => Self::restore_terminal(&mut terminal).map_err(PickError::Terminal),
            None => Ok(()),
        }
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        if let Some(mut terminal) = self.terminal.take() {
            let _ = Self::restore_terminal(&mut terminal);
        }
    }
}

/// Lays out the list above a one line prompt. Returns the list area.
fn draw_frame(
    frame: &mut Frame,
    theme: &ThemeConfig,
    input: &QueryInput,
    screen: &Screen,
    list_state: &mut ListState,
) -> Rect {
    let [list_area, prompt_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    if screen.rows.is_empty() {
        let empty = Paragraph::new("no matches").style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(empty, list_area);
    } else {
        let items: Vec<ListItem> = screen.rows.iter().map(|r| ListItem::new(r.as_str())).collect();
        let highlight = Style::default()
            .fg(theme.highlight_fg())
            .bg(theme.highlight_bg())
            .add_modifier(Modifier::BOLD);
        let list = List::new(items)
            .highlight_style(highlight)
            .highlight_symbol(theme.highlight_symbol.as_str());
        frame.render_stateful_widget(list, list_area, list_state);
    }

    let counter = render::counter(screen.rows.len(), screen.total);
    let counter_width = u16::try_from(counter.len() + 1).unwrap_or(u16::MAX);
    let [query_area, counter_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(counter_width)]).areas(prompt_area);

    let prompt = Line::from(vec![
        Span::styled(theme.prompt.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(input.text()),
    ]);
    frame.render_widget(Paragraph::new(prompt), query_area);

    let counter = Paragraph::new(counter)
        .alignment(Alignment::Right)
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(counter, counter_area);

    let cursor_x = Span::raw(theme.prompt.as_str()).width() + Span::raw(input.before_cursor()).width();
    let cursor_x = query_area.x.saturating_add(u16::try_from(cursor_x).unwrap_or(u16::MAX));
    frame.set_cursor_position((cursor_x.min(query_area.right().saturating_sub(1)), query_area.y));

    list_area
}
