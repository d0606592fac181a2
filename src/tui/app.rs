//! Interactive terminal application.
//!
//! Owns the event loop: crossterm key events drive the session, the animator
//! is ticked from the poll timeout, and every pass redraws from the session
//! state. All mutations happen synchronously on this thread.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::theme::Theme;
use super::ui::{self, View};
use crate::session::{HistoryStep, PlaceholderAnimator, Session};

/// Redraw cadence while nothing else is scheduled.
const IDLE_TICK: Duration = Duration::from_millis(250);

pub struct TerminalApp {
    session: Session,
    animator: PlaceholderAnimator,
    theme: Theme,
    input: String,
    next_tick: Option<Instant>,
    should_quit: bool,
}

impl TerminalApp {
    pub fn new(session: Session, animator: PlaceholderAnimator) -> Self {
        let next_tick = animator.next_delay().map(|delay| Instant::now() + delay);
        Self {
            session,
            animator,
            theme: Theme::default(),
            input: String::new(),
            next_tick,
            should_quit: false,
        }
    }

    /// Run until the user quits. Restores the terminal before returning.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            let placeholder = self.animator.placeholder();
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &View {
                        transcript: self.session.transcript(),
                        input: &self.input,
                        placeholder: &placeholder,
                        theme: &self.theme,
                    },
                )
            })?;

            let timeout = self
                .next_tick
                .map(|at| at.saturating_duration_since(Instant::now()))
                .unwrap_or(IDLE_TICK);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if let Some(at) = self.next_tick {
                if Instant::now() >= at {
                    self.animator.tick();
                    self.rearm_animator();
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                let raw = std::mem::take(&mut self.input);
                self.absorb_animator();
                self.session.submit(&raw);
            }
            KeyCode::Up => {
                self.absorb_animator();
                if let Some(entry) = self.session.history_up() {
                    self.input = entry;
                }
            }
            KeyCode::Down => {
                self.absorb_animator();
                match self.session.history_down() {
                    Some(HistoryStep::Entry(entry)) => self.input = entry,
                    Some(HistoryStep::ClearInput) => self.input.clear(),
                    None => {}
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.user_edited();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.user_edited();
            }
            _ => {}
        }
    }

    // Typing cancels history browsing and absorbs the placeholder animation.
    fn user_edited(&mut self) {
        self.session.cancel_history();
        self.absorb_animator();
    }

    fn absorb_animator(&mut self) {
        self.animator.notify_user_typed();
        self.rearm_animator();
    }

    fn rearm_animator(&mut self) {
        self.next_tick = self
            .animator
            .next_delay()
            .map(|delay| Instant::now() + delay);
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
