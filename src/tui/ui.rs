//! Rendering for the terminal UI.
//!
//! Two regions: the transcript (bottom-anchored scroll) and a single-line
//! input box. The placeholder text is drawn dim inside the input box while
//! the input is empty and the animator has not been absorbed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::session::{LogEntry, PROMPT};

/// Everything the renderer needs for one frame.
pub struct View<'a> {
    pub transcript: &'a [LogEntry],
    pub input: &'a str,
    pub placeholder: &'a str,
    pub theme: &'a Theme,
}

pub fn render(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    render_transcript(frame, chunks[0], view);
    render_input(frame, chunks[1], view);
}

fn render_transcript(frame: &mut Frame, area: Rect, view: &View) {
    let theme = view.theme;
    let lines: Vec<Line> = view
        .transcript
        .iter()
        .map(|entry| {
            let style = if entry.is_command_echo {
                theme.echo_style()
            } else {
                theme.text_style()
            };
            Line::from(Span::styled(entry.text.clone(), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.dim_style())
        .title(Span::styled(" folioterm ", theme.accent_style()));
    let inner_height = block.inner(area).height as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let transcript = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(transcript, area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &View) {
    let theme = view.theme;
    let prompt = Span::styled(PROMPT, theme.accent_style());
    let body = if view.input.is_empty() && !view.placeholder.is_empty() {
        Span::styled(view.placeholder.to_string(), theme.dim_style())
    } else {
        Span::styled(view.input.to_string(), theme.echo_style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.dim_style());
    let inner = block.inner(area);
    let input = Paragraph::new(Line::from(vec![prompt, body])).block(block);
    frame.render_widget(input, area);

    // Cursor sits after the typed input, not after the placeholder
    let cursor_x = inner.x + (PROMPT.width() + view.input.width()) as u16;
    frame.set_cursor_position(Position::new(cursor_x.min(inner.right()), inner.y));
}
