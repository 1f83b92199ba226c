//! Reusable TUI widgets

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::wizard::{Step, TOTAL_STEPS};

// Color scheme
pub const COLOR_BG: Color = Color::Rgb(10, 12, 10);
pub const COLOR_PANEL: Color = Color::Rgb(10, 12, 10);
pub const COLOR_ACCENT: Color = Color::Rgb(140, 160, 140);
pub const COLOR_FOCUS: Color = Color::Green;
pub const COLOR_ADDED: Color = Color::Green;

/// Status message tone for styling
#[derive(Clone, Copy, Default)]
pub enum StatusTone {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl StatusTone {
    pub fn color(self) -> Color {
        match self {
            StatusTone::Info => Color::Cyan,
            StatusTone::Success => Color::Green,
            StatusTone::Error => Color::Red,
            StatusTone::Warning => Color::Yellow,
        }
    }
}

/// Create a themed block with consistent styling
pub fn themed_block(title: impl Into<String>, border_color: Color) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title.into(),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
}

/// Draw the walkthrough header: title, step position, and nav hints.
pub fn draw_step_header(frame: &mut Frame<'_>, area: Rect, step: Step) {
    let advance = if step.is_last() { "finish: q" } else { "next: n" };
    let back = if step.is_first() { "" } else { " · back: b" };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Smorgasbord Planner",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  ·  Step {} of {}  ·  {}",
                step.number(),
                TOTAL_STEPS,
                step.label()
            )),
        ]),
        Line::styled(
            format!("{}{}", advance, back),
            Style::default().fg(COLOR_ACCENT),
        ),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .block(themed_block("", COLOR_ACCENT));
    frame.render_widget(paragraph, area);
}

/// Draw a command palette at the bottom of the screen
pub fn draw_command_palette(frame: &mut Frame<'_>, area: Rect, buffer: &str) {
    let height = 3;
    if area.height < height + 2 {
        return;
    }
    let popup = Rect {
        x: area.x + 2,
        y: area.y + area.height - height - 1,
        width: area.width.saturating_sub(4),
        height,
    };
    frame.render_widget(Clear, popup);
    let block = themed_block("Command", COLOR_ACCENT);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    let paragraph = Paragraph::new(format!(":{}", buffer))
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Draw a status bar with message and help text
pub fn draw_status_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    message: &str,
    tone: StatusTone,
    state_line: &str,
    help_line: &str,
) {
    let info = Line::styled(
        message,
        Style::default()
            .fg(tone.color())
            .add_modifier(Modifier::BOLD),
    );
    let state = Line::from(state_line.to_string());
    let help = Line::from(help_line.to_string());

    let paragraph = Paragraph::new(vec![info, state, help])
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .block(themed_block("Status", COLOR_ACCENT))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
