//! Step 2: contributor introductions - who the catalog rhythms come
//! from, with an expandable transcript per person.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Contributor;
use crate::tui::widgets::{themed_block, COLOR_ACCENT, COLOR_FOCUS, COLOR_PANEL};
use crate::tui::wrap_text;

pub struct IntrosViewState {
    pub list_state: ListState,
    pub expanded: Option<usize>,
    pub detail_scroll: u16,
}

impl IntrosViewState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            expanded: None,
            detail_scroll: 0,
        }
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
        self.detail_scroll = 0;
    }

    pub fn toggle_expanded(&mut self) {
        let selected = self.list_state.selected();
        self.expanded = if self.expanded == selected {
            None
        } else {
            selected
        };
        self.detail_scroll = 0;
    }

    pub fn scroll_detail(&mut self, delta: i16) {
        self.detail_scroll = (self.detail_scroll as i16 + delta).max(0) as u16;
    }
}

pub fn draw_intros_view(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut IntrosViewState,
    contributors: &[Contributor],
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(area);

    let items: Vec<ListItem> = contributors
        .iter()
        .map(|c| {
            ListItem::new(vec![
                Line::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(c.role.clone(), Style::default().fg(COLOR_ACCENT)),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(themed_block(
            format!("Contributors ({})", contributors.len()),
            COLOR_FOCUS,
        ))
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(46, 70, 46))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(list, chunks[0], &mut state.list_state);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(contributor) = state
        .list_state
        .selected()
        .and_then(|i| contributors.get(i))
    {
        lines.push(Line::styled(
            contributor.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(contributor.role.clone()));
        lines.push(Line::default());

        lines.push(Line::styled(
            "Why this example:",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for line in wrap_text(&contributor.why, 60) {
            lines.push(Line::from(format!("  {}", line)));
        }

        let expanded = state.expanded == state.list_state.selected();
        if expanded {
            if let Some(media) = &contributor.media {
                lines.push(Line::default());
                lines.push(Line::from(vec![
                    Span::raw("Video: "),
                    Span::styled(media.clone(), Style::default().fg(Color::Cyan)),
                ]));
            }
            if let Some(transcript) = &contributor.transcript {
                lines.push(Line::default());
                lines.push(Line::styled(
                    "Transcript:",
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                for line in wrap_text(transcript, 60) {
                    lines.push(Line::from(format!("  {}", line)));
                }
            }
        } else {
            lines.push(Line::default());
            lines.push(Line::styled(
                "Enter to expand video & transcript",
                Style::default().fg(COLOR_ACCENT),
            ));
        }
    } else {
        lines.push(Line::from("No contributor selected"));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .block(themed_block("Introduction", COLOR_ACCENT))
        .scroll((state.detail_scroll, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[1]);
}
