//! Step 3: smorgasbord explorer - search and filter the catalog, browse
//! details, and add items to the plan.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::catalog::{filter, Cadence, Catalog, CatalogItem, EngagementKind, FilterSpec};
use crate::plan::Plan;
use crate::tui::widgets::{
    themed_block, COLOR_ACCENT, COLOR_ADDED, COLOR_FOCUS, COLOR_PANEL,
};
use crate::tui::{ellipsize, sanitize_text, wrap_text};

pub struct ExplorerViewState {
    pub spec: FilterSpec,
    pub editing_query: bool,
    pub table_state: TableState,
    pub detail_scroll: u16,
}

impl ExplorerViewState {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            spec: FilterSpec::default(),
            editing_query: false,
            table_state,
            detail_scroll: 0,
        }
    }

    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
        filter(&catalog.items, &self.spec)
    }

    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a CatalogItem> {
        let filtered = self.filtered(catalog);
        self.table_state
            .selected()
            .and_then(|i| filtered.get(i).copied())
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.table_state.select(Some(next));
        self.detail_scroll = 0;
    }

    fn reset_selection(&mut self, len: usize) {
        self.table_state
            .select(if len == 0 { None } else { Some(0) });
        self.detail_scroll = 0;
    }

    pub fn cycle_cadence(&mut self, len_after: impl Fn(&FilterSpec) -> usize) {
        self.spec.cadence = match self.spec.cadence {
            None => Some(Cadence::ALL[0]),
            Some(current) => Cadence::ALL
                .iter()
                .position(|&c| c == current)
                .and_then(|i| Cadence::ALL.get(i + 1).copied()),
        };
        let len = len_after(&self.spec);
        self.reset_selection(len);
    }

    pub fn cycle_kind(&mut self, len_after: impl Fn(&FilterSpec) -> usize) {
        self.spec.kind = match self.spec.kind {
            None => Some(EngagementKind::ALL[0]),
            Some(current) => EngagementKind::ALL
                .iter()
                .position(|&k| k == current)
                .and_then(|i| EngagementKind::ALL.get(i + 1).copied()),
        };
        let len = len_after(&self.spec);
        self.reset_selection(len);
    }

    /// Handle a key while the query box is being edited. Returns false
    /// when not editing so the caller falls through to its own bindings.
    pub fn handle_query_key(&mut self, key: KeyEvent, len_after: impl Fn(&FilterSpec) -> usize) -> bool {
        if !self.editing_query {
            return false;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.editing_query = false;
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.spec.query.pop();
                let len = len_after(&self.spec);
                self.reset_selection(len);
            }
            KeyCode::Char(c) => {
                self.spec.query.push(c);
                let len = len_after(&self.spec);
                self.reset_selection(len);
            }
            _ => {}
        }
        true
    }

    pub fn scroll_detail(&mut self, delta: i16) {
        self.detail_scroll = (self.detail_scroll as i16 + delta).max(0) as u16;
    }

    fn cadence_label(&self) -> &'static str {
        self.spec.cadence.map_or("all", Cadence::label)
    }

    fn kind_label(&self) -> &'static str {
        self.spec.kind.map_or("all", EngagementKind::label)
    }
}

pub fn draw_explorer_view(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut ExplorerViewState,
    catalog: &Catalog,
    plan: &Plan,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)].as_ref())
        .split(area);

    draw_filter_bar(frame, chunks[0], state);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(chunks[1]);

    draw_item_table(frame, main[0], state, catalog, plan);
    draw_item_detail(frame, main[1], state, catalog, plan);
}

fn draw_filter_bar(frame: &mut Frame<'_>, area: Rect, state: &ExplorerViewState) {
    let cursor = if state.editing_query { "▌" } else { "" };
    let line = Line::from(vec![
        Span::raw("Search: "),
        Span::styled(
            format!("{}{}", state.spec.query, cursor),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   cadence={}  kind={}",
                state.cadence_label(),
                state.kind_label()
            ),
            Style::default().fg(COLOR_ACCENT),
        ),
    ]);
    let border = if state.editing_query {
        COLOR_FOCUS
    } else {
        COLOR_ACCENT
    };
    let paragraph = Paragraph::new(line)
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .block(themed_block("Filters (/ edit · c cadence · e kind)", border));
    frame.render_widget(paragraph, area);
}

fn draw_item_table(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut ExplorerViewState,
    catalog: &Catalog,
    plan: &Plan,
) {
    let filtered = state.filtered(catalog);

    let headers = Row::new(vec!["", "Title", "Cadence", "Kind", "Who"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = filtered.iter().map(|item| {
        let added = plan.is_added(&item.id);
        let marker = if added { "✓" } else { "" };
        let style = if added {
            Style::default().fg(COLOR_ADDED)
        } else {
            Style::default().fg(Color::White)
        };
        Row::new(vec![
            marker.to_string(),
            ellipsize(&sanitize_text(&item.title), 32),
            item.cadence.to_string(),
            item.kind.to_string(),
            item.contributor.clone(),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(40),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(headers)
    .block(themed_block(
        format!("Catalog ({}/{})", filtered.len(), catalog.items.len()),
        COLOR_FOCUS,
    ))
    .column_spacing(1)
    .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
    .highlight_style(
        Style::default()
            .bg(Color::Rgb(46, 70, 46))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(table, area, &mut state.table_state);
}

fn draw_item_detail(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ExplorerViewState,
    catalog: &Catalog,
    plan: &Plan,
) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(item) = state.selected(catalog) {
        lines.push(Line::styled(
            sanitize_text(&item.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(format!(
            "{} · {} · {} · {}",
            item.contributor, item.cadence, item.activity, item.kind
        )));
        if plan.is_added(&item.id) {
            lines.push(Line::styled(
                "✓ Added to your plan",
                Style::default()
                    .fg(COLOR_ADDED)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::default());

        for line in wrap_text(&item.description, 56) {
            lines.push(Line::from(line));
        }

        if let Some(media) = &item.media {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::raw("Video: "),
                Span::styled(media.clone(), Style::default().fg(Color::Cyan)),
            ]));
        }

        if let Some(transcript) = &item.transcript {
            lines.push(Line::default());
            lines.push(Line::styled(
                "Notes:",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            for line in wrap_text(transcript, 56) {
                lines.push(Line::from(format!("  {}", line)));
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "Press 'a' to add to your plan",
            Style::default().fg(COLOR_ACCENT),
        ));
    } else {
        lines.push(Line::from("No items match the current filters"));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .block(themed_block("Detail", COLOR_ACCENT))
        .scroll((state.detail_scroll, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
