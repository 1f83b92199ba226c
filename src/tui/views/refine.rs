//! Step 4: refine the plan - edit titles and descriptions to fit the
//! local context, drop entries, or start over.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::catalog::Cadence;
use crate::plan::{EntryPatch, Plan};
use crate::tui::editor::{EditorField, FieldEditor};
use crate::tui::widgets::{themed_block, COLOR_ACCENT, COLOR_FOCUS, COLOR_PANEL};
use crate::tui::{ellipsize, sanitize_text, wrap_text};

/// An open edit session against one plan entry, pinned to the position
/// it was opened at. Positions stay valid because the editor captures
/// all input until it is committed.
pub struct EntryEditor {
    pub cadence: Cadence,
    pub index: usize,
    pub editor: FieldEditor,
}

impl EntryEditor {
    pub fn patch(&self) -> EntryPatch {
        EntryPatch {
            title: Some(self.editor.value(0).to_string()),
            description: Some(self.editor.value(1).to_string()),
        }
    }
}

pub struct RefineViewState {
    pub table_state: TableState,
    pub editor: Option<EntryEditor>,
}

impl RefineViewState {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            table_state,
            editor: None,
        }
    }

    /// Flattened (cadence, in-bucket index) rows, recomputed from a
    /// fresh read of the plan so positions never go stale.
    pub fn rows(plan: &Plan) -> Vec<(Cadence, usize)> {
        Cadence::ALL
            .iter()
            .flat_map(|&cadence| (0..plan.bucket(cadence).len()).map(move |i| (cadence, i)))
            .collect()
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.table_state.select(Some(next));
    }

    pub fn clamp_selection(&mut self, len: usize) {
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            None => self.table_state.select(Some(0)),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    pub fn selected_row(&self, plan: &Plan) -> Option<(Cadence, usize)> {
        let rows = Self::rows(plan);
        self.table_state.selected().and_then(|i| rows.get(i).copied())
    }

    pub fn open_editor(&mut self, plan: &Plan) {
        if let Some((cadence, index)) = self.selected_row(plan) {
            let entry = &plan.bucket(cadence)[index];
            let mut editor = FieldEditor::new(vec![
                EditorField::line("Title", entry.title.clone()),
                EditorField::multiline("Description", entry.description.clone()),
            ]);
            editor.begin();
            self.editor = Some(EntryEditor {
                cadence,
                index,
                editor,
            });
        }
    }
}

pub fn draw_refine_view(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut RefineViewState,
    plan: &Plan,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(area);

    draw_entry_table(frame, chunks[0], state, plan);

    if let Some(entry_editor) = &state.editor {
        let editor_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)].as_ref())
            .split(chunks[1]);
        entry_editor.editor.draw(frame, editor_chunks[0]);
        let hint = Paragraph::new("Esc saves the edit · Tab switches field")
            .style(Style::default().bg(COLOR_PANEL).fg(COLOR_ACCENT))
            .block(themed_block("", COLOR_ACCENT));
        frame.render_widget(hint, editor_chunks[1]);
    } else {
        draw_entry_detail(frame, chunks[1], state, plan);
    }
}

fn draw_entry_table(frame: &mut Frame<'_>, area: Rect, state: &mut RefineViewState, plan: &Plan) {
    let positions = RefineViewState::rows(plan);
    state.clamp_selection(positions.len());

    let headers = Row::new(vec!["Cadence", "Title", "Type"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = positions.iter().map(|&(cadence, index)| {
        let entry = &plan.bucket(cadence)[index];
        Row::new(vec![
            cadence.to_string(),
            ellipsize(&sanitize_text(&entry.title), 34),
            format!("{} · {}", entry.activity, entry.kind),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Percentage(55),
            Constraint::Percentage(35),
        ],
    )
    .header(headers)
    .block(themed_block(
        format!("Your Plan ({} selected)", plan.len()),
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

fn draw_entry_detail(frame: &mut Frame<'_>, area: Rect, state: &RefineViewState, plan: &Plan) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some((cadence, index)) = state.selected_row(plan) {
        let entry = &plan.bucket(cadence)[index];
        lines.push(Line::styled(
            sanitize_text(&entry.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(format!(
            "{} · {} · {}",
            cadence, entry.activity, entry.kind
        )));
        lines.push(Line::default());
        for line in wrap_text(&entry.description, 52) {
            lines.push(Line::from(line));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "Enter edit · d remove · R reset plan",
            Style::default().fg(COLOR_ACCENT),
        ));
    } else if plan.is_empty() {
        lines.push(Line::from("No items yet."));
        lines.push(Line::default());
        lines.push(Line::styled(
            "Go back to the explorer (b) and add a few rhythms. Aim for 1-2 per cadence.",
            Style::default().fg(COLOR_ACCENT),
        ));
    }

    // Bucket counts, canonical order
    lines.push(Line::default());
    let counts = Cadence::ALL
        .iter()
        .map(|&c| format!("{} {}", c.label(), plan.bucket(c).len()))
        .collect::<Vec<_>>()
        .join(" · ");
    lines.push(Line::styled(counts, Style::default().fg(COLOR_ACCENT)));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .block(themed_block("Detail", COLOR_ACCENT))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
