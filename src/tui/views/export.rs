//! Step 5: VPS dialog prep and export - vision/people/structure notes
//! beside a live preview of the document the sinks will emit.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::session::VpsNotes;
use crate::tui::editor::{EditorField, FieldEditor};
use crate::tui::widgets::{themed_block, COLOR_ACCENT, COLOR_PANEL};

pub struct ExportViewState {
    pub editor: FieldEditor,
    pub preview_scroll: u16,
}

impl ExportViewState {
    pub fn new(vps: &VpsNotes) -> Self {
        Self {
            editor: FieldEditor::new(vec![
                EditorField::multiline("Vision - why these rhythms?", vps.vision.clone()),
                EditorField::multiline("People - ownership & roles", vps.people.clone()),
                EditorField::multiline("Structure - lightweight scaffolding", vps.structure.clone()),
            ]),
            preview_scroll: 0,
        }
    }

    pub fn to_vps(&self) -> VpsNotes {
        VpsNotes {
            vision: self.editor.value(0).to_string(),
            people: self.editor.value(1).to_string(),
            structure: self.editor.value(2).to_string(),
        }
    }

    pub fn scroll_preview(&mut self, delta: i16) {
        self.preview_scroll = (self.preview_scroll as i16 + delta).max(0) as u16;
    }
}

pub fn draw_export_view(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ExportViewState,
    preview: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(area);

    state.editor.draw(frame, chunks[0]);

    let paragraph = Paragraph::new(preview.to_string())
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .block(themed_block(
            "Preview (w write file · o print view · J/K scroll)",
            COLOR_ACCENT,
        ))
        .scroll((state.preview_scroll, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[1]);
}
