//! Step 1: pre-course check-in - a quick spiritual/vision temperature
//! check captured in three free-text answers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::session::CheckIn;
use crate::tui::editor::{EditorField, FieldEditor};
use crate::tui::widgets::{themed_block, COLOR_ACCENT, COLOR_PANEL};
use ratatui::style::Color;

pub struct CheckInViewState {
    pub editor: FieldEditor,
}

impl CheckInViewState {
    pub fn new(check_in: &CheckIn) -> Self {
        Self {
            editor: FieldEditor::new(vec![
                EditorField::multiline(
                    "Where are you sensing enthusiasm right now?",
                    check_in.enthusiasm.clone(),
                ),
                EditorField::multiline(
                    "What might be stirring?",
                    check_in.sensing.clone(),
                ),
                EditorField::line(
                    "A short prayer or Scripture you're holding",
                    check_in.scripture.clone(),
                ),
            ]),
        }
    }

    /// Current answers as the session snapshot shape.
    pub fn to_check_in(&self) -> CheckIn {
        CheckIn {
            enthusiasm: self.editor.value(0).to_string(),
            sensing: self.editor.value(1).to_string(),
            scripture: self.editor.value(2).to_string(),
        }
    }
}

pub fn draw_checkin_view(frame: &mut Frame<'_>, area: Rect, state: &CheckInViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(9)].as_ref())
        .split(area);

    let intro = Paragraph::new(
        "Quick temperature check before exploring. Answers are echoed verbatim in the export.",
    )
    .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
    .block(themed_block("Check-in", COLOR_ACCENT))
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    state.editor.draw(frame, chunks[1]);
}
