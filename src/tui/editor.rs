//! Multi-field text editor used by the check-in, VPS, and refinement
//! views. Modal: while active it captures every key; otherwise the view
//! only moves its focus.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::widgets::{themed_block, COLOR_ACCENT, COLOR_FOCUS};

pub struct EditorField {
    pub label: &'static str,
    pub value: String,
    pub multiline: bool,
}

impl EditorField {
    pub fn multiline(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            multiline: true,
        }
    }

    pub fn line(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            multiline: false,
        }
    }
}

pub struct FieldEditor {
    fields: Vec<EditorField>,
    focused: usize,
    active: bool,
}

impl FieldEditor {
    pub fn new(fields: Vec<EditorField>) -> Self {
        Self {
            fields,
            focused: 0,
            active: false,
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self) {
        self.active = true;
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Handle a key while active. Returns false when inactive so the
    /// caller falls through to its own bindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.active {
            return false;
        }
        match key.code {
            KeyCode::Esc => {
                self.active = false;
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter => {
                let field = &mut self.fields[self.focused];
                if field.multiline {
                    field.value.push('\n');
                } else {
                    self.focus_next();
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.fields[self.focused].value.pop();
            }
            KeyCode::Char(c) => {
                self.fields[self.focused].value.push(c);
            }
            _ => {}
        }
        true
    }

    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        if self.fields.is_empty() {
            return;
        }
        let share = 100 / self.fields.len() as u16;
        let constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|_| Constraint::Percentage(share))
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, field) in self.fields.iter().enumerate() {
            let focused = i == self.focused;
            let border = if focused { COLOR_FOCUS } else { COLOR_ACCENT };
            let mut text = field.value.clone();
            if focused && self.active {
                text.push('▌');
            }
            let paragraph = Paragraph::new(text)
                .block(themed_block(field.label, border))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, chunks[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editor() -> FieldEditor {
        FieldEditor::new(vec![
            EditorField::multiline("Vision", ""),
            EditorField::line("Title", "Coffee Chat"),
        ])
    }

    #[test]
    fn test_inactive_editor_consumes_nothing() {
        let mut ed = editor();
        assert!(!ed.handle_key(key(KeyCode::Char('x'))));
        assert_eq!(ed.value(0), "");
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut ed = editor();
        ed.begin();
        for c in "hope".chars() {
            assert!(ed.handle_key(key(KeyCode::Char(c))));
        }
        ed.handle_key(key(KeyCode::Backspace));
        assert_eq!(ed.value(0), "hop");
    }

    #[test]
    fn test_enter_is_newline_only_in_multiline_fields() {
        let mut ed = editor();
        ed.begin();
        ed.handle_key(key(KeyCode::Char('a')));
        ed.handle_key(key(KeyCode::Enter));
        assert_eq!(ed.value(0), "a\n");

        // Second field is single-line: Enter moves focus instead
        ed.handle_key(key(KeyCode::Tab));
        ed.handle_key(key(KeyCode::Enter));
        ed.handle_key(key(KeyCode::Char('!')));
        assert_eq!(ed.value(1), "Coffee Chat");
        assert_eq!(ed.value(0), "a\n!");
    }

    #[test]
    fn test_tab_cycles_focus_and_esc_deactivates() {
        let mut ed = editor();
        ed.begin();
        ed.handle_key(key(KeyCode::Tab));
        ed.handle_key(key(KeyCode::Char('!')));
        assert_eq!(ed.value(1), "Coffee Chat!");

        assert!(ed.handle_key(key(KeyCode::Esc)));
        assert!(!ed.is_active());
        assert!(!ed.handle_key(key(KeyCode::Char('x'))));
    }
}
