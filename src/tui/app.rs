//! Main walkthrough application state and event loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal};

use crate::catalog::{filter, Catalog};
use crate::config::ExportConfig;
use crate::export::sink::{open_print_view, save_document, save_session};
use crate::export::{render, text};
use crate::session::Session;
use crate::wizard::{Step, TOTAL_STEPS};

use super::views::{
    draw_checkin_view, draw_explorer_view, draw_export_view, draw_intros_view, draw_refine_view,
    CheckInViewState, ExplorerViewState, ExportViewState, IntrosViewState, RefineViewState,
};
use super::widgets::{
    draw_command_palette, draw_status_bar, draw_step_header, StatusTone, COLOR_BG,
};

const PAGE_JUMP: usize = 10;

/// Main application state
pub struct App {
    catalog: Catalog,
    export_cfg: ExportConfig,

    /// The session snapshot the renderer consumes
    session: Session,

    /// Which wizard step is active
    step: Step,

    /// Per-step view states
    checkin: CheckInViewState,
    intros: IntrosViewState,
    explorer: ExplorerViewState,
    refine: RefineViewState,
    export_view: ExportViewState,

    /// Status message and tone
    status_message: String,
    status_tone: StatusTone,

    /// Command mode state
    command_mode: bool,
    command_buffer: String,

    should_quit: bool,
}

impl App {
    fn new(catalog: Catalog, export_cfg: ExportConfig) -> Self {
        let session = Session::default();
        Self {
            checkin: CheckInViewState::new(&session.check_in),
            intros: IntrosViewState::new(),
            explorer: ExplorerViewState::new(),
            refine: RefineViewState::new(),
            export_view: ExportViewState::new(&session.vps),
            catalog,
            export_cfg,
            session,
            step: Step::default(),
            status_message: "n/b to move between steps, ':' for commands, 'q' to quit".to_string(),
            status_tone: StatusTone::Info,
            command_mode: false,
            command_buffer: String::new(),
            should_quit: false,
        }
    }

    fn set_status<S: Into<String>>(&mut self, message: S, tone: StatusTone) {
        self.status_message = message.into();
        self.status_tone = tone;
    }

    /// Pull free-text edits back into the session snapshot.
    fn sync_session(&mut self) {
        self.session.check_in = self.checkin.to_check_in();
        self.session.vps = self.export_view.to_vps();
    }

    fn next_step(&mut self) {
        let next = self.step.next();
        if next == self.step {
            self.set_status("Already at the last step", StatusTone::Info);
        } else {
            self.step = next;
            self.set_status(format!("Step {}: {}", next.number(), next.label()), StatusTone::Info);
        }
    }

    fn prev_step(&mut self) {
        let prev = self.step.prev();
        if prev == self.step {
            self.set_status("Already at the first step", StatusTone::Info);
        } else {
            self.step = prev;
            self.set_status(format!("Step {}: {}", prev.number(), prev.label()), StatusTone::Info);
        }
    }

    fn enter_command_mode(&mut self) {
        self.command_mode = true;
        self.command_buffer.clear();
        self.set_status(":", StatusTone::Info);
    }

    fn write_document(&mut self, path_override: Option<&str>) {
        let doc = render(&self.session, &self.export_cfg.title);
        let path = path_override
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| self.export_cfg.filename.clone());
        match save_document(&doc, &path) {
            Ok(()) => self.set_status(format!("Wrote {}", path.display()), StatusTone::Success),
            Err(e) => self.set_status(format!("Export failed: {}", e), StatusTone::Error),
        }
    }

    fn open_print(&mut self) {
        let doc = render(&self.session, &self.export_cfg.title);
        if open_print_view(&doc) {
            self.set_status("Opened print view", StatusTone::Success);
        } else {
            self.set_status("Print view could not be opened", StatusTone::Warning);
        }
    }

    fn save_session(&mut self, path: &str) {
        match save_session(&self.session, std::path::Path::new(path)) {
            Ok(()) => self.set_status(format!("Saved session to {}", path), StatusTone::Success),
            Err(e) => self.set_status(format!("Save failed: {}", e), StatusTone::Error),
        }
    }

    fn execute_command(&mut self, command: &str) {
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("next"), _) | (Some("n"), _) => self.next_step(),
            (Some("back"), _) | (Some("b"), _) => self.prev_step(),
            (Some("reset"), _) => {
                self.session.plan.reset();
                self.set_status("Plan cleared", StatusTone::Success);
            }
            (Some("save"), Some(path)) => self.save_session(path),
            (Some("save"), None) => {
                self.set_status("Usage: save <path>", StatusTone::Warning);
            }
            (Some("export"), path) => {
                let path = path.map(str::to_string);
                self.write_document(path.as_deref());
            }
            (Some("print"), _) => self.open_print(),
            (Some("quit"), _) | (Some("q"), _) => self.should_quit = true,
            _ => {
                self.set_status(format!("Unknown command: {}", command), StatusTone::Error);
            }
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) -> bool {
        if !self.command_mode {
            return false;
        }
        match key.code {
            KeyCode::Esc => {
                self.command_mode = false;
                self.command_buffer.clear();
                self.set_status("Command canceled", StatusTone::Info);
            }
            KeyCode::Enter => {
                let command = self.command_buffer.trim().to_string();
                self.command_mode = false;
                self.command_buffer.clear();
                if command.is_empty() {
                    self.set_status("Empty command", StatusTone::Info);
                } else {
                    self.execute_command(&command);
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        true
    }

    /// Give the active step's text editor first claim on the key.
    fn editor_consumed(&mut self, key: KeyEvent) -> bool {
        match self.step {
            Step::CheckIn => self.checkin.editor.handle_key(key),
            Step::Export => self.export_view.editor.handle_key(key),
            Step::Introductions => false,
            Step::Explorer => {
                let catalog = &self.catalog;
                self.explorer
                    .handle_query_key(key, |spec| filter(&catalog.items, spec).len())
            }
            Step::Refine => {
                let Some(entry_editor) = &mut self.refine.editor else {
                    return false;
                };
                entry_editor.editor.handle_key(key);
                if !entry_editor.editor.is_active() {
                    let patch = entry_editor.patch();
                    let (cadence, index) = (entry_editor.cadence, entry_editor.index);
                    self.refine.editor = None;
                    self.session.plan.update(cadence, index, patch);
                    self.set_status("Entry updated", StatusTone::Success);
                }
                true
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_command_key(key) {
            return;
        }
        if self.editor_consumed(key) {
            self.sync_session();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(':') => self.enter_command_mode(),
            KeyCode::Char('n') | KeyCode::Right => self.next_step(),
            KeyCode::Char('b') | KeyCode::Left => self.prev_step(),
            _ => self.handle_step_key(key),
        }
        self.sync_session();
    }

    fn handle_step_key(&mut self, key: KeyEvent) {
        match self.step {
            Step::CheckIn => match key.code {
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                    self.checkin.editor.focus_next()
                }
                KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                    self.checkin.editor.focus_prev()
                }
                KeyCode::Enter | KeyCode::Char('i') => self.checkin.editor.begin(),
                _ => {}
            },
            Step::Introductions => {
                let len = self.catalog.contributors.len();
                match key.code {
                    KeyCode::Down | KeyCode::Char('j') => self.intros.move_selection(1, len),
                    KeyCode::Up | KeyCode::Char('k') => self.intros.move_selection(-1, len),
                    KeyCode::Enter => self.intros.toggle_expanded(),
                    KeyCode::Char('J') | KeyCode::PageDown => self.intros.scroll_detail(1),
                    KeyCode::Char('K') | KeyCode::PageUp => self.intros.scroll_detail(-1),
                    _ => {}
                }
            }
            Step::Explorer => {
                let len = self.explorer.filtered(&self.catalog).len();
                match key.code {
                    KeyCode::Char('/') => self.explorer.editing_query = true,
                    KeyCode::Char('c') => {
                        let catalog = &self.catalog;
                        self.explorer
                            .cycle_cadence(|spec| filter(&catalog.items, spec).len());
                    }
                    KeyCode::Char('e') => {
                        let catalog = &self.catalog;
                        self.explorer
                            .cycle_kind(|spec| filter(&catalog.items, spec).len());
                    }
                    KeyCode::Down | KeyCode::Char('j') => self.explorer.move_selection(1, len),
                    KeyCode::Up | KeyCode::Char('k') => self.explorer.move_selection(-1, len),
                    KeyCode::PageDown => self.explorer.move_selection(PAGE_JUMP as isize, len),
                    KeyCode::PageUp => self.explorer.move_selection(-(PAGE_JUMP as isize), len),
                    KeyCode::Char('J') => self.explorer.scroll_detail(1),
                    KeyCode::Char('K') => self.explorer.scroll_detail(-1),
                    KeyCode::Char('a') | KeyCode::Enter => {
                        if let Some(item) = self.explorer.selected(&self.catalog) {
                            let message =
                                format!("Added \"{}\" to {}", item.title, item.cadence);
                            self.session.plan.add(item);
                            self.set_status(message, StatusTone::Success);
                        } else {
                            self.set_status("Nothing selected to add", StatusTone::Warning);
                        }
                    }
                    _ => {}
                }
            }
            Step::Refine => {
                let len = RefineViewState::rows(&self.session.plan).len();
                match key.code {
                    KeyCode::Down | KeyCode::Char('j') => self.refine.move_selection(1, len),
                    KeyCode::Up | KeyCode::Char('k') => self.refine.move_selection(-1, len),
                    KeyCode::Enter | KeyCode::Char('i') => {
                        self.refine.open_editor(&self.session.plan)
                    }
                    KeyCode::Char('d') => {
                        if let Some((cadence, index)) =
                            self.refine.selected_row(&self.session.plan)
                        {
                            let title =
                                self.session.plan.bucket(cadence)[index].title.clone();
                            self.session.plan.remove(cadence, index);
                            self.set_status(format!("Removed \"{}\"", title), StatusTone::Success);
                        } else {
                            self.set_status("Nothing selected to remove", StatusTone::Warning);
                        }
                    }
                    KeyCode::Char('R') => {
                        self.session.plan.reset();
                        self.set_status("Plan cleared", StatusTone::Success);
                    }
                    _ => {}
                }
            }
            Step::Export => match key.code {
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                    self.export_view.editor.focus_next()
                }
                KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                    self.export_view.editor.focus_prev()
                }
                KeyCode::Enter | KeyCode::Char('i') => self.export_view.editor.begin(),
                KeyCode::Char('J') | KeyCode::PageDown => self.export_view.scroll_preview(1),
                KeyCode::Char('K') | KeyCode::PageUp => self.export_view.scroll_preview(-1),
                KeyCode::Char('w') => self.write_document(None),
                KeyCode::Char('o') => self.open_print(),
                _ => {}
            },
        }
    }

    fn state_line(&self) -> String {
        match self.step {
            Step::CheckIn | Step::Introductions | Step::Export => format!(
                "Step {}/{} · {} · plan items: {}",
                self.step.number(),
                TOTAL_STEPS,
                self.step.label(),
                self.session.plan.len()
            ),
            Step::Explorer => {
                let showing = self.explorer.filtered(&self.catalog).len();
                format!(
                    "Step {}/{} · Showing {}/{} · cadence={} kind={}",
                    self.step.number(),
                    TOTAL_STEPS,
                    showing,
                    self.catalog.items.len(),
                    self.explorer
                        .spec
                        .cadence
                        .map_or("all".to_string(), |c| c.to_string()),
                    self.explorer
                        .spec
                        .kind
                        .map_or("all".to_string(), |k| k.to_string()),
                )
            }
            Step::Refine => format!(
                "Step {}/{} · {} entries in plan",
                self.step.number(),
                TOTAL_STEPS,
                self.session.plan.len()
            ),
        }
    }

    fn help_line(&self) -> &'static str {
        match self.step {
            Step::CheckIn => "Keys: j/k field · i edit (Esc done) · n next · : cmd · q quit",
            Step::Introductions => "Keys: j/k select · Enter expand · J/K scroll · n/b steps · q quit",
            Step::Explorer => {
                "Keys: / search · c cadence · e kind · j/k nav · a add · n/b steps · q quit"
            }
            Step::Refine => "Keys: j/k nav · Enter edit · d remove · R reset · n/b steps · q quit",
            Step::Export => "Keys: i edit notes · w write file · o print · J/K scroll · q finish",
        }
    }
}

/// Run the wizard over the given catalog.
pub fn run_wizard(catalog: Catalog, export_cfg: ExportConfig) -> Result<()> {
    let mut app = App::new(catalog, export_cfg);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    cleanup_terminal(terminal)?;
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn draw_ui(frame: &mut Frame<'_>, app: &mut App) {
    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_BG)),
        frame.size(),
    );

    // Layout: header + main content + status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(5),
            ]
            .as_ref(),
        )
        .split(frame.size());

    draw_step_header(frame, chunks[0], app.step);

    match app.step {
        Step::CheckIn => draw_checkin_view(frame, chunks[1], &app.checkin),
        Step::Introductions => {
            draw_intros_view(frame, chunks[1], &mut app.intros, &app.catalog.contributors)
        }
        Step::Explorer => draw_explorer_view(
            frame,
            chunks[1],
            &mut app.explorer,
            &app.catalog,
            &app.session.plan,
        ),
        Step::Refine => draw_refine_view(frame, chunks[1], &mut app.refine, &app.session.plan),
        Step::Export => {
            let preview = text::to_text(&render(&app.session, &app.export_cfg.title));
            draw_export_view(frame, chunks[1], &app.export_view, &preview);
        }
    }

    draw_status_bar(
        frame,
        chunks[2],
        &app.status_message,
        app.status_tone,
        &app.state_line(),
        app.help_line(),
    );

    if app.command_mode {
        draw_command_palette(frame, frame.size(), &app.command_buffer);
    }
}

fn cleanup_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Catalog::builtin().unwrap(), ExportConfig::default())
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('b')));
        assert_eq!(app.step, Step::CheckIn);

        for _ in 0..8 {
            app.handle_key(key(KeyCode::Char('n')));
        }
        assert_eq!(app.step, Step::Export);
    }

    #[test]
    fn test_add_from_explorer_grows_plan_and_marks_added() {
        let mut app = app();
        app.step = Step::Explorer;

        let first_id = app.catalog.items[0].id.clone();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.session.plan.len(), 1);
        assert!(app.session.plan.is_added(&first_id));

        // A second add appends an independent copy
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.session.plan.len(), 2);
    }

    #[test]
    fn test_remove_from_refine_uses_fresh_positions() {
        let mut app = app();
        app.step = Step::Explorer;
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('a')));

        app.step = Step::Refine;
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.session.plan.len(), 1);
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.session.plan.is_empty());
        // Further removes with nothing selected are harmless
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.session.plan.is_empty());
    }

    #[test]
    fn test_checkin_typing_lands_in_session() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('i')));
        for c in "hope".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.session.check_in.enthusiasm, "hope");

        // After leaving insert mode, 'n' navigates again
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.step, Step::Introductions);
        assert_eq!(app.session.check_in.enthusiasm, "hope");
    }

    #[test]
    fn test_explorer_query_narrows_table() {
        let mut app = app();
        app.step = Step::Explorer;
        let total = app.catalog.items.len();

        app.handle_key(key(KeyCode::Char('/')));
        for c in "coffee".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        let showing = app.explorer.filtered(&app.catalog).len();
        assert!(showing > 0);
        assert!(showing < total);
    }

    #[test]
    fn test_reset_command_clears_plan() {
        let mut app = app();
        app.step = Step::Explorer;
        app.handle_key(key(KeyCode::Char('a')));
        assert!(!app.session.plan.is_empty());

        app.handle_key(key(KeyCode::Char(':')));
        for c in "reset".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(app.session.plan.is_empty());
    }

    #[test]
    fn test_refine_editor_updates_entry() {
        let mut app = app();
        app.step = Step::Explorer;
        app.handle_key(key(KeyCode::Char('a')));

        app.step = Step::Refine;
        app.handle_key(key(KeyCode::Enter));
        assert!(app.refine.editor.is_some());
        // Append to the title, then commit with Esc
        app.handle_key(key(KeyCode::Char('!')));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.refine.editor.is_none());

        let (cadence, _) = app
            .session
            .plan
            .entries()
            .next()
            .map(|(c, e)| (c, e.clone()))
            .unwrap();
        assert!(app.session.plan.bucket(cadence)[0].title.ends_with('!'));
    }
}
