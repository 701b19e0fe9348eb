use crate::config::Config;
use crate::export::{render, write_export, ExportKind};
use crate::session::{accept_upload, AnalysisRun, CommentMode, Page, Session};
use crate::tui::theme::ThemeColors;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Slider granularity, matching a 0.05-step slider.
pub const WEIGHT_STEP: f64 = 0.05;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    FileInput,
    CommentEdit,
    CustomModeInput,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

pub struct App {
    pub session: Session,
    pub config: Config,
    pub theme: ThemeColors,
    pub export_dir: PathBuf,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub comment_draft: String,
    pub comment_mode: CommentMode,
    pub metric_state: ratatui::widgets::TableState,
    pub dataset_state: ratatui::widgets::TableState,
    pub analysis: Option<AnalysisRun>,
    pub stage_delay: Duration,
    pub last_stage_at: Instant,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, config: Config, theme: ThemeColors) -> Self {
        let mut metric_state = ratatui::widgets::TableState::default();
        if !session.metrics.is_empty() {
            metric_state.select(Some(0));
        }

        Self {
            export_dir: config.export_dir(),
            stage_delay: config.stage_delay(),
            session,
            config,
            theme,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            comment_draft: String::new(),
            comment_mode: CommentMode::default(),
            metric_state,
            dataset_state: ratatui::widgets::TableState::default(),
            analysis: None,
            last_stage_at: Instant::now(),
            flash_message: None,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, kind, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    /// Advance timers: flash expiry, spinner, and the analysis script.
    pub fn tick(&mut self) {
        self.update_flash();
        self.spinner_frame = self.spinner_frame.wrapping_add(1);

        if self.analysis.is_some() && self.last_stage_at.elapsed() >= self.stage_delay {
            self.step_analysis();
        }
    }

    // ---- Pages ----

    pub fn set_page(&mut self, page: Page) {
        self.session.page = page;
        if page == Page::Dataset && self.dataset_state.selected().is_none() {
            let has_rows = self.session.dataset.as_ref().is_some_and(|d| !d.is_empty());
            if has_rows {
                self.dataset_state.select(Some(0));
            }
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.session.page.next());
    }

    /// j / Down on the current page
    pub fn next_row(&mut self) {
        match self.session.page {
            Page::Config => {
                let len = self.session.metrics.len();
                step_selection(&mut self.metric_state, len, true);
            }
            Page::Dataset => {
                let len = self.session.dataset.as_ref().map_or(0, |d| d.len());
                step_selection(&mut self.dataset_state, len, true);
            }
            Page::Upload => {}
        }
    }

    /// k / Up on the current page
    pub fn previous_row(&mut self) {
        match self.session.page {
            Page::Config => {
                let len = self.session.metrics.len();
                step_selection(&mut self.metric_state, len, false);
            }
            Page::Dataset => {
                let len = self.session.dataset.as_ref().map_or(0, |d| d.len());
                step_selection(&mut self.dataset_state, len, false);
            }
            Page::Upload => {}
        }
    }

    // ---- Upload page ----

    pub fn start_file_input(&mut self) {
        if self.analysis.is_none() {
            self.input_mode = InputMode::FileInput;
            self.input_buffer.clear();
        }
    }

    pub fn confirm_file_input(&mut self) {
        let path = PathBuf::from(self.input_buffer.trim());
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.select_file(&path);
    }

    pub fn select_file(&mut self, path: &Path) {
        match accept_upload(path) {
            Ok(upload) => {
                let msg = format!(
                    "File uploaded: {} (LLM judge: {})",
                    upload.file_name(),
                    self.session.judge
                );
                self.session.upload = Some(upload);
                self.show_flash(msg, FlashKind::Success);
            }
            Err(e) => self.show_flash(format!("Error: {}", e), FlashKind::Error),
        }
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn next_judge(&mut self) {
        if self.analysis.is_none() {
            self.session.judge = self.session.judge.next();
        }
    }

    pub fn previous_judge(&mut self) {
        if self.analysis.is_none() {
            self.session.judge = self.session.judge.previous();
        }
    }

    /// Start the scripted analysis. Needs a selected file.
    pub fn launch_analysis(&mut self) {
        if self.analysis.is_some() {
            return;
        }
        if self.session.upload.is_none() {
            self.show_flash(
                "Select a CSV, JSON or XLSX file first (u)".to_string(),
                FlashKind::Error,
            );
            return;
        }
        crate::verbose_eprintln!("Launching analysis with judge {}", self.session.judge);
        self.analysis = Some(AnalysisRun::new(self.session.judge));
        self.step_analysis();
    }

    fn step_analysis(&mut self) {
        let Some(run) = self.analysis.as_mut() else {
            return;
        };
        if run.advance() {
            self.last_stage_at = Instant::now();
        } else {
            self.analysis = None;
            self.session.complete_processing();
            self.dataset_state.select(Some(0));
            self.show_flash("ADAMS processing complete".to_string(), FlashKind::Success);
        }
    }

    // ---- Configuration page ----

    pub fn selected_metric(&self) -> Option<String> {
        self.metric_state
            .selected()
            .and_then(|i| self.session.metrics.names().nth(i))
            .map(str::to_string)
    }

    /// Move the selected metric's weight by `delta`.
    pub fn adjust_selected(&mut self, delta: f64) {
        let Some(name) = self.selected_metric() else {
            return;
        };
        if let Err(e) = self.session.nudge_weight(&name, delta) {
            self.show_flash(format!("Error: {}", e), FlashKind::Error);
        }
    }

    pub fn reset_weights(&mut self) {
        self.session.reset_weights();
        self.show_flash("Weights reset to defaults".to_string(), FlashKind::Info);
    }

    /// Full session reset (everything but the judge).
    pub fn reset_session(&mut self) {
        self.session.reset();
        self.analysis = None;
        self.comment_draft.clear();
        self.comment_mode = CommentMode::default();
        self.dataset_state.select(None);
        self.metric_state
            .select((!self.session.metrics.is_empty()).then_some(0));
        self.show_flash("Session reset".to_string(), FlashKind::Info);
    }

    pub fn start_comment_edit(&mut self) {
        self.input_mode = InputMode::CommentEdit;
    }

    pub fn finish_comment_edit(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Draft -> Review -> Final -> Custom (prompts for a name) -> Draft
    pub fn cycle_comment_mode(&mut self) {
        self.comment_mode = self.comment_mode.next();
        if matches!(self.comment_mode, CommentMode::Custom(_)) {
            self.input_mode = InputMode::CustomModeInput;
            self.input_buffer.clear();
        }
    }

    pub fn confirm_custom_mode(&mut self) {
        self.comment_mode = CommentMode::Custom(self.input_buffer.trim().to_string());
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn save_comments(&mut self) {
        let mode = self.comment_mode.clone();
        self.session
            .save_comments(&self.comment_draft, &mode, Local::now().naive_local());
        self.show_flash(
            format!("Comments saved as '{}' mode", mode.label()),
            FlashKind::Success,
        );
    }

    // ---- Exports ----

    pub fn export(&mut self, kind: ExportKind) {
        let result = render(kind, &self.session, Local::now().naive_local())
            .and_then(|rendered| write_export(&self.export_dir, &rendered));

        match result {
            Ok(path) => {
                crate::verbose_eprintln!("Wrote {} to {}", kind.label(), path.display());
                self.show_flash(
                    format!("Saved {}: {}", kind.label(), path.display()),
                    FlashKind::Success,
                );
            }
            Err(e) => self.show_flash(format!("Export failed: {}", e), FlashKind::Error),
        }
    }

    /// Pasted text goes to whatever is being typed. On the Upload page with
    /// no prompt open it is taken as a file path (drag-and-drop into most terminals).
    pub fn paste(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n");
        match self.input_mode {
            InputMode::FileInput | InputMode::CustomModeInput => {
                let line = text.trim_end_matches('\n').replace('\n', " ");
                self.input_buffer.push_str(&line);
            }
            InputMode::CommentEdit => self.comment_draft.push_str(&text),
            InputMode::Normal if self.session.page == Page::Upload && self.analysis.is_none() => {
                // Dropped paths are often quoted
                let path = text.trim().trim_matches(|c| c == '\'' || c == '"');
                self.select_file(Path::new(path));
            }
            InputMode::Normal | InputMode::Help => {}
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

/// Wrap-around selection step over `len` rows.
fn step_selection(state: &mut ratatui::widgets::TableState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) if forward => {
            if i >= len - 1 {
                0
            } else {
                i + 1
            }
        }
        Some(i) => {
            if i == 0 {
                len - 1
            } else {
                i - 1
            }
        }
        None => 0,
    };
    state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::Judge;
    use crate::scoring::default_metrics;
    use std::env;
    use std::fs;

    fn app() -> App {
        let session = Session::new(default_metrics(), Judge::Qwen);
        let config = Config {
            stage_delay: Some("0ms".to_string()),
            ..Config::default()
        };
        App::new(session, config, ThemeColors::dark())
    }

    #[test]
    fn test_slider_adjusts_selected_metric() {
        let mut app = app();
        app.set_page(Page::Config);
        app.next_row(); // Coherence
        app.adjust_selected(WEIGHT_STEP);
        assert_eq!(app.session.metrics.get("Coherence").unwrap().weight(), 0.85);
        app.adjust_selected(-WEIGHT_STEP);
        app.adjust_selected(-WEIGHT_STEP);
        assert_eq!(app.session.metrics.get("Coherence").unwrap().weight(), 0.75);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        app.set_page(Page::Config);
        app.previous_row();
        assert_eq!(app.selected_metric().as_deref(), Some("Bias Detection"));
        app.next_row();
        assert_eq!(app.selected_metric().as_deref(), Some("Factual Accuracy"));
    }

    #[test]
    fn test_launch_requires_file() {
        let mut app = app();
        app.launch_analysis();
        assert!(app.analysis.is_none());
        assert!(matches!(app.flash_message, Some((_, FlashKind::Error, _))));
    }

    #[test]
    fn test_analysis_completes_on_ticks() {
        let path = env::temp_dir().join("adams_test_tui_upload.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();

        let mut app = app();
        app.select_file(&path);
        assert!(app.session.upload.is_some());

        app.launch_analysis();
        assert_eq!(app.analysis.as_ref().map(|r| r.progress()), Some(1.0 / 6.0));

        // Judge is locked while running
        app.next_judge();
        assert_eq!(app.session.judge, Judge::Qwen);

        for _ in 0..10 {
            app.tick();
        }
        assert!(app.analysis.is_none());
        assert!(app.session.processing_complete);
        assert_eq!(app.session.dataset.as_ref().map(|d| d.len()), Some(3));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_paste_routes_by_mode() {
        let path = env::temp_dir().join("adams_test_tui_paste.json");
        fs::write(&path, "[]").unwrap();

        let mut app = app();
        app.paste(&format!("'{}'\n", path.display()));
        assert_eq!(
            app.session.upload.as_ref().map(|u| u.extension.as_str()),
            Some("json")
        );

        app.start_comment_edit();
        app.paste("line one\r\nline two");
        assert_eq!(app.comment_draft, "line one\nline two");

        app.finish_comment_edit();
        app.start_file_input();
        app.paste("a.csv\n");
        assert_eq!(app.input_buffer, "a.csv");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_custom_mode_prompt() {
        let mut app = app();
        for _ in 0..3 {
            app.cycle_comment_mode();
        }
        assert_eq!(app.input_mode, InputMode::CustomModeInput);
        app.input_buffer = "Audit".to_string();
        app.confirm_custom_mode();
        assert_eq!(app.comment_mode.label(), "Audit");

        app.comment_draft = "Weights look fine".to_string();
        app.save_comments();
        let saved = app.session.comments.as_ref().unwrap();
        assert_eq!(saved.mode, "Audit");
        assert_eq!(saved.main_comment, "Weights look fine");
    }

    #[test]
    fn test_reset_session_clears_comments() {
        let mut app = app();
        app.comment_draft = "draft".to_string();
        app.save_comments();
        app.session.complete_processing();
        app.reset_session();
        assert!(app.session.comments.is_none());
        assert!(app.comment_draft.is_empty());
        assert!(!app.session.processing_complete);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = env::temp_dir().join("adams_test_tui_exports");
        let _ = fs::remove_dir_all(&dir);

        let mut app = app();
        app.export_dir = dir.clone();
        app.export(ExportKind::Report);
        assert!(matches!(app.flash_message, Some((_, FlashKind::Success, _))));
        let written = fs::read_dir(&dir).unwrap().count();
        assert_eq!(written, 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_dataset_export_before_processing_fails() {
        let mut app = app();
        app.export_dir = env::temp_dir().join("adams_test_tui_exports_unprocessed");
        app.export(ExportKind::DatasetCsv);
        assert!(matches!(app.flash_message, Some((_, FlashKind::Error, _))));
    }
}
