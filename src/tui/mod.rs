pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};
use std::time::Duration;

use crate::export::ExportKind;
use crate::session::Page;

/// Tick often enough that short stage delays still animate smoothly.
const TICK_RATE_MS: u64 = 100;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    if let Err(e) = crossterm::execute!(std::io::stdout(), EnableBracketedPaste) {
        crate::buffered_eprintln!("Bracketed paste unavailable: {}", e);
    }
    let mut events = EventHandler::new(Duration::from_millis(TICK_RATE_MS));

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Paste(text) => app.paste(&text),
            Event::Tick => app.tick(),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    let _ = crossterm::execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => handle_normal_key(app, key),
        app::InputMode::FileInput => match key.code {
            KeyCode::Enter => app.confirm_file_input(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Char(c) => app.input_buffer.push(c),
            _ => {}
        },
        app::InputMode::CustomModeInput => match key.code {
            KeyCode::Enter => app.confirm_custom_mode(),
            // Leaving the prompt empty still selects Custom
            KeyCode::Esc => app.confirm_custom_mode(),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Char(c) => app.input_buffer.push(c),
            _ => {}
        },
        app::InputMode::CommentEdit => match key.code {
            KeyCode::Esc => app.finish_comment_edit(),
            KeyCode::Enter => app.comment_draft.push('\n'),
            KeyCode::Backspace => {
                app.comment_draft.pop();
            }
            KeyCode::Char(c) => app.comment_draft.push(c),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }

        // Pages
        KeyCode::Tab => app.next_page(),
        KeyCode::Char('1') => app.set_page(Page::Upload),
        KeyCode::Char('2') => app.set_page(Page::Dataset),
        KeyCode::Char('3') => app.set_page(Page::Config),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

        // Left/right mean "judge" on the upload page and "weight" elsewhere
        KeyCode::Char('h') | KeyCode::Left => match app.session.page {
            Page::Upload => app.previous_judge(),
            Page::Config => app.adjust_selected(-app::WEIGHT_STEP),
            Page::Dataset => {}
        },
        KeyCode::Char('l') | KeyCode::Right => match app.session.page {
            Page::Upload => app.next_judge(),
            Page::Config => app.adjust_selected(app::WEIGHT_STEP),
            Page::Dataset => {}
        },

        // Upload and analysis
        KeyCode::Char('u') => app.start_file_input(),
        KeyCode::Enter if app.session.page == Page::Upload => app.launch_analysis(),

        // Weights and comments
        KeyCode::Char('r') => app.reset_weights(),
        KeyCode::Char('c') => {
            app.set_page(Page::Config);
            app.start_comment_edit();
        }
        KeyCode::Char('m') => app.cycle_comment_mode(),
        KeyCode::Char('S') => app.save_comments(),

        // Exports
        KeyCode::Char('s') => app.export(ExportKind::Config),
        KeyCode::Char('e') => app.export(ExportKind::Report),
        KeyCode::Char('f') => app.export(ExportKind::Full),
        KeyCode::Char('x') => app.export(ExportKind::Comments),
        KeyCode::Char('v') => app.export(ExportKind::DatasetCsv),
        KeyCode::Char('J') => app.export(ExportKind::DatasetJson),

        // Session
        KeyCode::Char('R') => app.reset_session(),
        KeyCode::Char('?') => app.show_help(),

        _ => {}
    }
}
