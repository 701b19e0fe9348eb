use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Gauge, Paragraph, Row, Table, Tabs, Wrap};

use crate::dataset::{DatasetStats, SAMPLE_QUERY, SAMPLE_RESPONSE};
use crate::output::truncate_text;
use crate::session::Page;
use crate::tui::app::{App, FlashKind, InputMode};
use crate::tui::theme::ThemeColors;

const TITLE: &str = "ADAMS";
const SUBTITLE: &str = "Adaptive Domain-Aware Metric Selection";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Tab bar
        Constraint::Fill(1),   // Page body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    match app.session.page {
        Page::Upload => render_upload_page(frame, chunks[2], app),
        Page::Dataset => render_dataset_page(frame, chunks[2], app),
        Page::Config => render_config_page(frame, chunks[2], app),
    }
    render_status_bar(frame, chunks[3], app);

    match app.input_mode {
        InputMode::FileInput => render_input_popup(
            frame,
            &app.theme,
            " Dataset File ",
            &app.input_buffer,
            "Enter: upload | Esc: cancel | csv, json, xlsx",
        ),
        InputMode::CustomModeInput => render_input_popup(
            frame,
            &app.theme,
            " Custom Mode Name ",
            &app.input_buffer,
            "Enter: confirm | Esc: cancel",
        ),
        InputMode::CommentEdit => render_comment_popup(frame, app),
        InputMode::Help => render_help_popup(frame, &app.theme),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let judge_text = format!("Judge: {}", app.session.judge);
    let left_len = TITLE.len() + 3 + SUBTITLE.len();
    let padding_len = (area.width as usize).saturating_sub(left_len + judge_text.len());

    let title = Line::from(vec![
        Span::styled(TITLE, Style::default().fg(theme.title_color).bold()),
        Span::styled(" - ", Style::default().fg(theme.muted)),
        Span::styled(SUBTITLE, Style::default().fg(theme.muted)),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(judge_text, Style::default().fg(theme.accent)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<String> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| format!("{} {}", i + 1, page.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.session.page.index())
        .style(app.theme.tab_inactive_style)
        .highlight_style(app.theme.tab_active_style)
        .divider(" | ");

    frame.render_widget(tabs, area);
}

// ---- Upload page ----

fn render_upload_page(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let chunks = Layout::vertical([
        Constraint::Length(5), // File + judge
        Constraint::Length(3), // Progress gauge
        Constraint::Fill(1),   // Metric grid
    ])
    .split(area);

    let file_line = match &app.session.upload {
        Some(upload) => Line::from(vec![
            Span::styled("File:      ", Style::default().fg(theme.muted)),
            Span::styled(upload.file_name(), Style::default().bold()),
        ]),
        None => Line::from(vec![
            Span::styled("File:      ", Style::default().fg(theme.muted)),
            Span::styled(
                "none (press u to choose a CSV, JSON or XLSX file)",
                Style::default().fg(theme.muted).italic(),
            ),
        ]),
    };
    let judge_line = Line::from(vec![
        Span::styled("LLM Judge: ", Style::default().fg(theme.muted)),
        Span::styled("< ", Style::default().fg(theme.status_key_color)),
        Span::styled(app.session.judge.label(), Style::default().fg(theme.accent).bold()),
        Span::styled(" >", Style::default().fg(theme.status_key_color)),
    ]);
    let action_line = if app.analysis.is_some() {
        Line::from(Span::styled("Analysis running...", Style::default().fg(theme.muted)))
    } else if app.session.processing_complete {
        Line::from(Span::styled(
            "Processing complete. Review results on the Dataset tab.",
            Style::default().fg(theme.flash_success),
        ))
    } else {
        Line::from(Span::styled(
            "Press Enter to launch the ADAMS analysis",
            Style::default().fg(theme.muted),
        ))
    };

    let block = Block::bordered().title(" Dataset Upload & Processing ");
    frame.render_widget(
        Paragraph::new(vec![file_line, judge_line, action_line]).block(block),
        chunks[0],
    );

    render_progress(frame, chunks[1], app);

    if app.session.processing_complete {
        render_metric_grid(frame, chunks[2], app);
    }
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let (ratio, label) = match &app.analysis {
        Some(run) => {
            let spinner_chars = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
            let spinner = spinner_chars[app.spinner_frame % spinner_chars.len()];
            let stage = run.current_stage().unwrap_or_default();
            (run.progress(), format!("{} {}", spinner, stage))
        }
        None if app.session.processing_complete => (1.0, "ADAMS processing complete".to_string()),
        None => (0.0, "Waiting for a dataset".to_string()),
    };

    let gauge = Gauge::default()
        .block(Block::bordered().title(" Progress "))
        .gauge_style(Style::default().fg(theme.slider_filled).bg(theme.slider_empty))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_metric_grid(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let entries: Vec<_> = app.session.metrics.iter().collect();

    let rows: Vec<Row> = entries
        .chunks(3)
        .map(|chunk| {
            let cells: Vec<Cell> = chunk
                .iter()
                .map(|entry| {
                    Cell::from(Text::from(vec![
                        Line::from(Span::styled(format!("{:.1}", entry.score()), theme.score_value)),
                        Line::from(Span::styled(
                            entry.name().to_uppercase(),
                            Style::default().fg(theme.metric_name),
                        )),
                    ]))
                })
                .collect();
            Row::new(cells).height(2).bottom_margin(1)
        })
        .collect();

    let widths = [Constraint::Fill(1), Constraint::Fill(1), Constraint::Fill(1)];
    let table = Table::new(rows, widths)
        .block(Block::bordered().title(" Metric Analysis Results "));
    frame.render_widget(table, area);
}

// ---- Dataset page ----

fn render_dataset_page(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(records) = app.session.dataset.as_ref().filter(|_| app.session.processing_complete)
    else {
        let msg = Paragraph::new(
            "No processed dataset available. Please upload and process a dataset first.",
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.flash_error))
        .block(Block::bordered().title(" Dataset Analysis "));
        frame.render_widget(msg, area);
        return;
    };

    let theme = &app.theme;
    let chunks = Layout::vertical([
        Constraint::Fill(1),   // Records
        Constraint::Length(6), // Selected record detail
        Constraint::Length(1), // Stats
    ])
    .split(area);

    let answer_width = (chunks[0].width as usize).saturating_sub(20) / 3;
    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme.row_alt_bg)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}.", idx + 1)).style(Style::default().fg(theme.index_color)),
                Cell::from(truncate_text(&record.question, answer_width.max(10))),
                Cell::from(truncate_text(&record.reference_answer, answer_width.max(10))),
                Cell::from(truncate_text(&record.model_answer, answer_width.max(10))),
                Cell::from(Span::styled(format!("{:.1}", record.adams_score), theme.score_value)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(6),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["#", "Question", "Reference Answer", "Model Answer", "ADAMS"])
                .style(theme.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(theme.row_selected)
        .block(Block::bordered().title(" Dataset Analysis "));

    let detail = app
        .dataset_state
        .selected()
        .and_then(|i| records.get(i))
        .map(|record| {
            vec![
                Line::from(vec![
                    Span::styled("Q: ", Style::default().fg(theme.muted)),
                    Span::raw(record.question.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Reference: ", Style::default().fg(theme.muted)),
                    Span::raw(record.reference_answer.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Model: ", Style::default().fg(theme.muted)),
                    Span::raw(record.model_answer.clone()),
                ]),
            ]
        })
        .unwrap_or_default();

    let stats_line = DatasetStats::compute(records)
        .map(|stats| {
            Line::from(vec![
                Span::styled("Total Samples: ", Style::default().fg(theme.muted)),
                Span::raw(stats.total.to_string()),
                Span::styled("  Average ADAMS Score: ", Style::default().fg(theme.muted)),
                Span::styled(format!("{:.2}", stats.average), theme.score_value),
                Span::styled("  Highest: ", Style::default().fg(theme.muted)),
                Span::raw(format!("{:.2}", stats.highest)),
                Span::styled("  Lowest: ", Style::default().fg(theme.muted)),
                Span::raw(format!("{:.2}", stats.lowest)),
            ])
        })
        .unwrap_or_default();

    let detail_widget = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" Selected Record "));

    frame.render_stateful_widget(table, chunks[0], &mut app.dataset_state);
    frame.render_widget(detail_widget, chunks[1]);
    frame.render_widget(Paragraph::new(stats_line), chunks[2]);
}

// ---- Configuration page ----

fn render_config_page(frame: &mut Frame, area: Rect, app: &mut App) {
    let columns = Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).split(area);
    let left = Layout::vertical([Constraint::Fill(1), Constraint::Length(6)]).split(columns[0]);
    let right = Layout::vertical([
        Constraint::Length(5), // Final score
        Constraint::Fill(1),   // Impact analysis
        Constraint::Fill(1),   // Sample Q&A
        Constraint::Length(4), // Current session
    ])
    .split(columns[1]);

    render_sliders(frame, left[0], app);
    render_comments(frame, left[1], app);
    render_score_panel(frame, right[0], app);
    render_impact_panel(frame, right[1], app);
    render_sample_panel(frame, right[2], &app.theme);
    render_session_panel(frame, right[3], app);
}

fn render_sliders(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let selected = app.metric_state.selected();
    let name_width = app
        .session
        .metrics
        .names()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let rows: Vec<Row> = app
        .session
        .metrics
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme.row_alt_bg)
            } else {
                Style::default()
            };
            let weight_style = if selected == Some(idx) {
                theme.slider_selected
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(entry.name().to_string()),
                Cell::from(slider_line(entry.weight(), 20, theme)),
                Cell::from(Span::styled(format!("{:.2}", entry.weight()), weight_style)),
                Cell::from(Span::styled(
                    format!("{:.1}", entry.score()),
                    Style::default().fg(theme.muted),
                )),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(name_width + 1),
        Constraint::Length(22),
        Constraint::Length(5),
        Constraint::Length(5),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Metric", "Weight", "", "Score"])
                .style(theme.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(theme.row_selected)
        .block(Block::bordered().title(" Metric Weights "));

    frame.render_stateful_widget(table, area, &mut app.metric_state);
}

fn slider_line(weight: f64, width: usize, theme: &ThemeColors) -> Line<'static> {
    let filled = (weight.clamp(0.0, 1.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(theme.slider_filled)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(theme.slider_empty)));
    }
    Line::from(spans)
}

fn render_score_panel(frame: &mut Frame, area: Rect, app: &App) {
    let aggregate = app.session.aggregate();
    let text = vec![
        Line::from(Span::styled(aggregate.display(), app.theme.score_value)),
        Line::from(Span::styled("out of 10", Style::default().fg(app.theme.muted))),
    ];
    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" Final ADAMS Score "));
    frame.render_widget(panel, area);
}

fn render_impact_panel(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let impact = app.session.impact();
    let tier_color = theme.impact_color(impact.tier);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Impact: ", Style::default().fg(theme.muted)),
            Span::styled(impact.tier.label(), Style::default().fg(tier_color).bold()),
            Span::styled(
                format!(" (avg top weight {:.2})", impact.average_weight),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::from(""),
    ];
    lines.push(Line::from(Span::styled(
        impact.summary(),
        Style::default().fg(tier_color),
    )));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" Impact Analysis "));
    frame.render_widget(panel, area);
}

fn render_sample_panel(frame: &mut Frame, area: Rect, theme: &ThemeColors) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Query: ", Style::default().fg(theme.muted).bold()),
            Span::raw(SAMPLE_QUERY),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("AI Response: ", Style::default().fg(theme.muted).bold()),
            Span::raw(SAMPLE_RESPONSE),
        ]),
    ];
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" Sample Analysis "));
    frame.render_widget(panel, area);
}

/// Mode and time of the last comment save.
fn render_session_panel(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let (mode, saved_at) = match &app.session.comments {
        Some(saved) => (saved.mode.as_str(), Some(saved.timestamp.as_str())),
        None => ("Not set", None),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("Mode: ", Style::default().fg(theme.muted)),
        Span::styled(mode.to_string(), Style::default().fg(theme.accent)),
    ])];
    if let Some(ts) = saved_at {
        lines.push(Line::from(vec![
            Span::styled("Last saved: ", Style::default().fg(theme.muted)),
            Span::raw(ts.to_string()),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Current Session ")),
        area,
    );
}

fn render_comments(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let title = Line::from(vec![
        Span::raw(" Reviewer Comments "),
        Span::styled(format!("[{}] ", app.comment_mode.label()), Style::default().fg(theme.accent)),
    ]);

    let body = if app.comment_draft.is_empty() {
        Paragraph::new(Span::styled(
            "Press c to add comments about this configuration",
            Style::default().fg(theme.muted).italic(),
        ))
    } else {
        Paragraph::new(app.comment_draft.as_str()).wrap(Wrap { trim: false })
    };
    frame.render_widget(body.block(Block::bordered().title(title)), area);
}

// ---- Status bar and overlays ----

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => theme.flash_success,
            FlashKind::Error => theme.flash_error,
            FlashKind::Info => theme.muted,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.session.page {
            Page::Upload => &[
                ("u", ":file "),
                ("←→", ":judge "),
                ("Enter", ":analyze "),
                ("Tab", ":next "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Page::Dataset => &[
                ("j/k", ":nav "),
                ("v", ":csv "),
                ("J", ":json "),
                ("f", ":full report "),
                ("Tab", ":next "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Page::Config => &[
                ("j/k", ":metric "),
                ("h/l", ":weight "),
                ("r", ":reset "),
                ("c", ":comment "),
                ("s", ":save "),
                ("e", ":report "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = vec![
            Span::styled(app.session.page.title(), Style::default().fg(theme.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

/// Single-line text prompt
fn render_input_popup(frame: &mut Frame, theme: &ThemeColors, title: &str, value: &str, help: &str) {
    let popup_area = centered_rect_fixed(56, 4, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(title.to_string(), theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
    frame.render_widget(Paragraph::new(format!("{}|", value)), chunks[0]);
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(theme.muted)),
        chunks[1],
    );
}

fn render_comment_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let popup_area = centered_rect_fixed(70, 12, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Reviewer Comments ", theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(inner);
    frame.render_widget(
        Paragraph::new(format!("{}|", app.comment_draft)).wrap(Wrap { trim: false }),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new("Enter: newline | Esc: done | S (normal mode): save")
            .style(Style::default().fg(theme.muted)),
        chunks[1],
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_help_popup(frame: &mut Frame, theme: &ThemeColors) {
    let popup_area = centered_rect_fixed(54, 24, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(theme.status_key_color).bold();
    let entries = [
        ("Tab / 1 2 3   ", "Switch page"),
        ("j / Down      ", "Next row or metric"),
        ("k / Up        ", "Previous row or metric"),
        ("u             ", "Choose dataset file"),
        ("Left / Right  ", "Change judge (Upload page)"),
        ("Enter         ", "Launch analysis (Upload page)"),
        ("h / l         ", "Lower / raise weight by 0.05"),
        ("r             ", "Reset weights to defaults"),
        ("c             ", "Edit reviewer comments"),
        ("m             ", "Cycle comment mode"),
        ("S             ", "Save comments"),
        ("s             ", "Save configuration (JSON)"),
        ("e             ", "Export text report"),
        ("f             ", "Export full report (JSON)"),
        ("x             ", "Export reviewer comments"),
        ("v / J         ", "Export dataset CSV / JSON"),
        ("R             ", "Reset session"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::judge::Judge;
    use crate::scoring::default_metrics;
    use crate::session::{CommentMode, Session};

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(60, 4, area);
        assert_eq!(rect, Rect::new(0, 3, 40, 4));
    }

    fn rendered_text(app: &mut App) -> String {
        let backend = ratatui::backend::TestBackend::new(140, 48);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_config_page_shows_sample_and_session() {
        let mut app = App::new(
            Session::new(default_metrics(), Judge::Qwen),
            Config::default(),
            ThemeColors::dark(),
        );
        app.set_page(Page::Config);

        let text = rendered_text(&mut app);
        assert!(text.contains("Sample Analysis"));
        assert!(text.contains("Current Session"));
        assert!(text.contains("Not set"));

        app.comment_mode = CommentMode::Review;
        app.save_comments();
        let text = rendered_text(&mut app);
        assert!(text.contains("Last saved:"));
    }

    #[test]
    fn test_slider_line_widths() {
        let theme = ThemeColors::dark();
        assert_eq!(slider_line(0.5, 20, &theme).width(), 20);
        assert_eq!(slider_line(0.0, 20, &theme).spans.len(), 1);
        assert_eq!(slider_line(1.0, 20, &theme).spans.len(), 1);
    }
}
