//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeMode;
use crate::scoring::ImpactTier;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Weight slider colors
    pub slider_filled: Color,
    pub slider_empty: Color,
    pub slider_selected: Style,

    // Score display
    pub score_value: Style,
    pub metric_name: Color,

    // Impact tiers (traffic light pattern)
    pub impact_high: Color,
    pub impact_moderate: Color,
    pub impact_low: Color,

    // Table colors
    pub row_alt_bg: Color,
    pub index_color: Color,
    pub header_style: Style,
    pub row_selected: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub accent: Color,

    // Tab colors
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    /// Dark theme palette (neon cyan accents)
    pub fn dark() -> Self {
        Self {
            slider_filled: Color::Cyan,
            slider_empty: Color::DarkGray,
            slider_selected: Style::new().fg(Color::Black).bg(Color::Cyan).bold(),
            score_value: Style::new().fg(Color::Cyan).bold(),
            metric_name: Color::Gray,
            impact_high: Color::Green,
            impact_moderate: Color::Yellow,
            impact_low: Color::Red,
            row_alt_bg: Color::Indexed(235),
            index_color: Color::DarkGray,
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            accent: Color::Magenta,
            tab_active_style: Style::new().fg(Color::Cyan).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    /// Light theme palette (darker accents for pale backgrounds)
    pub fn light() -> Self {
        Self {
            slider_filled: Color::Blue,
            slider_empty: Color::Indexed(250),
            slider_selected: Style::new().fg(Color::White).bg(Color::Blue).bold(),
            score_value: Style::new().fg(Color::Blue).bold(),
            metric_name: Color::DarkGray,
            impact_high: Color::Indexed(28),
            impact_moderate: Color::Indexed(130),
            impact_low: Color::Indexed(124),
            row_alt_bg: Color::Indexed(254),
            index_color: Color::Indexed(244),
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::Indexed(242),
            title_color: Color::Blue,
            accent: Color::Magenta,
            tab_active_style: Style::new().fg(Color::Blue).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::Indexed(244)),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Indexed(28),
            flash_error: Color::Indexed(124),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    pub fn impact_color(&self, tier: ImpactTier) -> Color {
        match tier {
            ImpactTier::High => self.impact_high,
            ImpactTier::Moderate => self.impact_moderate,
            ImpactTier::Low => self.impact_low,
        }
    }
}

/// Pick a palette. `Auto` asks the terminal for its background luminance
/// and falls back to dark when the terminal doesn't answer.
pub fn resolve_theme(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}
