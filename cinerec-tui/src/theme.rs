//! Marquee theme and color utilities.

use crate::state::BackendStatus;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct MarqueeTheme {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl MarqueeTheme {
    pub fn marquee() -> Self {
        Self {
            primary: Color::Rgb(255, 196, 0),
            secondary: Color::Rgb(229, 57, 53),
            tertiary: Color::Rgb(126, 87, 194),
            success: Color::Rgb(102, 187, 106),
            warning: Color::Rgb(255, 167, 38),
            error: Color::Rgb(239, 83, 80),
            info: Color::Rgb(79, 195, 247),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(160, 160, 160),
            text_muted: Color::Rgb(90, 90, 90),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(255, 196, 0),
        }
    }
}

pub fn genre_color(genre: &str, theme: &MarqueeTheme) -> Color {
    match genre.trim().to_ascii_lowercase().as_str() {
        "action" => theme.secondary,
        "sci-fi" | "fantasy" => theme.info,
        "thriller" | "horror" => theme.tertiary,
        "drama" | "musical" => theme.primary,
        "crime" => theme.warning,
        "animation" | "comedy" => theme.success,
        _ => theme.text_dim,
    }
}

pub fn backend_status_color(status: BackendStatus, theme: &MarqueeTheme) -> Color {
    match status {
        BackendStatus::Checking => theme.text_dim,
        BackendStatus::Online => theme.success,
        BackendStatus::WakingUp => theme.warning,
    }
}
