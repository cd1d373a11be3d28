//! View rendering dispatch.

pub mod helpers;
pub mod history;
pub mod recommendations;
pub mod search;
pub mod welcome;

use crate::state::App;
use crate::theme::backend_status_color;
use crate::views::helpers::wrapped_height;
use cinerec_core::RenderMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let area = f.size();
    let error_height = app
        .view
        .error()
        .map(|error| wrapped_height(error, area.width).min((area.height / 4).max(1)))
        .unwrap_or(0);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(f, app, layout[0]);
    search::render(f, app, layout[1]);
    if let Some(error) = app.view.error() {
        let line = Paragraph::new(error.to_string())
            .style(Style::default().fg(app.theme.error))
            .wrap(Wrap { trim: true });
        f.render_widget(line, layout[2]);
    }

    match app.view.render_mode() {
        RenderMode::History => history::render(f, app, layout[3]),
        RenderMode::Recommendations => recommendations::render(f, app, layout[3]),
        RenderMode::Welcome => welcome::render(f, app, layout[3]),
    }

    render_footer(f, app, layout[4]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let status = app.backend_status;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(Span::styled(
            "🎬 Movie Recommender",
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .title(
            Title::from(Span::styled(
                status.label(),
                Style::default().fg(backend_status_color(status, &app.theme)),
            ))
            .alignment(Alignment::Right),
        );
    let tagline = Paragraph::new("Describe what kind of movies you like, and get recommendations!")
        .style(Style::default().fg(app.theme.text_dim))
        .block(block);
    f.render_widget(tagline, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = "Enter search • Tab history • Esc cancel • ↑/↓ scroll • Ctrl-R reload history • Ctrl-C quit";
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(help, Style::default().fg(app.theme.text_dim))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .title(
                Title::from(Span::styled(
                    format!("Backend: {}", app.config.api_base_url),
                    Style::default().fg(app.theme.text_muted),
                ))
                .alignment(Alignment::Right),
            ),
    );
    f.render_widget(footer, area);
}
