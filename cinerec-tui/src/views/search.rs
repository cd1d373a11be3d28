//! Search input and action buttons.

use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const PLACEHOLDER: &str = "E.g., 'action movies', 'sci-fi', 'drama'";

pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Searching..."
    } else {
        "Get Recommendations"
    }
}

pub fn history_toggle_label(show_history: bool) -> &'static str {
    if show_history {
        "Hide History"
    } else {
        "Show History"
    }
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(25),
            Constraint::Length(18),
        ])
        .split(area);

    let loading = app.view.loading();
    let theme = &app.theme;
    let border = if loading { theme.border } else { theme.border_focus };

    let input = if app.view.input().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.text_muted)))
    } else {
        let fg = if loading { theme.text_dim } else { theme.text };
        let mut spans = vec![Span::styled(app.view.input().to_string(), Style::default().fg(fg))];
        if !loading {
            spans.push(Span::styled("▏", Style::default().fg(theme.primary)));
        }
        Line::from(spans)
    };
    let input = Paragraph::new(input).block(
        Block::default()
            .title("Your movie preference")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(input, chunks[0]);

    let submit_style = if loading {
        Style::default().fg(theme.text_dim)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let submit = Paragraph::new(Span::styled(submit_label(loading), submit_style))
        .block(Block::default().title("Enter").borders(Borders::ALL));
    f.render_widget(submit, chunks[1]);

    let toggle = Paragraph::new(Span::styled(
        history_toggle_label(app.view.show_history()),
        Style::default().fg(theme.info),
    ))
    .block(Block::default().title("Tab").borders(Borders::ALL));
    f.render_widget(toggle, chunks[2]);
}
