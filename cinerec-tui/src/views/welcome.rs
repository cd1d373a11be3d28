//! Empty-state view shown before the first search.

use crate::state::App;
use crate::views::helpers::section_block;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const EXAMPLE_QUERIES: [&str; 4] = [
    "action movies with female lead",
    "sci-fi thrillers",
    "emotional dramas",
    "animated films",
];

pub fn render(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Try searching for movies by genre or description!",
            Style::default().fg(app.theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled("Examples:", Style::default().fg(app.theme.text_dim))),
    ];
    lines.extend(EXAMPLE_QUERIES.iter().map(|query| {
        Line::from(Span::styled(
            format!("  • \"{}\"", query),
            Style::default().fg(app.theme.info),
        ))
    }));

    let welcome = Paragraph::new(lines)
        .block(section_block("Welcome", &app.theme))
        .wrap(Wrap { trim: false });
    f.render_widget(welcome, area);
}
