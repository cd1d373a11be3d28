//! Recommendation cards.

use crate::state::App;
use crate::theme::genre_color;
use crate::views::helpers::{scrolled_list_state, section_block};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let theme = &app.theme;
    let movies = app.view.recommendations();

    let items: Vec<ListItem> = movies
        .iter()
        .map(|movie| {
            let text = Text::from(vec![
                Line::from(vec![
                    Span::styled(
                        movie.heading(),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", movie.genre),
                        Style::default().fg(genre_color(&movie.genre, theme)),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", movie.description),
                    Style::default().fg(theme.text_dim),
                )),
                Line::from(""),
            ]);
            ListItem::new(text)
        })
        .collect();

    let mut state = scrolled_list_state(movies.len(), app.scroll);
    let list = List::new(items)
        .block(section_block("Recommended Movies", theme))
        .highlight_style(Style::default().fg(theme.primary))
        .highlight_symbol("▌");
    f.render_stateful_widget(list, area, &mut state);
}
