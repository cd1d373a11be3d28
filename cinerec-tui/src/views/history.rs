//! Search history view.

use crate::state::App;
use crate::views::helpers::{local_timestamp, scrolled_list_state, section_block};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let theme = &app.theme;
    let entries = app.view.history();
    let block = section_block("Previous Recommendations", theme);

    if entries.is_empty() {
        let empty = Paragraph::new("No history yet.")
            .style(Style::default().fg(theme.text_dim))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let tags: Vec<Span> = entry
                .movie_titles()
                .flat_map(|title| {
                    [
                        Span::styled(format!(" {} ", title), Style::default().fg(theme.info)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled("Search: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("\"{}\"", entry.user_input),
                        Style::default().fg(theme.text),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        local_timestamp(entry.timestamp.as_ref()),
                        Style::default().fg(theme.text_muted),
                    ),
                ]),
                Line::from(tags),
                Line::from(""),
            ]))
        })
        .collect();

    let mut state = scrolled_list_state(entries.len(), app.scroll);
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(theme.primary))
        .highlight_symbol("▌");
    f.render_stateful_widget(list, area, &mut state);
}
