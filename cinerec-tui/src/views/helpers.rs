//! Common view rendering helpers.

use crate::theme::MarqueeTheme;
use cinerec_core::Timestamp;
use ratatui::{
    style::Style,
    widgets::{Block, Borders, ListState},
};

/// List state that keeps row `scroll` selected, clamped to the list.
pub fn scrolled_list_state(len: usize, scroll: u16) -> ListState {
    let mut state = ListState::default();
    if len > 0 {
        state.select(Some(usize::from(scroll).min(len - 1)));
    }
    state
}

/// Timestamp in the viewer's local time zone, or `-` when unknown.
pub fn local_timestamp(ts: Option<&Timestamp>) -> String {
    match ts {
        Some(ts) => ts
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}

/// Rows `text` takes when word-wrapped to `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Words wider than the line are broken across rows.
        rows += (len - 1) / width;
        used = match len % width {
            0 => width,
            rest => rest,
        };
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn section_block<'a>(title: &'a str, theme: &MarqueeTheme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.primary))
}
