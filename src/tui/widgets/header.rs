//! Top header bar: app name, tab bar, signed-in user.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Tab};
use crate::tui::style::Styles;

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(" yardlog ", Styles::header())];

    for (i, tab) in Tab::all().iter().enumerate() {
        let style = if *tab == state.current_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("{}:{}", (i + 1) % 10, tab.name()), style));
    }

    let user = if state.demo {
        " demo ".to_string()
    } else if state.authenticated {
        format!(" {} ", state.user_display)
    } else {
        " anonymous ".to_string()
    };
    let pad = area
        .width
        .saturating_sub(line_width(&spans) + user.chars().count() as u16);
    spans.push(Span::raw(" ".repeat(pad as usize)));
    spans.push(Span::styled(user, Styles::dim()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn line_width(spans: &[Span]) -> u16 {
    spans
        .iter()
        .map(|s| s.content.chars().count() as u16)
        .sum()
}
