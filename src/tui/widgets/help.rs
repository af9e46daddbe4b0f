//! Help popup with the key bindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

use super::centered_rect;

pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup = centered_rect(area, 60, 80);
    frame.render_widget(Clear, popup);

    let block = Block::default().title(" Help ").borders(Borders::ALL);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let content = help_lines();
    let visible = chunks[0].height as usize;
    let max_scroll = content.len().saturating_sub(visible);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, chunks[0]);

    let footer = Line::from(vec![
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" close  ", Styles::help()),
        Span::styled("j/k", Styles::help_key()),
        Span::styled(" scroll", Styles::help()),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

fn entry(key: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Styles::help_key()),
        Span::styled(what, Styles::help()),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Tabs", Styles::section_header())),
        entry("Tab / S-Tab", "next / previous logbook"),
        entry("1-9, 0", "jump to a logbook"),
        Line::from(""),
        Line::from(Span::styled("Rows", Styles::section_header())),
        entry("j/k, ↓/↑", "move selection"),
        entry("g / G", "first / last row on the page"),
        entry("Enter", "row detail"),
        entry("x / Del", "delete the selected row"),
        Line::from(""),
        Line::from(Span::styled("Pages", Styles::section_header())),
        entry("h/l, ←/→", "previous / next page"),
        entry("p", "cycle page size (10/25/50/100)"),
        Line::from(""),
        Line::from(Span::styled("Sort and search", Styles::section_header())),
        entry("s", "sort by the next column"),
        entry("d", "cycle the sort direction (asc/desc/off)"),
        entry("/", "type a search, Enter applies, Esc keeps typing out"),
        entry("Esc", "clear the active search"),
        Line::from(""),
        Line::from(Span::styled("Misc", Styles::section_header())),
        entry("R / F5", "refetch the current page"),
        entry("?", "this help"),
        entry("q", "quit"),
    ]
}
