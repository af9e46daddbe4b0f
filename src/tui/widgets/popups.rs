//! Overlay popups: row detail, delete confirmation, quit confirmation.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

/// Centers a popup of the given percentage size, with hard clamps so it
/// stays usable on tiny terminals.
pub fn centered_rect(area: Rect, pct_x: u16, pct_y: u16) -> Rect {
    // Widened arithmetic; width * pct overflows u16 on wide terminals.
    let width = (u32::from(area.width) * u32::from(pct_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(pct_y) / 100) as u16;
    let width = width.clamp(30, 90).min(area.width);
    let height = height.clamp(7, 30).min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x + x, area.y + y, width, height)
}

/// Scrollable field listing for the selected row.
pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[(String, String)],
    scroll: &mut usize,
) {
    let popup = centered_rect(area, 70, 80);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Fields
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let label_width = lines
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    let visible = chunks[0].height as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let content: Vec<Line> = lines
        .iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>width$}  ", name, width = label_width),
                    Styles::section_header(),
                ),
                Span::raw(value.clone()),
            ])
        })
        .collect();
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

pub fn render_confirm_delete(frame: &mut Frame, area: Rect, label: &str) {
    let popup = centered_rect(area, 50, 25);
    frame.render_widget(Clear, popup);

    let block = Block::default().title(" Delete ").borders(Borders::ALL);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(format!("Delete \"{}\"?", label)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Styles::help_key()),
            Span::styled(" delete   ", Styles::help()),
            Span::styled("any other key", Styles::help_key()),
            Span::styled(" cancel", Styles::help()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 40, 20);
    frame.render_widget(Clear, popup);

    let block = Block::default().title(" Quit ").borders(Borders::ALL);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from("Quit yardlog?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Styles::help_key()),
            Span::styled(" quit   ", Styles::help()),
            Span::styled("any other key", Styles::help_key()),
            Span::styled(" stay", Styles::help()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clamps_on_small_and_wide_terminals() {
        let tiny = centered_rect(Rect::new(0, 0, 20, 5), 70, 80);
        assert_eq!(tiny.width, 20);
        assert_eq!(tiny.height, 5);

        // 800 * 90 does not fit in u16.
        let wide = centered_rect(Rect::new(0, 0, 800, 80), 90, 80);
        assert_eq!(wide.width, 90);
        assert_eq!(wide.height, 30);
        assert_eq!(wide.x, (800 - 90) / 2);
    }
}
