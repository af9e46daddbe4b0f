//! Generic paged table over a grid page.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::tui::state::PageState;
use crate::tui::style::Styles;

const MIN_COL_WIDTH: u16 = 5;
const MAX_COL_WIDTH: u16 = 28;

/// Renders one logbook page: bordered table plus a pagination footer.
///
/// Works for any row type through the page's column descriptors, so every
/// tab shares this one widget.
pub fn render_page<T>(frame: &mut Frame, area: Rect, title: &str, page: &mut PageState<T>) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Table
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    if page.loading {
        frame.render_widget(Paragraph::new("loading...").style(Styles::dim()), chunks[0]);
        render_footer(frame, chunks[1], page);
        return;
    }
    if let Some(err) = &page.last_error {
        frame.render_widget(
            Paragraph::new(format!("fetch failed: {}", err)).style(Styles::error()),
            chunks[0],
        );
        render_footer(frame, chunks[1], page);
        return;
    }

    let grid = &page.grid;
    let rows_data = grid.visible_rows();
    if rows_data.is_empty() {
        let msg = if grid.filter().is_empty() {
            "no rows"
        } else {
            "no rows match the current search"
        };
        frame.render_widget(Paragraph::new(msg).style(Styles::dim()), chunks[0]);
        render_footer(frame, chunks[1], page);
        return;
    }

    // Render every cell up front so widths can be derived from content.
    let rendered: Vec<Vec<String>> = rows_data
        .iter()
        .map(|row| grid.columns().iter().map(|c| (c.cell)(row)).collect())
        .collect();

    let header_cells: Vec<Cell> = grid
        .columns()
        .iter()
        .map(|c| {
            let glyph = grid.sort_glyph(c.id).as_str();
            let text = if glyph.is_empty() {
                c.header.to_string()
            } else {
                format!("{} {}", c.header, glyph)
            };
            Cell::from(text)
        })
        .collect();
    let header = Row::new(header_cells).style(Styles::table_header());

    let widths: Vec<Constraint> = grid
        .columns()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let content_max = rendered
                .iter()
                .map(|cells| cells[i].chars().count())
                .max()
                .unwrap_or(0);
            let w = content_max
                .max(c.header.chars().count() + 2)
                .clamp(MIN_COL_WIDTH as usize, MAX_COL_WIDTH as usize);
            Constraint::Length(w as u16)
        })
        .collect();

    let rows: Vec<Row> = rendered
        .into_iter()
        .map(|cells| Row::new(cells.into_iter().map(Cell::from).collect::<Vec<_>>()))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected())
        .column_spacing(1);

    page.table.select(Some(grid.selected()));
    frame.render_stateful_widget(table, chunks[0], &mut page.table);

    render_footer(frame, chunks[1], page);
}

fn render_footer<T>(frame: &mut Frame, area: Rect, page: &PageState<T>) {
    let grid = &page.grid;
    let line = if grid.total_count() == 0 {
        Line::from(Span::styled("Rows 0-0 of 0", Styles::dim()))
    } else {
        let shown = grid.start_index() + grid.visible_len().saturating_sub(1);
        let mut spans = vec![Span::styled(
            format!(
                "Rows {}-{} of {}  Page {}/{}",
                grid.start_index(),
                shown.min(grid.end_index()),
                grid.total_count(),
                grid.page_index() + 1,
                grid.total_pages(),
            ),
            Styles::dim(),
        )];
        if let Some(sort) = grid.sort() {
            spans.push(Span::styled(
                format!("  sort: {}", sort.to_api()),
                Styles::dim(),
            ));
        }
        if !grid.filter().is_empty() {
            spans.push(Span::styled(
                format!("  search: {}", grid.filter()),
                Styles::notice(),
            ));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}
