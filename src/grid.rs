//! Generic data-grid view model: pagination, sorting, filtering.
//!
//! The grid is generic over an opaque row type `T` and never inspects rows
//! except through the cell accessors of its column descriptors. It operates
//! in one of two modes:
//!
//! - **Local**: filter, sort, and page slicing are computed over the
//!   in-memory row array.
//! - **Manual**: the grid holds exactly one already-fetched page of rows and
//!   a separately supplied total count. It never re-slices or re-sorts; page
//!   and sort operations only emit [`GridEvent`] intents for the owner to
//!   turn into API calls.

/// Column descriptor for a grid over rows of type `T`.
///
/// Declared once per logbook as a `&'static` table and immutable for the
/// lifetime of a page.
pub struct ColumnDef<T> {
    /// Stable identifier, also used as the API sort key.
    pub id: &'static str,
    /// Header label.
    pub header: &'static str,
    /// Cell accessor producing the rendered value.
    pub cell: fn(&T) -> String,
    /// Whether the column participates in sorting.
    pub sortable: bool,
}

/// Single-column sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub column_id: &'static str,
    pub descending: bool,
}

impl ColumnSort {
    /// Renders the API sorting convention, e.g. `"project_name desc"`.
    pub fn to_api(&self) -> String {
        format!(
            "{} {}",
            self.column_id,
            if self.descending { "desc" } else { "asc" }
        )
    }
}

/// Operating mode of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    /// In-memory filter/sort/slice.
    Local,
    /// Server-driven: rows are one pre-sorted page, operations emit intents.
    Manual,
}

/// Intent emitted by a grid in manual mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    PageChange(usize),
    PageSizeChange(usize),
    SortingChange(Option<ColumnSort>),
}

/// Sort glyph for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortGlyph {
    /// Column is not sortable.
    None,
    /// Sortable, currently unsorted.
    Neutral,
    Ascending,
    Descending,
}

impl SortGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortGlyph::None => "",
            SortGlyph::Neutral => "\u{2195}",    // ↕
            SortGlyph::Ascending => "\u{25b2}",  // ▲
            SortGlyph::Descending => "\u{25bc}", // ▼
        }
    }
}

/// View state for one grid.
pub struct GridState<T: 'static> {
    mode: GridMode,
    columns: &'static [ColumnDef<T>],
    /// In manual mode, exactly one page of already-sorted rows.
    /// In local mode, the full unfiltered set.
    rows: Vec<T>,
    page_index: usize,
    page_size: usize,
    /// Manual mode: supplied by the server. Local mode: filtered row count.
    total_count: usize,
    sort: Option<ColumnSort>,
    filter: String,
    /// Row cursor within the visible page.
    selected: usize,
}

impl<T> GridState<T> {
    pub fn new(mode: GridMode, columns: &'static [ColumnDef<T>], page_size: usize) -> Self {
        Self {
            mode,
            columns,
            rows: Vec::new(),
            page_index: 0,
            page_size: page_size.max(1),
            total_count: 0,
            sort: None,
            filter: String::new(),
            selected: 0,
        }
    }

    pub fn mode(&self) -> GridMode {
        self.mode
    }

    pub fn columns(&self) -> &'static [ColumnDef<T>] {
        self.columns
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn sort(&self) -> Option<&ColumnSort> {
        self.sort.as_ref()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replaces the full row set (local mode).
    pub fn set_rows(&mut self, rows: Vec<T>) {
        debug_assert_eq!(self.mode, GridMode::Local);
        self.rows = rows;
        self.total_count = self.filtered_indices().len();
        self.clamp_page();
        self.clamp_selection();
    }

    /// Installs one fetched page plus the server-reported total (manual mode).
    pub fn set_page(&mut self, rows: Vec<T>, total_count: usize) {
        debug_assert_eq!(self.mode, GridMode::Manual);
        self.rows = rows;
        self.total_count = total_count;
        // A shrunken total can leave page_index past the last page, e.g.
        // after deleting the only row of the final page.
        self.clamp_page();
        self.clamp_selection();
    }

    /// Drops all rows, e.g. after a failed fetch.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.total_count = 0;
        self.selected = 0;
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size).max(1)
    }

    pub fn can_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index < self.total_pages() - 1
    }

    /// 1-based index of the first row on the current page, for display.
    pub fn start_index(&self) -> usize {
        self.page_index * self.page_size + 1
    }

    /// 1-based index of the last row on the current page, for display.
    pub fn end_index(&self) -> usize {
        ((self.page_index + 1) * self.page_size).min(self.total_count)
    }

    /// Cycles a column through unsorted -> ascending -> descending -> unsorted.
    ///
    /// Single-column sort: requesting a different column restarts the cycle
    /// there (ascending) and clears the previous one. Non-sortable columns
    /// are ignored.
    pub fn request_sort(&mut self, column_id: &'static str) -> Option<GridEvent> {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id == column_id && c.sortable);
        if !sortable {
            return None;
        }

        self.sort = match self.sort.take() {
            Some(s) if s.column_id == column_id => {
                if s.descending {
                    None
                } else {
                    Some(ColumnSort {
                        column_id,
                        descending: true,
                    })
                }
            }
            _ => Some(ColumnSort {
                column_id,
                descending: false,
            }),
        };
        self.clamp_selection();
        match self.mode {
            GridMode::Manual => Some(GridEvent::SortingChange(self.sort.clone())),
            GridMode::Local => None,
        }
    }

    /// Moves the sort to the next sortable column (ascending), wrapping.
    /// With no current sort, starts at the first sortable column.
    pub fn request_sort_next_column(&mut self) -> Option<GridEvent> {
        let sortable: Vec<&'static str> = self
            .columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.id)
            .collect();
        if sortable.is_empty() {
            return None;
        }
        let next = match &self.sort {
            Some(s) => {
                let pos = sortable.iter().position(|&id| id == s.column_id);
                match pos {
                    Some(p) => sortable[(p + 1) % sortable.len()],
                    None => sortable[0],
                }
            }
            None => sortable[0],
        };
        // A different column always restarts the cycle at ascending.
        self.sort = None;
        self.request_sort(next)
    }

    /// Requests a page change; out-of-range indices are a silent no-op.
    pub fn request_page(&mut self, new_index: usize) -> Option<GridEvent> {
        if new_index >= self.total_pages() || new_index == self.page_index {
            return None;
        }
        self.page_index = new_index;
        self.selected = 0;
        match self.mode {
            GridMode::Manual => Some(GridEvent::PageChange(new_index)),
            GridMode::Local => None,
        }
    }

    pub fn request_prev_page(&mut self) -> Option<GridEvent> {
        if self.can_prev() {
            self.request_page(self.page_index - 1)
        } else {
            None
        }
    }

    pub fn request_next_page(&mut self) -> Option<GridEvent> {
        if self.can_next() {
            self.request_page(self.page_index + 1)
        } else {
            None
        }
    }

    /// Changes the page size. The old page offset is no longer meaningful,
    /// so the page index always resets to 0.
    pub fn set_page_size(&mut self, new_size: usize) -> Option<GridEvent> {
        self.page_size = new_size.max(1);
        self.page_index = 0;
        self.selected = 0;
        match self.mode {
            GridMode::Manual => Some(GridEvent::PageSizeChange(self.page_size)),
            GridMode::Local => None,
        }
    }

    /// Sets the free-text filter.
    ///
    /// Local mode narrows the visible set by case-insensitive substring match
    /// across every column's rendered cell and resets to the first page.
    /// Manual mode only stores the text; the owning page drives the API query.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.page_index = 0;
        self.selected = 0;
        if self.mode == GridMode::Local {
            self.total_count = self.filtered_indices().len();
        }
    }

    /// Indices into `rows` that pass the local filter, in row order.
    fn filtered_indices(&self) -> Vec<usize> {
        if self.mode == GridMode::Manual || self.filter.is_empty() {
            return (0..self.rows.len()).collect();
        }
        let needle = self.filter.to_lowercase();
        (0..self.rows.len())
            .filter(|&i| {
                self.columns
                    .iter()
                    .any(|c| (c.cell)(&self.rows[i]).to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Rows visible on the current page.
    ///
    /// Manual mode returns the held page untouched: the caller supplied
    /// exactly one page of already-sorted rows. Local mode filters, sorts by
    /// the sorted column's rendered cell, and slices.
    pub fn visible_rows(&self) -> Vec<&T> {
        if self.mode == GridMode::Manual {
            return self.rows.iter().collect();
        }

        let mut indices = self.filtered_indices();
        if let Some(sort) = &self.sort
            && let Some(col) = self.columns.iter().find(|c| c.id == sort.column_id)
        {
            indices.sort_by(|&a, &b| {
                let cmp = (col.cell)(&self.rows[a]).cmp(&(col.cell)(&self.rows[b]));
                if sort.descending { cmp.reverse() } else { cmp }
            });
        }

        indices
            .into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .map(|i| &self.rows[i])
            .collect()
    }

    /// Number of rows on the current page.
    pub fn visible_len(&self) -> usize {
        if self.mode == GridMode::Manual {
            self.rows.len()
        } else {
            let filtered = self.filtered_indices().len();
            filtered
                .saturating_sub(self.page_index * self.page_size)
                .min(self.page_size)
        }
    }

    /// The row under the cursor, if any.
    pub fn selected_row(&self) -> Option<&T> {
        self.visible_rows().into_iter().nth(self.selected)
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let max = self.visible_len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_len().saturating_sub(1);
    }

    /// Glyph for a column header given the current sort state.
    pub fn sort_glyph(&self, column_id: &str) -> SortGlyph {
        let Some(col) = self.columns.iter().find(|c| c.id == column_id) else {
            return SortGlyph::None;
        };
        if !col.sortable {
            return SortGlyph::None;
        }
        match &self.sort {
            Some(s) if s.column_id == column_id => {
                if s.descending {
                    SortGlyph::Descending
                } else {
                    SortGlyph::Ascending
                }
            }
            _ => SortGlyph::Neutral,
        }
    }

    fn clamp_page(&mut self) {
        if self.page_index >= self.total_pages() {
            self.page_index = self.total_pages() - 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item {
        name: String,
        qty: i64,
    }

    fn item(name: &str, qty: i64) -> Item {
        Item {
            name: name.to_string(),
            qty,
        }
    }

    static COLUMNS: &[ColumnDef<Item>] = &[
        ColumnDef {
            id: "name",
            header: "Name",
            cell: |i: &Item| i.name.clone(),
            sortable: true,
        },
        ColumnDef {
            id: "qty",
            header: "Qty",
            cell: |i: &Item| format!("{:04}", i.qty),
            sortable: true,
        },
        ColumnDef {
            id: "actions",
            header: "Actions",
            cell: |_| String::new(),
            sortable: false,
        },
    ];

    fn local_grid(n: usize, page_size: usize) -> GridState<Item> {
        let mut g = GridState::new(GridMode::Local, COLUMNS, page_size);
        g.set_rows((0..n).map(|i| item(&format!("row{:02}", i), i as i64)).collect());
        g
    }

    #[test]
    fn total_pages_is_ceiling_with_floor_of_one() {
        let mut g: GridState<Item> = GridState::new(GridMode::Manual, COLUMNS, 10);
        g.set_page(Vec::new(), 0);
        assert_eq!(g.total_pages(), 1);
        g.set_page(Vec::new(), 1);
        assert_eq!(g.total_pages(), 1);
        g.set_page(Vec::new(), 10);
        assert_eq!(g.total_pages(), 1);
        g.set_page(Vec::new(), 11);
        assert_eq!(g.total_pages(), 2);
        g.set_page(Vec::new(), 47);
        assert_eq!(g.total_pages(), 5);
    }

    #[test]
    fn display_range_for_valid_pages() {
        let mut g: GridState<Item> = GridState::new(GridMode::Manual, COLUMNS, 10);
        g.set_page(Vec::new(), 23);
        assert_eq!(g.start_index(), 1);
        assert_eq!(g.end_index(), 10);
        g.request_page(2);
        assert_eq!(g.start_index(), 21);
        assert_eq!(g.end_index(), 23);
    }

    #[test]
    fn out_of_bounds_page_request_is_a_noop() {
        let mut g: GridState<Item> = GridState::new(GridMode::Manual, COLUMNS, 10);
        g.set_page(Vec::new(), 23);
        assert_eq!(g.request_page(3), None);
        assert_eq!(g.page_index(), 0);
        assert_eq!(g.request_page(usize::MAX), None);
        assert_eq!(g.page_index(), 0);
        assert_eq!(g.request_page(2), Some(GridEvent::PageChange(2)));
        assert_eq!(g.page_index(), 2);
        assert_eq!(g.request_next_page(), None);
        assert_eq!(g.page_index(), 2);
    }

    #[test]
    fn shrinking_total_clamps_page_index_to_last_page() {
        let mut g: GridState<Item> = GridState::new(GridMode::Manual, COLUMNS, 10);
        g.set_page(Vec::new(), 41);
        g.request_page(4);
        assert_eq!(g.page_index(), 4);
        // The lone row of page 5 was deleted server-side.
        g.set_page(Vec::new(), 40);
        assert_eq!(g.page_index(), 3);
        assert_eq!(g.start_index(), 31);
        assert_eq!(g.end_index(), 40);
    }

    #[test]
    fn page_size_change_resets_page_index() {
        let mut g: GridState<Item> = GridState::new(GridMode::Manual, COLUMNS, 10);
        g.set_page(Vec::new(), 100);
        g.request_page(2);
        assert_eq!(g.page_index(), 2);
        assert_eq!(g.set_page_size(25), Some(GridEvent::PageSizeChange(25)));
        assert_eq!(g.page_index(), 0);
        assert_eq!(g.page_size(), 25);
    }

    #[test]
    fn sort_cycle_returns_to_unsorted_after_three_requests() {
        let mut g = local_grid(5, 10);
        assert_eq!(g.request_sort("name"), None); // local mode emits nothing
        assert_eq!(
            g.sort(),
            Some(&ColumnSort {
                column_id: "name",
                descending: false
            })
        );
        g.request_sort("name");
        assert_eq!(
            g.sort(),
            Some(&ColumnSort {
                column_id: "name",
                descending: true
            })
        );
        g.request_sort("name");
        assert_eq!(g.sort(), None);
        // Fourth invocation reproduces the first transition.
        g.request_sort("name");
        assert_eq!(
            g.sort(),
            Some(&ColumnSort {
                column_id: "name",
                descending: false
            })
        );
    }

    #[test]
    fn sorting_another_column_clears_the_previous_one() {
        let mut g = local_grid(5, 10);
        g.request_sort("name");
        g.request_sort("qty");
        assert_eq!(
            g.sort(),
            Some(&ColumnSort {
                column_id: "qty",
                descending: false
            })
        );
    }

    #[test]
    fn non_sortable_column_is_ignored() {
        let mut g = local_grid(5, 10);
        assert_eq!(g.request_sort("actions"), None);
        assert_eq!(g.sort(), None);
        assert_eq!(g.sort_glyph("actions"), SortGlyph::None);
    }

    #[test]
    fn manual_mode_emits_sorting_change() {
        let mut g: GridState<Item> = GridState::new(GridMode::Manual, COLUMNS, 10);
        g.set_page(vec![item("a", 1)], 1);
        let ev = g.request_sort("name");
        assert_eq!(
            ev,
            Some(GridEvent::SortingChange(Some(ColumnSort {
                column_id: "name",
                descending: false
            })))
        );
        g.request_sort("name");
        let ev = g.request_sort("name");
        assert_eq!(ev, Some(GridEvent::SortingChange(None)));
    }

    #[test]
    fn local_filter_matches_substring_across_columns() {
        let mut g = GridState::new(GridMode::Local, COLUMNS, 10);
        g.set_rows(vec![item("alpha", 1), item("bravo", 2), item("charlie", 3)]);

        g.set_filter("BRAV");
        let visible = g.visible_rows();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "bravo");
        assert_eq!(g.total_count(), 1);

        g.set_filter("zulu");
        assert!(g.visible_rows().is_empty());
        assert_eq!(g.total_count(), 0);

        g.set_filter("");
        assert_eq!(g.visible_rows().len(), 3);
        assert_eq!(g.total_count(), 3);

        // Match via the qty column's rendered cell ("0003").
        g.set_filter("0003");
        let visible = g.visible_rows();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "charlie");
    }

    #[test]
    fn twenty_three_rows_paginate_into_three_pages() {
        let mut g = local_grid(23, 10);
        assert_eq!(g.total_pages(), 3);
        assert_eq!(g.visible_rows().len(), 10);
        assert_eq!(g.visible_rows()[0].name, "row00");

        g.request_page(2);
        let visible = g.visible_rows();
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].name, "row20");
        assert_eq!(g.start_index(), 21);
        assert_eq!(g.end_index(), 23);
        assert!(!g.can_next());
        assert!(g.can_prev());
    }

    #[test]
    fn local_sort_orders_by_rendered_cell() {
        let mut g = GridState::new(GridMode::Local, COLUMNS, 10);
        g.set_rows(vec![item("bravo", 2), item("alpha", 9), item("charlie", 1)]);
        g.request_sort("qty");
        let names: Vec<&str> = g.visible_rows().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["charlie", "bravo", "alpha"]);
        g.request_sort("qty");
        let names: Vec<&str> = g.visible_rows().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn manual_mode_never_reslices_supplied_rows() {
        let mut g: GridState<Item> = GridState::new(GridMode::Manual, COLUMNS, 10);
        let page: Vec<Item> = (0..10).map(|i| item(&format!("srv{}", i), i)).collect();
        g.set_page(page, 47);
        assert_eq!(g.visible_rows().len(), 10);
        assert_eq!(g.total_pages(), 5);
        // Sorting or filtering must not touch the held rows.
        g.request_sort("name");
        g.set_filter("srv9");
        assert_eq!(g.visible_rows().len(), 10);
        assert_eq!(g.visible_rows()[0].name, "srv0");
    }

    #[test]
    fn sort_glyphs_follow_sort_state() {
        let mut g = local_grid(3, 10);
        assert_eq!(g.sort_glyph("name"), SortGlyph::Neutral);
        g.request_sort("name");
        assert_eq!(g.sort_glyph("name"), SortGlyph::Ascending);
        assert_eq!(g.sort_glyph("qty"), SortGlyph::Neutral);
        g.request_sort("name");
        assert_eq!(g.sort_glyph("name"), SortGlyph::Descending);
    }

    #[test]
    fn sort_next_column_wraps_over_sortable_columns() {
        let mut g = local_grid(3, 10);
        g.request_sort_next_column();
        assert_eq!(g.sort().unwrap().column_id, "name");
        g.request_sort_next_column();
        assert_eq!(g.sort().unwrap().column_id, "qty");
        g.request_sort_next_column();
        assert_eq!(g.sort().unwrap().column_id, "name");
    }

    #[test]
    fn selection_clamps_to_visible_rows() {
        let mut g = local_grid(5, 10);
        g.select_down();
        g.select_down();
        assert_eq!(g.selected(), 2);
        g.select_last();
        assert_eq!(g.selected(), 4);
        g.select_down();
        assert_eq!(g.selected(), 4);
        g.set_filter("row00");
        assert_eq!(g.selected(), 0);
        assert_eq!(g.selected_row().unwrap().name, "row00");
    }

    #[test]
    fn column_sort_renders_api_convention() {
        let asc = ColumnSort {
            column_id: "project_name",
            descending: false,
        };
        let desc = ColumnSort {
            column_id: "created_date",
            descending: true,
        };
        assert_eq!(asc.to_api(), "project_name asc");
        assert_eq!(desc.to_api(), "created_date desc");
    }
}
