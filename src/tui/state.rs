//! Application state: tabs, per-page grid state, popups.

use std::time::Duration;

use ratatui::widgets::TableState;

use crate::grid::{ColumnDef, GridMode, GridState};
use crate::logbook::cfr::CfrEntry;
use crate::logbook::glossary::GlossaryTerm;
use crate::logbook::imports::ImportedFile;
use crate::logbook::jsr::JsrLine;
use crate::logbook::msp::MspTask;
use crate::logbook::projects::Project;
use crate::logbook::reports::RequiredReport;
use crate::logbook::timesheet::TimesheetLine;
use crate::logbook::tip::TipTicket;
use crate::logbook::waf::WafEntry;
use crate::logbook::{cfr, glossary, imports, jsr, msp, projects, reports, timesheet, tip, waf};
use crate::util::Debouncer;

/// Page-size steps cycled by the `p` key.
pub const PAGE_SIZES: &[usize] = &[10, 25, 50, 100];

/// One tab per logbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Projects,
    Cfr,
    Waf,
    Glossary,
    Timesheet,
    Tip,
    Msp,
    Jsr,
    Reports,
    Imports,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Projects,
            Tab::Cfr,
            Tab::Waf,
            Tab::Glossary,
            Tab::Timesheet,
            Tab::Tip,
            Tab::Msp,
            Tab::Jsr,
            Tab::Reports,
            Tab::Imports,
        ]
    }

    /// Short name for the tab bar.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Projects => "PRJ",
            Tab::Cfr => "CFR",
            Tab::Waf => "WAF",
            Tab::Glossary => "ERL",
            Tab::Timesheet => "TBJ",
            Tab::Tip => "TIP",
            Tab::Msp => "MSP",
            Tab::Jsr => "JSR",
            Tab::Reports => "RRL",
            Tab::Imports => "IMP",
        }
    }

    /// Long title for the content block.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::Cfr => "CFR Log",
            Tab::Waf => "WAF Log",
            Tab::Glossary => "ERL Glossary",
            Tab::Timesheet => "Time By Job",
            Tab::Tip => "Test & Inspection Plan",
            Tab::Msp => "Master Schedule",
            Tab::Jsr => "Job Summary Report",
            Tab::Reports => "Required Report Log",
            Tab::Imports => "Import Files",
        }
    }

    pub fn next(&self) -> Tab {
        let all = Tab::all();
        let pos = all.iter().position(|t| t == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    pub fn prev(&self) -> Tab {
        let all = Tab::all();
        let pos = all.iter().position(|t| t == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }

    /// Whether rows of this logbook can be deleted from the UI.
    pub fn deletable(&self) -> bool {
        matches!(
            self,
            Tab::Projects | Tab::Cfr | Tab::Waf | Tab::Glossary | Tab::Imports
        )
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the free-text search bar.
    Search,
}

/// Active popup. Only one can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    Help {
        scroll: usize,
    },
    /// Field listing for the selected row.
    Detail {
        scroll: usize,
    },
    /// Delete confirmation for the selected row, showing its label.
    ConfirmDelete {
        label: String,
    },
    QuitConfirm,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Per-logbook page state: the grid plus fetch bookkeeping.
pub struct PageState<T: 'static> {
    pub grid: GridState<T>,
    pub debounce: Debouncer,
    pub loading: bool,
    pub loaded: bool,
    pub last_error: Option<String>,
    pub table: TableState,
}

impl<T> PageState<T> {
    pub fn new(
        mode: GridMode,
        columns: &'static [ColumnDef<T>],
        page_size: usize,
        debounce_delay: Duration,
    ) -> Self {
        Self {
            grid: GridState::new(mode, columns, page_size),
            debounce: Debouncer::new(debounce_delay),
            loading: false,
            loaded: false,
            last_error: None,
            table: TableState::default(),
        }
    }
}

/// Type-erased page operations, so input handling and navigation work on
/// whichever tab is current without knowing its row type.
pub trait PageOps {
    fn select_up(&mut self);
    fn select_down(&mut self);
    fn select_first(&mut self);
    fn select_last(&mut self);

    /// Each returns true when the owner must refetch (manual-mode intent).
    fn sort_next_column(&mut self) -> bool;
    fn sort_cycle(&mut self) -> bool;
    fn page_prev(&mut self) -> bool;
    fn page_next(&mut self) -> bool;
    fn cycle_page_size(&mut self) -> bool;

    fn search_push(&mut self, c: char);
    fn search_pop(&mut self);
    fn search_clear(&mut self) -> bool;
    fn search_text(&self) -> String;

    /// True once per elapsed debounce quiet period (manual mode only).
    fn debounce_due(&mut self) -> bool;
    /// Disarms a pending debounce, e.g. when the search is applied eagerly.
    fn debounce_cancel(&mut self);
    fn needs_initial_load(&self) -> bool;

    fn has_selection(&self) -> bool;
    /// (header, rendered cell) pairs for the selected row.
    fn detail_lines(&self) -> Vec<(String, String)>;
    /// First-column cell of the selected row, for confirmation prompts.
    fn selection_label(&self) -> Option<String>;
}

impl<T> PageOps for PageState<T> {
    fn select_up(&mut self) {
        self.grid.select_up();
    }

    fn select_down(&mut self) {
        self.grid.select_down();
    }

    fn select_first(&mut self) {
        self.grid.select_first();
    }

    fn select_last(&mut self) {
        self.grid.select_last();
    }

    fn sort_next_column(&mut self) -> bool {
        self.grid.request_sort_next_column().is_some()
    }

    fn sort_cycle(&mut self) -> bool {
        let column_id = match self.grid.sort() {
            Some(s) => s.column_id,
            None => match self.grid.columns().iter().find(|c| c.sortable) {
                Some(c) => c.id,
                None => return false,
            },
        };
        self.grid.request_sort(column_id).is_some()
    }

    fn page_prev(&mut self) -> bool {
        self.grid.request_prev_page().is_some()
    }

    fn page_next(&mut self) -> bool {
        self.grid.request_next_page().is_some()
    }

    fn cycle_page_size(&mut self) -> bool {
        let current = self.grid.page_size();
        let pos = PAGE_SIZES.iter().position(|&s| s == current);
        let next = match pos {
            Some(p) => PAGE_SIZES[(p + 1) % PAGE_SIZES.len()],
            None => PAGE_SIZES[0],
        };
        self.grid.set_page_size(next).is_some()
    }

    fn search_push(&mut self, c: char) {
        let mut text = self.grid.filter().to_string();
        text.push(c);
        self.grid.set_filter(text);
        if self.grid.mode() == GridMode::Manual {
            self.debounce.poke();
        }
    }

    fn search_pop(&mut self) {
        let mut text = self.grid.filter().to_string();
        if text.pop().is_some() {
            self.grid.set_filter(text);
            if self.grid.mode() == GridMode::Manual {
                self.debounce.poke();
            }
        }
    }

    fn search_clear(&mut self) -> bool {
        if self.grid.filter().is_empty() {
            return false;
        }
        self.grid.set_filter("");
        self.debounce.cancel();
        // Manual mode must refetch without the search term.
        self.grid.mode() == GridMode::Manual
    }

    fn search_text(&self) -> String {
        self.grid.filter().to_string()
    }

    fn debounce_due(&mut self) -> bool {
        self.grid.mode() == GridMode::Manual && self.debounce.fire_due()
    }

    fn debounce_cancel(&mut self) {
        self.debounce.cancel();
    }

    fn needs_initial_load(&self) -> bool {
        !self.loaded && !self.loading
    }

    fn has_selection(&self) -> bool {
        self.grid.selected_row().is_some()
    }

    fn detail_lines(&self) -> Vec<(String, String)> {
        let Some(row) = self.grid.selected_row() else {
            return Vec::new();
        };
        self.grid
            .columns()
            .iter()
            .map(|c| (c.header.to_string(), (c.cell)(row)))
            .collect()
    }

    fn selection_label(&self) -> Option<String> {
        let row = self.grid.selected_row()?;
        self.grid.columns().first().map(|c| (c.cell)(row))
    }
}

/// Top-level application state.
pub struct AppState {
    pub current_tab: Tab,
    pub input_mode: InputMode,
    pub popup: PopupState,
    /// Transient notice shown on the status line until the next key.
    pub status_message: Option<String>,
    pub user_display: String,
    pub authenticated: bool,
    pub demo: bool,

    pub projects: PageState<Project>,
    pub cfr: PageState<CfrEntry>,
    pub waf: PageState<WafEntry>,
    pub glossary: PageState<GlossaryTerm>,
    pub timesheet: PageState<TimesheetLine>,
    pub tip: PageState<TipTicket>,
    pub msp: PageState<MspTask>,
    pub jsr: PageState<JsrLine>,
    pub reports: PageState<RequiredReport>,
    pub imports: PageState<ImportedFile>,
}

impl AppState {
    pub fn new(page_size: usize, debounce_delay: Duration, demo: bool) -> Self {
        // Demo mode runs everything locally. Against the API the glossary is
        // local too (its endpoint has no server-side paging), and the
        // schedule, JSR, and required-report logbooks are always local since
        // no list endpoint serves them.
        let served = if demo {
            GridMode::Local
        } else {
            GridMode::Manual
        };
        Self {
            current_tab: Tab::default(),
            input_mode: InputMode::default(),
            popup: PopupState::default(),
            status_message: None,
            user_display: "anonymous".to_string(),
            authenticated: false,
            demo,
            projects: PageState::new(served, projects::COLUMNS, page_size, debounce_delay),
            cfr: PageState::new(served, cfr::COLUMNS, page_size, debounce_delay),
            waf: PageState::new(served, waf::COLUMNS, page_size, debounce_delay),
            glossary: PageState::new(GridMode::Local, glossary::COLUMNS, page_size, debounce_delay),
            timesheet: PageState::new(served, timesheet::COLUMNS, page_size, debounce_delay),
            tip: PageState::new(served, tip::COLUMNS, page_size, debounce_delay),
            msp: PageState::new(GridMode::Local, msp::COLUMNS, page_size, debounce_delay),
            jsr: PageState::new(GridMode::Local, jsr::COLUMNS, page_size, debounce_delay),
            reports: PageState::new(GridMode::Local, reports::COLUMNS, page_size, debounce_delay),
            imports: PageState::new(served, imports::COLUMNS, page_size, debounce_delay),
        }
    }

    pub fn page(&self, tab: Tab) -> &dyn PageOps {
        match tab {
            Tab::Projects => &self.projects,
            Tab::Cfr => &self.cfr,
            Tab::Waf => &self.waf,
            Tab::Glossary => &self.glossary,
            Tab::Timesheet => &self.timesheet,
            Tab::Tip => &self.tip,
            Tab::Msp => &self.msp,
            Tab::Jsr => &self.jsr,
            Tab::Reports => &self.reports,
            Tab::Imports => &self.imports,
        }
    }

    pub fn page_mut(&mut self, tab: Tab) -> &mut dyn PageOps {
        match tab {
            Tab::Projects => &mut self.projects,
            Tab::Cfr => &mut self.cfr,
            Tab::Waf => &mut self.waf,
            Tab::Glossary => &mut self.glossary,
            Tab::Timesheet => &mut self.timesheet,
            Tab::Tip => &mut self.tip,
            Tab::Msp => &mut self.msp,
            Tab::Jsr => &mut self.jsr,
            Tab::Reports => &mut self.reports,
            Tab::Imports => &mut self.imports,
        }
    }

    pub fn current_page(&self) -> &dyn PageOps {
        self.page(self.current_tab)
    }

    pub fn current_page_mut(&mut self) -> &mut dyn PageOps {
        self.page_mut(self.current_tab)
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.current_tab != tab {
            self.current_tab = tab;
            self.input_mode = InputMode::Normal;
            self.status_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(10, Duration::from_millis(0), true)
    }

    #[test]
    fn tab_cycle_wraps_both_directions() {
        assert_eq!(Tab::all().len(), 10);
        assert_eq!(Tab::Projects.next(), Tab::Cfr);
        assert_eq!(Tab::Imports.next(), Tab::Projects);
        assert_eq!(Tab::Projects.prev(), Tab::Imports);
    }

    #[test]
    fn page_size_cycles_through_steps_and_resets_page() {
        let mut st = state();
        st.projects
            .grid
            .set_rows(crate::logbook::samples::projects());
        st.projects.grid.request_page(1);
        st.current_page_mut().cycle_page_size();
        assert_eq!(st.projects.grid.page_size(), 25);
        assert_eq!(st.projects.grid.page_index(), 0);
        st.current_page_mut().cycle_page_size();
        assert_eq!(st.projects.grid.page_size(), 50);
    }

    #[test]
    fn demo_pages_never_request_reload_on_paging() {
        let mut st = state();
        st.projects
            .grid
            .set_rows(crate::logbook::samples::projects());
        assert!(!st.current_page_mut().page_next());
        assert_eq!(st.projects.grid.page_index(), 1);
    }

    #[test]
    fn manual_pages_request_reload_on_paging() {
        let mut st = AppState::new(10, Duration::from_millis(0), false);
        st.projects.grid.set_page(Vec::new(), 47);
        assert!(st.current_page_mut().page_next());
        assert_eq!(st.projects.grid.page_index(), 1);
        // Glossary stays local even against the API.
        st.switch_tab(Tab::Glossary);
        st.glossary
            .grid
            .set_rows(crate::logbook::samples::glossary_terms());
        assert!(!st.current_page_mut().sort_next_column());
    }

    #[test]
    fn export_logbooks_stay_local_against_the_api() {
        let mut st = AppState::new(10, Duration::from_millis(0), false);
        for tab in [Tab::Msp, Tab::Jsr, Tab::Reports] {
            st.switch_tab(tab);
            assert!(!st.current_page_mut().sort_next_column());
        }
        st.switch_tab(Tab::Msp);
        st.msp.grid.set_rows(crate::logbook::samples::msp_tasks());
        assert!(st.current_page().has_selection());
    }

    #[test]
    fn search_edits_feed_the_filter_and_selection_label_tracks() {
        let mut st = state();
        st.glossary
            .grid
            .set_rows(crate::logbook::samples::glossary_terms());
        st.switch_tab(Tab::Glossary);
        for c in "waf".chars() {
            st.current_page_mut().search_push(c);
        }
        assert_eq!(st.current_page().search_text(), "waf");
        assert!(st.current_page().has_selection());
        st.current_page_mut().search_pop();
        assert_eq!(st.current_page().search_text(), "wa");
        st.current_page_mut().search_clear();
        assert_eq!(st.current_page().search_text(), "");
    }

    #[test]
    fn detail_lines_pair_headers_with_cells() {
        let mut st = state();
        st.projects
            .grid
            .set_rows(crate::logbook::samples::projects());
        let lines = st.current_page().detail_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, "Project ID");
        assert_eq!(lines[0].1, "103560");
        assert_eq!(st.current_page().selection_label().unwrap(), "103560");
    }
}
