//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, ListPage, ListQuery};
use crate::logbook::auth::AuthService;
use crate::logbook::cfr::CfrService;
use crate::logbook::glossary::GlossaryService;
use crate::logbook::imports::ImportsService;
use crate::logbook::projects::ProjectsService;
use crate::logbook::samples;
use crate::logbook::timesheet::TimesheetService;
use crate::logbook::tip::TipService;
use crate::logbook::waf::WafService;
use crate::session::SessionContext;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, PageOps, PageState, Tab};

/// Where page data comes from.
pub enum DataSource {
    Api(ApiClient),
    /// Built-in sample rows, no network.
    Demo,
}

/// Main TUI application.
pub struct App {
    source: DataSource,
    state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(
        source: DataSource,
        mut session: SessionContext,
        page_size: usize,
        debounce: Duration,
    ) -> Self {
        let demo = matches!(source, DataSource::Demo);
        if let DataSource::Api(api) = &source {
            match AuthService::new(api).get_user() {
                Ok(user) => session.save_profile(user.into()),
                // The app stays usable anonymously.
                Err(err) => warn!(error = %err, "auth lookup failed"),
            }
        }

        let mut state = AppState::new(page_size, debounce, demo);
        state.user_display = session.display_name().to_string();
        state.authenticated = session.is_authenticated();

        Self {
            source,
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        loop {
            // Lazily fetch whichever tab just became visible.
            if self.state.current_page().needs_initial_load() {
                self.reload_current();
            }

            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => {
                    if self.state.current_page_mut().debounce_due() {
                        self.reload_current();
                    }
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Reload => self.reload_current(),
                    KeyAction::Delete => self.delete_selected(),
                    KeyAction::None => {}
                },
                Ok(Event::Resize(..)) => {}
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn reload_current(&mut self) {
        let tab = self.state.current_tab;
        debug!(tab = tab.name(), "reload");
        match &self.source {
            DataSource::Demo => load_samples(&mut self.state, tab),
            DataSource::Api(api) => fetch_page(api, &mut self.state, tab),
        }
    }

    fn delete_selected(&mut self) {
        let tab = self.state.current_tab;
        match &self.source {
            DataSource::Demo => {
                self.state.status_message = Some("delete is disabled in demo mode".to_string());
            }
            DataSource::Api(api) => {
                match delete_row(api, &self.state, tab) {
                    Ok(true) => {
                        self.state.status_message = Some("row deleted".to_string());
                        fetch_page(api, &mut self.state, tab);
                    }
                    Ok(false) => {}
                    Err(err) => {
                        self.state.status_message = Some(err.to_string());
                    }
                }
            }
        }
    }
}

/// Builds the 1-based API query from the grid's current view state.
fn query_for<T>(page: &PageState<T>) -> ListQuery {
    let mut q = ListQuery::new(page.grid.page_index() + 1, page.grid.page_size());
    if let Some(sort) = page.grid.sort() {
        q.sorting = sort.to_api();
    }
    q.search = page.grid.filter().to_string();
    q
}

/// Installs a fetched page, or records the failure on the page.
///
/// A 409 carries a user-facing message and comes back for the status line
/// instead of replacing the table with an error.
fn apply_fetch<T>(
    page: &mut PageState<T>,
    result: Result<ListPage<T>, ApiError>,
) -> Option<String> {
    page.loading = false;
    page.loaded = true;
    match result {
        Ok(fetched) => {
            let total = fetched.total;
            page.grid.set_page(fetched.items, total);
            page.last_error = None;
            None
        }
        Err(err) if err.is_conflict() => {
            page.last_error = None;
            Some(err.to_string())
        }
        Err(err) => {
            warn!(error = %err, "page fetch failed");
            page.grid.clear();
            page.last_error = Some(err.to_string());
            None
        }
    }
}

/// Installs a full local row set fetched from an unpaged endpoint.
fn apply_local_fetch<T>(page: &mut PageState<T>, result: Result<Vec<T>, ApiError>) {
    page.loading = false;
    page.loaded = true;
    match result {
        Ok(rows) => {
            page.grid.set_rows(rows);
            page.last_error = None;
        }
        Err(err) => {
            warn!(error = %err, "fetch failed");
            page.grid.clear();
            page.last_error = Some(err.to_string());
        }
    }
}

fn fetch_page(api: &ApiClient, state: &mut AppState, tab: Tab) {
    let notice = match tab {
        Tab::Projects => {
            let q = query_for(&state.projects);
            apply_fetch(&mut state.projects, ProjectsService::new(api).list(&q))
        }
        Tab::Cfr => {
            let q = query_for(&state.cfr);
            apply_fetch(&mut state.cfr, CfrService::new(api).list(&q))
        }
        Tab::Waf => {
            let q = query_for(&state.waf);
            apply_fetch(&mut state.waf, WafService::new(api).list(&q))
        }
        Tab::Glossary => {
            // Unpaged endpoint; the grid pages it locally.
            apply_local_fetch(&mut state.glossary, GlossaryService::new(api).list());
            None
        }
        Tab::Timesheet => {
            let q = query_for(&state.timesheet);
            apply_fetch(&mut state.timesheet, TimesheetService::new(api).list(&q))
        }
        Tab::Tip => {
            let q = query_for(&state.tip);
            apply_fetch(&mut state.tip, TipService::new(api).list(&q))
        }
        // No list endpoints exist for these exports; built-in rows even
        // against a live server.
        Tab::Msp | Tab::Jsr | Tab::Reports => {
            load_samples(state, tab);
            None
        }
        Tab::Imports => {
            let page = state.imports.grid.page_index() + 1;
            let size = state.imports.grid.page_size();
            apply_fetch(&mut state.imports, ImportsService::new(api).list(page, size))
        }
    };
    if notice.is_some() {
        state.status_message = notice;
    }
}

fn load_samples(state: &mut AppState, tab: Tab) {
    match tab {
        Tab::Projects => state.projects.grid.set_rows(samples::projects()),
        Tab::Cfr => state.cfr.grid.set_rows(samples::cfr_entries()),
        Tab::Waf => state.waf.grid.set_rows(samples::waf_entries()),
        Tab::Glossary => state.glossary.grid.set_rows(samples::glossary_terms()),
        Tab::Timesheet => state.timesheet.grid.set_rows(samples::timesheet_lines()),
        Tab::Tip => state.tip.grid.set_rows(samples::tip_tickets()),
        Tab::Msp => state.msp.grid.set_rows(samples::msp_tasks()),
        Tab::Jsr => state.jsr.grid.set_rows(samples::jsr_lines()),
        Tab::Reports => state.reports.grid.set_rows(samples::required_reports()),
        Tab::Imports => state.imports.grid.set_rows(samples::imported_files()),
    }
    mark_loaded(state, tab);
}

fn mark_loaded(state: &mut AppState, tab: Tab) {
    match tab {
        Tab::Projects => state.projects.loaded = true,
        Tab::Cfr => state.cfr.loaded = true,
        Tab::Waf => state.waf.loaded = true,
        Tab::Glossary => state.glossary.loaded = true,
        Tab::Timesheet => state.timesheet.loaded = true,
        Tab::Tip => state.tip.loaded = true,
        Tab::Msp => state.msp.loaded = true,
        Tab::Jsr => state.jsr.loaded = true,
        Tab::Reports => state.reports.loaded = true,
        Tab::Imports => state.imports.loaded = true,
    }
}

/// Deletes the selected row of a deletable tab. Returns false when there is
/// nothing to delete.
fn delete_row(api: &ApiClient, state: &AppState, tab: Tab) -> Result<bool, ApiError> {
    match tab {
        Tab::Projects => {
            let Some(id) = state.projects.grid.selected_row().and_then(|p| p.id.clone()) else {
                return Ok(false);
            };
            ProjectsService::new(api).delete(&id)?;
            Ok(true)
        }
        Tab::Cfr => {
            let Some(id) = state.cfr.grid.selected_row().and_then(|e| e.id.clone()) else {
                return Ok(false);
            };
            CfrService::new(api).delete(&id)?;
            Ok(true)
        }
        Tab::Waf => {
            let Some(id) = state.waf.grid.selected_row().and_then(|e| e.id.clone()) else {
                return Ok(false);
            };
            WafService::new(api).delete(&id)?;
            Ok(true)
        }
        Tab::Glossary => {
            let Some(id) = state.glossary.grid.selected_row().and_then(|t| t.id) else {
                return Ok(false);
            };
            GlossaryService::new(api).delete(id)?;
            Ok(true)
        }
        Tab::Imports => {
            let Some(id) = state.imports.grid.selected_row().and_then(|f| f.id) else {
                return Ok(false);
            };
            ImportsService::new(api).delete(id)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridMode;
    use crate::logbook::projects::{self, Project};

    fn manual_page() -> PageState<Project> {
        PageState::new(
            GridMode::Manual,
            projects::COLUMNS,
            10,
            Duration::from_millis(0),
        )
    }

    #[test]
    fn query_reflects_grid_state_one_based() {
        let mut page = manual_page();
        page.grid.set_page(Vec::new(), 47);
        page.grid.request_page(2);
        page.grid.request_sort("project_name");
        page.grid.set_filter("uss");
        let q = query_for(&page);
        // set_filter resets to the first page.
        assert_eq!(q.page_number, 1);
        assert_eq!(q.page_size, 10);
        assert_eq!(q.sorting, "project_name asc");
        assert_eq!(q.search, "uss");
    }

    #[test]
    fn successful_fetch_installs_page_and_clears_error() {
        let mut page = manual_page();
        page.loading = true;
        page.last_error = Some("old".to_string());
        let fetched = ListPage {
            items: samples::projects().into_iter().take(10).collect(),
            total: 23,
        };
        let notice = apply_fetch(&mut page, Ok(fetched));
        assert!(notice.is_none());
        assert!(page.last_error.is_none());
        assert!(page.loaded);
        assert_eq!(page.grid.total_count(), 23);
        assert_eq!(page.grid.visible_len(), 10);
    }

    #[test]
    fn failed_fetch_clears_rows_and_records_error() {
        let mut page = manual_page();
        page.grid.set_page(samples::projects(), 23);
        let err = ApiError::Status {
            code: 500,
            message: "boom".to_string(),
        };
        let notice = apply_fetch(&mut page, Err(err));
        assert!(notice.is_none());
        assert_eq!(page.grid.total_count(), 0);
        assert!(page.last_error.is_some());
    }

    #[test]
    fn conflict_becomes_a_notice_not_a_page_error() {
        let mut page = manual_page();
        let err = ApiError::Status {
            code: 409,
            message: "project already exists".to_string(),
        };
        let notice = apply_fetch(&mut page, Err(err));
        assert!(notice.unwrap().contains("project already exists"));
        assert!(page.last_error.is_none());
    }
}
