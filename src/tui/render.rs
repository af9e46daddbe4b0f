//! Main rendering logic.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AppState, InputMode, PageOps, PopupState, Tab};
use super::style::Styles;
use super::widgets::{
    render_confirm_delete, render_detail, render_header, render_help, render_page,
    render_quit_confirm,
};

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Content
        Constraint::Length(1), // Status / search line
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
    render_status(frame, chunks[2], state);

    // Popups overlay everything else.
    let detail_lines = if matches!(state.popup, PopupState::Detail { .. }) {
        state.current_page().detail_lines()
    } else {
        Vec::new()
    };
    let detail_title = state.current_tab.title();
    match &mut state.popup {
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::Detail { scroll } => {
            render_detail(frame, area, detail_title, &detail_lines, scroll)
        }
        PopupState::ConfirmDelete { label } => render_confirm_delete(frame, area, label),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}

fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let title = state.current_tab.title();
    match state.current_tab {
        Tab::Projects => render_page(frame, area, title, &mut state.projects),
        Tab::Cfr => render_page(frame, area, title, &mut state.cfr),
        Tab::Waf => render_page(frame, area, title, &mut state.waf),
        Tab::Glossary => render_page(frame, area, title, &mut state.glossary),
        Tab::Timesheet => render_page(frame, area, title, &mut state.timesheet),
        Tab::Tip => render_page(frame, area, title, &mut state.tip),
        Tab::Msp => render_page(frame, area, title, &mut state.msp),
        Tab::Jsr => render_page(frame, area, title, &mut state.jsr),
        Tab::Reports => render_page(frame, area, title, &mut state.reports),
        Tab::Imports => render_page(frame, area, title, &mut state.imports),
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.input_mode == InputMode::Search {
        Line::from(vec![
            Span::styled(" /", Styles::help_key()),
            Span::styled(state.current_page().search_text(), Styles::search_input()),
            Span::styled("▏", Styles::search_input()),
            Span::styled("  Enter apply, Esc done", Styles::dim()),
        ])
    } else if let Some(msg) = &state.status_message {
        Line::from(Span::styled(format!(" {}", msg), Styles::notice()))
    } else {
        Line::from(Span::styled(
            " ?:help  /:search  s/d:sort  h/l:page  q:quit",
            Styles::dim(),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
