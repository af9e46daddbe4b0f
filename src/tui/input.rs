//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, PageOps, PopupState, Tab};

/// What the application loop must do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    /// Refetch the current tab's page from its data source.
    Reload,
    /// Delete the selected row, then refetch.
    Delete,
}

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // Ctrl-C always quits, whatever mode or popup is active.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    state.status_message = None;

    if state.popup.is_open() {
        return handle_popup_key(state, key);
    }
    match state.input_mode {
        InputMode::Search => handle_search_key(state, key),
        InputMode::Normal => handle_normal_key(state, key),
    }
}

fn handle_popup_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match &mut state.popup {
        PopupState::Help { scroll } | PopupState::Detail { scroll } => match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                *scroll += 1;
                KeyAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                *scroll = scroll.saturating_sub(1);
                KeyAction::None
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                state.popup = PopupState::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        PopupState::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                state.popup = PopupState::None;
                KeyAction::Delete
            }
            _ => {
                state.popup = PopupState::None;
                KeyAction::None
            }
        },
        PopupState::QuitConfirm => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Enter => {
                KeyAction::Quit
            }
            _ => {
                state.popup = PopupState::None;
                KeyAction::None
            }
        },
        PopupState::None => KeyAction::None,
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        // Enter applies immediately, skipping the debounce.
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            let page = state.current_page_mut();
            page.debounce_cancel();
            KeyAction::Reload
        }
        KeyCode::Backspace => {
            state.current_page_mut().search_pop();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.current_page_mut().search_push(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_normal_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            state.switch_tab(Tab::all()[idx]);
            KeyAction::None
        }
        // Tenth tab, labelled 0 in the header.
        KeyCode::Char('0') => {
            state.switch_tab(Tab::all()[9]);
            KeyAction::None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            state.current_page_mut().select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.current_page_mut().select_down();
            KeyAction::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.current_page_mut().select_first();
            KeyAction::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.current_page_mut().select_last();
            KeyAction::None
        }

        KeyCode::Left | KeyCode::Char('h') => {
            if state.current_page_mut().page_prev() {
                KeyAction::Reload
            } else {
                KeyAction::None
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if state.current_page_mut().page_next() {
                KeyAction::Reload
            } else {
                KeyAction::None
            }
        }
        KeyCode::Char('p') => {
            if state.current_page_mut().cycle_page_size() {
                KeyAction::Reload
            } else {
                KeyAction::None
            }
        }

        KeyCode::Char('s') => {
            if state.current_page_mut().sort_next_column() {
                KeyAction::Reload
            } else {
                KeyAction::None
            }
        }
        KeyCode::Char('d') => {
            if state.current_page_mut().sort_cycle() {
                KeyAction::Reload
            } else {
                KeyAction::None
            }
        }

        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            KeyAction::None
        }
        KeyCode::Esc => {
            if state.current_page_mut().search_clear() {
                KeyAction::Reload
            } else {
                KeyAction::None
            }
        }

        KeyCode::F(5) | KeyCode::Char('R') => KeyAction::Reload,

        KeyCode::Enter => {
            if state.current_page().has_selection() {
                state.popup = PopupState::Detail { scroll: 0 };
            }
            KeyAction::None
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if !state.current_tab.deletable() {
                state.status_message = Some(format!(
                    "{} is a read-only logbook",
                    state.current_tab.title()
                ));
                return KeyAction::None;
            }
            match state.current_page().selection_label() {
                Some(label) => {
                    state.popup = PopupState::ConfirmDelete { label };
                }
                None => {
                    state.status_message = Some("nothing selected".to_string());
                }
            }
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logbook::samples;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn demo_state() -> AppState {
        let mut st = AppState::new(10, Duration::from_millis(0), true);
        st.projects.grid.set_rows(samples::projects());
        st
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut st = demo_state();
        st.input_mode = InputMode::Search;
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut st, ev), KeyAction::Quit);
    }

    #[test]
    fn q_opens_quit_confirm_and_y_quits() {
        let mut st = demo_state();
        assert_eq!(handle_key(&mut st, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(st.popup, PopupState::QuitConfirm);
        assert_eq!(handle_key(&mut st, key(KeyCode::Char('y'))), KeyAction::Quit);
    }

    #[test]
    fn quit_confirm_dismissed_by_other_keys() {
        let mut st = demo_state();
        handle_key(&mut st, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut st, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(st.popup, PopupState::None);
    }

    #[test]
    fn tab_keys_cycle_tabs() {
        let mut st = demo_state();
        handle_key(&mut st, key(KeyCode::Tab));
        assert_eq!(st.current_tab, Tab::Cfr);
        handle_key(&mut st, key(KeyCode::BackTab));
        assert_eq!(st.current_tab, Tab::Projects);
        handle_key(&mut st, key(KeyCode::Char('4')));
        assert_eq!(st.current_tab, Tab::Glossary);
        handle_key(&mut st, key(KeyCode::Char('0')));
        assert_eq!(st.current_tab, Tab::Imports);
        handle_key(&mut st, key(KeyCode::Char('8')));
        assert_eq!(st.current_tab, Tab::Jsr);
    }

    #[test]
    fn paging_in_local_mode_does_not_reload() {
        let mut st = demo_state();
        assert_eq!(handle_key(&mut st, key(KeyCode::Right)), KeyAction::None);
        assert_eq!(st.projects.grid.page_index(), 1);
        // Third page is the last one; a further request is a no-op.
        handle_key(&mut st, key(KeyCode::Right));
        assert_eq!(handle_key(&mut st, key(KeyCode::Right)), KeyAction::None);
        assert_eq!(st.projects.grid.page_index(), 2);
    }

    #[test]
    fn paging_in_manual_mode_reloads() {
        let mut st = AppState::new(10, Duration::from_millis(0), false);
        st.projects.grid.set_page(Vec::new(), 47);
        assert_eq!(handle_key(&mut st, key(KeyCode::Right)), KeyAction::Reload);
        assert_eq!(handle_key(&mut st, key(KeyCode::Char('s'))), KeyAction::Reload);
        assert_eq!(handle_key(&mut st, key(KeyCode::Char('p'))), KeyAction::Reload);
    }

    #[test]
    fn search_mode_edits_filter_and_enter_reloads_manual_pages() {
        let mut st = AppState::new(10, Duration::from_secs(1), false);
        st.projects.grid.set_page(Vec::new(), 47);
        handle_key(&mut st, key(KeyCode::Char('/')));
        assert_eq!(st.input_mode, InputMode::Search);
        handle_key(&mut st, key(KeyCode::Char('u')));
        handle_key(&mut st, key(KeyCode::Char('s')));
        handle_key(&mut st, key(KeyCode::Char('s')));
        assert_eq!(st.current_page().search_text(), "uss");
        assert_eq!(handle_key(&mut st, key(KeyCode::Enter)), KeyAction::Reload);
        assert_eq!(st.input_mode, InputMode::Normal);
        // Enter flushed the pending debounce, no second fetch later.
        assert!(!st.current_page_mut().debounce_due());
    }

    #[test]
    fn delete_key_only_offered_for_deletable_tabs() {
        let mut st = demo_state();
        handle_key(&mut st, key(KeyCode::Char('x')));
        assert!(matches!(st.popup, PopupState::ConfirmDelete { .. }));
        assert_eq!(handle_key(&mut st, key(KeyCode::Char('y'))), KeyAction::Delete);

        st.switch_tab(Tab::Timesheet);
        handle_key(&mut st, key(KeyCode::Char('x')));
        assert_eq!(st.popup, PopupState::None);
        assert!(st.status_message.is_some());
    }

    #[test]
    fn delete_key_confirms_on_field_report_rows() {
        let mut st = demo_state();
        st.switch_tab(Tab::Cfr);
        st.cfr.grid.set_rows(samples::cfr_entries());
        handle_key(&mut st, key(KeyCode::Char('x')));
        assert!(matches!(st.popup, PopupState::ConfirmDelete { .. }));
        assert_eq!(handle_key(&mut st, key(KeyCode::Char('y'))), KeyAction::Delete);
    }

    #[test]
    fn enter_opens_detail_popup_for_selected_row() {
        let mut st = demo_state();
        handle_key(&mut st, key(KeyCode::Enter));
        assert_eq!(st.popup, PopupState::Detail { scroll: 0 });
        handle_key(&mut st, key(KeyCode::Esc));
        assert_eq!(st.popup, PopupState::None);
    }
}
