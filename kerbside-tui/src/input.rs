use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.search_bins`(...)
    SearchSchedules,
    /// Run `service.outlook_for_suburb`(...) for the currently selected result
    LoadOutlookForSelection,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Right, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::RegionSelect => match key.code {
            Up | Char('k') => {
                if app.region_list_index > 0 {
                    app.region_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.region_list_index + 1 < app.regions.len() {
                    app.region_list_index += 1;
                }
            }
            Enter | Char(' ') => {
                app.select_current_region();
            }
            _ => {}
        },

        Screen::ScheduleSearch => match key.code {
            Up => {
                if app.result_list_index > 0 {
                    app.result_list_index -= 1;
                }
            }
            Down => {
                if app.result_list_index + 1 < app.search_results.len() {
                    app.result_list_index += 1;
                }
            }
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    app.search_input.push(character);
                }
            }
            Backspace => {
                app.search_input.pop();
            }
            Enter => {
                action = Action::SearchSchedules;
            }
            Right | Tab => {
                action = Action::LoadOutlookForSelection;
            }
            Left | Esc => {
                app.screen = Screen::RegionSelect;
                app.search_results.clear();
                app.result_list_index = 0;
            }
            _ => {}
        },

        Screen::OutlookView => match key.code {
            Left | Esc | Char('b') => {
                app.screen = Screen::ScheduleSearch;
            }
            _ => {}
        },
    }
    action
}
