use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regex::Regex;

use crate::model::Task;
use crate::tui::app::{App, Mode, compile_search};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel search
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            app.search_input.clear();
        }

        // Execute search
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
            if app.search_input.is_empty() {
                return;
            }
            app.last_search = Some(std::mem::take(&mut app.search_input));
            // Start from the cursor itself so a match under it is kept
            if !cursor_matches(app) {
                jump_to_match(app, true);
            }
        }

        (_, KeyCode::Backspace) => {
            if app.search_input.pop().is_none() {
                app.mode = Mode::Navigate;
            }
        }
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => app.search_input.clear(),
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => app.search_input.push(c),
        _ => {}
    }
}

/// Whether a card's text matches the search
pub fn task_matches(task: &Task, re: &Regex) -> bool {
    re.is_match(task.title()) || task.description().is_some_and(|d| re.is_match(d))
}

/// Positions in `tasks` whose text matches `re`
pub fn matching_indices(tasks: &[&Task], re: &Regex) -> Vec<usize> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task_matches(task, re))
        .map(|(i, _)| i)
        .collect()
}

fn cursor_matches(app: &App) -> bool {
    let Some(re) = app.active_search_re() else {
        return false;
    };
    app.visible_tasks()
        .get(app.cursor)
        .is_some_and(|task| task_matches(task, &re))
}

/// Move the cursor to the next (or previous) matching card, wrapping around
pub(super) fn jump_to_match(app: &mut App, forward: bool) {
    let Some(pattern) = app.last_search.as_deref() else {
        return;
    };
    let Some(re) = compile_search(pattern) else {
        return;
    };
    let matches = matching_indices(&app.visible_tasks(), &re);
    if matches.is_empty() {
        app.status_message = Some(format!("No match for /{}", pattern));
        return;
    }
    let cursor = app.cursor;
    let target = if forward {
        matches
            .iter()
            .copied()
            .find(|&i| i > cursor)
            .unwrap_or(matches[0])
    } else {
        matches
            .iter()
            .rev()
            .copied()
            .find(|&i| i < cursor)
            .unwrap_or(matches[matches.len() - 1])
    };
    app.cursor = target;
}
