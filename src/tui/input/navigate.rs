use crossterm::event::{KeyCode, KeyEvent};

use crate::model::ViewMode;
use crate::tui::app::{App, FormField, Mode};

use super::search::jump_to_match;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything; ? and Esc close it
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_tasks().len().saturating_sub(1);
        }

        // Tabs
        KeyCode::Char('1') => select_view(app, ViewMode::Today),
        KeyCode::Char('2') => select_view(app, ViewMode::Yesterday),
        KeyCode::Char('3') => select_view(app, ViewMode::Week),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            let next = app.task_view.view().next_tab();
            select_view(app, next);
        }
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
            let prev = app.task_view.view().prev_tab();
            select_view(app, prev);
        }

        // Tasks
        KeyCode::Char('a') | KeyCode::Char('+') => open_form(app),
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => toggle_cursor_task(app),

        // Search
        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            app.search_input.clear();
        }
        KeyCode::Char('n') if app.last_search.is_some() => jump_to_match(app, true),
        KeyCode::Char('N') if app.last_search.is_some() => jump_to_match(app, false),
        KeyCode::Esc => app.last_search = None,

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.visible_tasks().len();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(count - 1);
}

/// Switch tabs. The cursor goes back to the top of the new list.
pub(super) fn select_view(app: &mut App, view: ViewMode) {
    if app.task_view.view() == view {
        return;
    }
    app.task_view.select_view(view);
    app.cursor = 0;
    app.scroll_offset = 0;
}

/// Show the creation form with focus on the title
fn open_form(app: &mut App) {
    app.task_view.set_form_open(true);
    app.mode = Mode::Form;
    app.form_field = FormField::Title;
    app.form_cursor = app.task_view.draft().title.len();
}

fn toggle_cursor_task(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    let now = app.now_utc();
    app.task_view.toggle_status(&id, now);
    // Reopening a task under Yesterday drops it from the list
    app.clamp_cursor();
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use crossterm::event::KeyCode;

    use crate::model::{Config, TaskStatus, TaskType, ViewMode};
    use crate::ops::TaskView;
    use crate::tui::app::{App, Clock, Mode};
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::{ch, key};

    fn app() -> App {
        let now = DateTime::parse_from_rfc3339("2024-06-12T15:00:00+00:00").unwrap();
        let mut tv = TaskView::with_welcome_task(ViewMode::Today, now.to_utc());
        for (title, t) in [("bug", TaskType::SuddenBugFix), ("bg", TaskType::BackgroundTask)] {
            tv.draft_mut().title = title.into();
            tv.draft_mut().task_type = Some(t);
            tv.submit_draft(now.to_utc()).unwrap();
        }
        App::new(tv, Config::default()).with_clock(Clock::Fixed(now))
    }

    fn cursor_title(app: &App) -> String {
        app.visible_tasks()[app.cursor].title().to_string()
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let mut app = app();
        handle_key(&mut app, ch('k'));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, ch('g'));
        assert_eq!(cursor_title(&app), "bug");
        handle_key(&mut app, ch('G'));
        assert_eq!(cursor_title(&app), "bg");
    }

    #[test]
    fn space_toggles_task_under_cursor() {
        let mut app = app();
        handle_key(&mut app, ch('j'));
        assert_eq!(cursor_title(&app), "Welcome to Task Tracker");
        handle_key(&mut app, ch(' '));
        let task = app.visible_tasks()[1];
        assert_eq!(task.status(), TaskStatus::Closed);
        assert_eq!(task.closed_at(), Some(app.now_utc()));
        handle_key(&mut app, ch('x'));
        assert_eq!(app.visible_tasks()[1].status(), TaskStatus::Open);
    }

    #[test]
    fn number_keys_select_tabs_and_reset_cursor() {
        let mut app = app();
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('3'));
        assert_eq!(app.task_view.view(), ViewMode::Week);
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, ch('2'));
        assert_eq!(app.task_view.view(), ViewMode::Yesterday);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.task_view.view(), ViewMode::Week);
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.task_view.view(), ViewMode::Yesterday);
    }

    #[test]
    fn a_opens_form() {
        let mut app = app();
        handle_key(&mut app, ch('a'));
        assert_eq!(app.mode, Mode::Form);
        assert!(app.task_view.is_form_open());
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app();
        handle_key(&mut app, ch('?'));
        assert!(app.show_help);
        handle_key(&mut app, ch('q'));
        assert!(!app.should_quit);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn toggle_on_empty_list_is_noop() {
        let mut app = app();
        handle_key(&mut app, ch('2'));
        assert!(app.visible_tasks().is_empty());
        handle_key(&mut app, ch(' '));
        assert!(app.task_view.tasks().iter().all(|t| t.is_open()));
    }
}
