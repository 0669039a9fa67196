use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, FormField, Mode};
use crate::util::unicode;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => close_form(app),
        (_, KeyCode::Enter) => submit(app),

        // Field focus
        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            let field = app.form_field.next();
            focus(app, field);
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            let field = app.form_field.prev();
            focus(app, field);
        }

        // Type selector
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) if app.form_field == FormField::Type => {
            let draft = app.task_view.draft_mut();
            draft.task_type = Some(draft.effective_type().prev());
        }
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) | (_, KeyCode::Char(' '))
            if app.form_field == FormField::Type =>
        {
            let draft = app.task_view.draft_mut();
            draft.task_type = Some(draft.effective_type().next());
        }
        (_, _) if app.form_field == FormField::Type => {}

        // Text editing
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            if let Some(buf) = focused_text(app) {
                buf.clear();
            }
            app.form_cursor = 0;
        }
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => delete_word_back(app),
        (m, KeyCode::Backspace) if m.contains(KeyModifiers::ALT) => delete_word_back(app),
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => app.form_cursor = 0,
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.form_cursor = focused_len(app);
        }
        (_, KeyCode::Home) => app.form_cursor = 0,
        (_, KeyCode::End) => app.form_cursor = focused_len(app),
        (_, KeyCode::Left) => {
            let cursor = app.form_cursor;
            if let Some(prev) = focused_text(app).and_then(|b| unicode::prev_grapheme_boundary(b, cursor)) {
                app.form_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            let cursor = app.form_cursor;
            if let Some(next) = focused_text(app).and_then(|b| unicode::next_grapheme_boundary(b, cursor)) {
                app.form_cursor = next;
            }
        }
        (_, KeyCode::Backspace) => {
            let cursor = app.form_cursor;
            if let Some(buf) = focused_text(app)
                && let Some(prev) = unicode::prev_grapheme_boundary(buf, cursor)
            {
                buf.drain(prev..cursor);
                app.form_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            let cursor = app.form_cursor;
            if let Some(buf) = focused_text(app)
                && let Some(next) = unicode::next_grapheme_boundary(buf, cursor)
            {
                buf.drain(cursor..next);
            }
        }
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            let cursor = app.form_cursor;
            if let Some(buf) = focused_text(app) {
                buf.insert(cursor, c);
                app.form_cursor = cursor + c.len_utf8();
            }
        }
        _ => {}
    }
}

/// Mutable buffer of the focused text field (None on the type selector)
fn focused_text(app: &mut App) -> Option<&mut String> {
    let draft = app.task_view.draft_mut();
    match app.form_field {
        FormField::Title => Some(&mut draft.title),
        FormField::Description => Some(&mut draft.description),
        FormField::Type => None,
    }
}

fn focused_len(app: &App) -> usize {
    let draft = app.task_view.draft();
    match app.form_field {
        FormField::Title => draft.title.len(),
        FormField::Description => draft.description.len(),
        FormField::Type => 0,
    }
}

fn focus(app: &mut App, field: FormField) {
    app.form_field = field;
    app.form_cursor = focused_len(app);
}

fn delete_word_back(app: &mut App) {
    let cursor = app.form_cursor;
    if let Some(buf) = focused_text(app) {
        let start = unicode::word_boundary_left(buf, cursor);
        buf.drain(start..cursor);
        app.form_cursor = start;
    }
}

/// Hide the form, keeping whatever was typed
fn close_form(app: &mut App) {
    app.task_view.set_form_open(false);
    app.mode = Mode::Navigate;
}

fn submit(app: &mut App) {
    let now = app.now_utc();
    match app.task_view.submit_draft(now) {
        Some(id) => {
            app.mode = Mode::Navigate;
            app.form_field = FormField::Title;
            app.form_cursor = 0;
            // Put the cursor on the new task if the current view shows it
            if let Some(pos) = app.visible_tasks().iter().position(|t| t.id() == &id) {
                app.cursor = pos;
            }
        }
        None => {
            focus(app, FormField::Title);
            app.status_message = Some("Title is required".to_string());
        }
    }
}
