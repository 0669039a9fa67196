use std::io;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::model::{Config, Task, TaskId};
use crate::ops::TaskView;
use crate::ops::calendar;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Creation form has focus
    Form,
    Search,
}

/// Field of the creation form that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Type,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Type,
            FormField::Type => FormField::Title,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Title => FormField::Type,
            FormField::Description => FormField::Title,
            FormField::Type => FormField::Description,
        }
    }
}

/// Source of "now" and the time zone calendar days are read in
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Wall clock, local time zone
    System,
    /// Pinned instant, still read in the local time zone
    Frozen(DateTime<Utc>),
    /// Pinned instant and a fixed UTC offset
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    pub fn now_utc(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Frozen(t) => *t,
            Clock::Fixed(t) => t.to_utc(),
        }
    }

    /// Tasks `view` shows at this clock's "now", in display order.
    ///
    /// The local variants pass a `DateTime<Local>` so every timestamp is read
    /// with the offset in force at that instant, not the current one.
    pub fn visible_tasks<'a>(&self, view: &'a TaskView) -> Vec<&'a Task> {
        match self {
            Clock::System => view.visible_tasks(&Local::now()),
            Clock::Frozen(t) => view.visible_tasks(&t.with_timezone(&Local)),
            Clock::Fixed(t) => view.visible_tasks(t),
        }
    }

    /// Calendar date of `instant` in this clock's zone
    pub fn local_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        match self {
            Clock::System | Clock::Frozen(_) => calendar::local_date(instant, &Local),
            Clock::Fixed(t) => calendar::local_date(instant, &t.timezone()),
        }
    }
}

/// Main application state
pub struct App {
    pub task_view: TaskView,
    pub config: Config,
    pub theme: Theme,
    pub clock: Clock,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the visible task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Focused form field
    pub form_field: FormField,
    /// Byte offset of the edit cursor in the focused text field
    pub form_cursor: usize,
    pub show_help: bool,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
    /// Transient message shown in the status row until the next key press
    pub status_message: Option<String>,
}

impl App {
    pub fn new(task_view: TaskView, config: Config) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            task_view,
            config,
            theme,
            clock: Clock::System,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            form_field: FormField::Title,
            form_cursor: 0,
            show_help: false,
            search_input: String::new(),
            last_search: None,
            status_message: None,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now_utc(&self) -> DateTime<Utc> {
        self.clock.now_utc()
    }

    /// Tasks for the current view, in display order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.clock.visible_tasks(&self.task_view)
    }

    /// Id of the task under the cursor
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.visible_tasks()
            .get(self.cursor)
            .map(|task| task.id().clone())
    }

    /// Keep the cursor inside the visible list
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_tasks().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. Otherwise from last_search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            Mode::Search => return None,
            _ => self.last_search.as_deref()?,
        };
        compile_search(pattern)
    }
}

/// Case-insensitive regex, falling back to a literal match for invalid patterns
pub fn compile_search(pattern: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){}", pattern))
        .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
        .ok()
}

/// Run the TUI application
pub fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(view = %app.task_view.view(), "tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!(tasks = app.task_view.tasks().len(), "tui stopped");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        // Redrawn on every tick so the day-based views roll over at midnight
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
