use crossterm::event::{KeyCode, KeyEvent};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use taskflow_app::{Session, StatusFilter};
use taskflow_core::{Category, Priority, TaskId};

use super::input::TextInput;
use super::keymap::{ConfirmAction, KeyMap, ListAction};
use super::theme::Theme;
use super::visibility::Visibility;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// How many ticks a status line stays on screen.
const STATUS_TTL_TICKS: u8 = 20;

/// Which surface currently receives keystrokes.
#[derive(Debug)]
pub(super) enum Mode {
    /// Task list navigation.
    Normal,
    /// Editing the search text.
    Search,
    /// Filling in the add-task form.
    AddForm(AddForm),
}

/// Field focus within the add-task form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormField {
    Text,
    Priority,
    Category,
    Due,
}

impl FormField {
    const fn next(self) -> Self {
        match self {
            Self::Text => Self::Priority,
            Self::Priority => Self::Category,
            Self::Category => Self::Due,
            Self::Due => Self::Text,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Text => Self::Due,
            Self::Priority => Self::Text,
            Self::Category => Self::Priority,
            Self::Due => Self::Category,
        }
    }
}

/// State of the add-task form.
#[derive(Debug)]
pub(super) struct AddForm {
    pub(super) text: TextInput,
    pub(super) priority: Priority,
    pub(super) category: Category,
    pub(super) due: TextInput,
    pub(super) focus: FormField,
}

impl AddForm {
    fn new() -> Self {
        Self {
            text: TextInput::default(),
            priority: Priority::default(),
            category: Category::default(),
            due: TextInput::with_value(OffsetDateTime::now_utc().date().to_string()),
            focus: FormField::Text,
        }
    }
}

/// Transient message shown in the footer.
#[derive(Debug)]
pub(super) struct StatusLine {
    pub(super) text: String,
    ttl: u8,
}

/// Renderer-side state: the session plus everything needed to draw and route
/// keys. Holds no task data of its own; the projection is re-read from the
/// session every frame.
pub(super) struct App {
    pub(super) session: Session,
    keymap: KeyMap,
    pub(super) theme: Theme,
    pub(super) mode: Mode,
    pub(super) visibility: Visibility,
    /// Search text being edited; mirrors the session filter.
    pub(super) search_input: TextInput,
    pub(super) status: Option<StatusLine>,
    pub(super) should_quit: bool,
}

impl App {
    pub(super) fn new(session: Session, theme: Theme, keymap: KeyMap) -> Self {
        let mut app = Self {
            session,
            keymap,
            theme,
            mode: Mode::Normal,
            visibility: Visibility::default(),
            search_input: TextInput::default(),
            status: None,
            should_quit: false,
        };
        app.sync_selection(None);
        app
    }

    /// Route a key press to the active surface.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        // The confirmation prompt takes precedence over every mode.
        if self.session.deletion().is_pending() {
            self.handle_confirm_key(key);
            return;
        }

        match self.mode {
            Mode::Normal => self.handle_list_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::AddForm(_) => self.handle_form_key(key),
        }
    }

    /// Expire the footer status line.
    pub(super) fn tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ttl = status.ttl.saturating_sub(1);
            if status.ttl == 0 {
                self.status = None;
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match self.keymap.confirm_action(key) {
            Some(ConfirmAction::Confirm) => {
                if let Some(task) = self.session.confirm_delete() {
                    self.notify(format!("Deleted \"{}\"", task.text));
                }
                self.sync_selection(None);
            }
            Some(ConfirmAction::Cancel) => self.session.cancel_delete(),
            None => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let Some(action) = self.keymap.list_action(key) else {
            return;
        };
        match action {
            ListAction::Quit => self.should_quit = true,
            ListAction::Down => self.visibility.select_next(),
            ListAction::Up => self.visibility.select_prev(),
            ListAction::Toggle => {
                if let Some(id) = self.visibility.selected_id() {
                    self.session.toggle_task(id);
                    self.sync_selection(Some(id));
                }
            }
            ListAction::AddTask => self.mode = Mode::AddForm(AddForm::new()),
            ListAction::DeleteTask => {
                if let Some(id) = self.visibility.selected_id() {
                    self.session.request_delete(id);
                }
            }
            ListAction::Search => self.mode = Mode::Search,
            ListAction::CycleFilter => {
                let next = self.session.filter().status().cycle();
                self.set_filter(next);
            }
            ListAction::FilterAll => self.set_filter(StatusFilter::All),
            ListAction::FilterPending => self.set_filter(StatusFilter::Pending),
            ListAction::FilterCompleted => self.set_filter(StatusFilter::Completed),
            ListAction::ToggleTheme => self.theme = self.theme.toggled(),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_input.clear();
                self.session.clear_search();
                self.mode = Mode::Normal;
                self.sync_selection(None);
            }
            KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.search_input.backspace();
                self.apply_search();
            }
            KeyCode::Delete => {
                self.search_input.delete();
                self.apply_search();
            }
            KeyCode::Left => self.search_input.move_left(),
            KeyCode::Right => self.search_input.move_right(),
            KeyCode::Home => self.search_input.move_home(),
            KeyCode::End => self.search_input.move_end(),
            KeyCode::Char(ch) => {
                self.search_input.insert(ch);
                self.apply_search();
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Mode::AddForm(form) = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => form.focus = form.focus.next(),
            KeyCode::BackTab | KeyCode::Up => form.focus = form.focus.prev(),
            KeyCode::Left => match form.focus {
                FormField::Priority => form.priority = prev_priority(form.priority),
                FormField::Category => form.category = prev_category(form.category),
                FormField::Text => form.text.move_left(),
                FormField::Due => form.due.move_left(),
            },
            KeyCode::Right => match form.focus {
                FormField::Priority => form.priority = next_priority(form.priority),
                FormField::Category => form.category = next_category(form.category),
                FormField::Text => form.text.move_right(),
                FormField::Due => form.due.move_right(),
            },
            KeyCode::Backspace => match form.focus {
                FormField::Text => form.text.backspace(),
                FormField::Due => form.due.backspace(),
                FormField::Priority | FormField::Category => {}
            },
            KeyCode::Delete => match form.focus {
                FormField::Text => form.text.delete(),
                FormField::Due => form.due.delete(),
                FormField::Priority | FormField::Category => {}
            },
            KeyCode::Home => match form.focus {
                FormField::Text => form.text.move_home(),
                FormField::Due => form.due.move_home(),
                FormField::Priority | FormField::Category => {}
            },
            KeyCode::End => match form.focus {
                FormField::Text => form.text.move_end(),
                FormField::Due => form.due.move_end(),
                FormField::Priority | FormField::Category => {}
            },
            KeyCode::Char(ch) => match form.focus {
                FormField::Text => form.text.insert(ch),
                FormField::Due => form.due.insert(ch),
                FormField::Priority | FormField::Category => {}
            },
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let Mode::AddForm(form) = &self.mode else {
            return;
        };

        // A blanked-out due field falls back to today.
        let due = if form.due.is_blank() {
            None
        } else {
            match Date::parse(form.due.value().trim(), DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    self.notify("Invalid due date (expected YYYY-MM-DD)");
                    return;
                }
            }
        };

        match self
            .session
            .add_task(form.text.value(), form.priority, form.category, due)
        {
            Ok(id) => {
                self.mode = Mode::Normal;
                self.notify("Task added");
                self.sync_selection(Some(id));
            }
            Err(err) => self.notify(err.to_string()),
        }
    }

    fn set_filter(&mut self, status: StatusFilter) {
        self.session.set_status_filter(status);
        self.sync_selection(None);
    }

    fn apply_search(&mut self) {
        self.session.set_search(self.search_input.value());
        self.sync_selection(None);
    }

    fn sync_selection(&mut self, preferred: Option<TaskId>) {
        let visible = self.session.visible_tasks();
        self.visibility.rebuild(&visible, preferred);
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            ttl: STATUS_TTL_TICKS,
        });
    }
}

const fn next_priority(priority: Priority) -> Priority {
    match priority {
        Priority::Low => Priority::Medium,
        Priority::Medium => Priority::High,
        Priority::High => Priority::Low,
    }
}

const fn prev_priority(priority: Priority) -> Priority {
    match priority {
        Priority::Low => Priority::High,
        Priority::Medium => Priority::Low,
        Priority::High => Priority::Medium,
    }
}

const fn next_category(category: Category) -> Category {
    match category {
        Category::Work => Category::Personal,
        Category::Personal => Category::Health,
        Category::Health => Category::Learning,
        Category::Learning => Category::Other,
        Category::Other => Category::Work,
    }
}

const fn prev_category(category: Category) -> Category {
    match category {
        Category::Work => Category::Other,
        Category::Personal => Category::Work,
        Category::Health => Category::Personal,
        Category::Learning => Category::Health,
        Category::Other => Category::Learning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keybindings::KeyBindingsConfig;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let keymap = KeyMap::from_config(&KeyBindingsConfig::default())
            .unwrap_or_else(|err| panic!("default keymap must compile: {err}"));
        App::new(Session::new(), Theme::dark(), keymap)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn add_task(app: &mut App, text: &str) {
        press(app, KeyCode::Char('a'));
        type_text(app, text);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn add_form_creates_a_task_on_enter() {
        let mut app = app();
        add_task(&mut app, "Buy milk");

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.session.counts().total, 1);
        let visible = app.session.visible_tasks();
        assert_eq!(visible[0].text, "Buy milk");
        assert_eq!(app.visibility.selected_id(), Some(visible[0].id));
    }

    #[test]
    fn empty_form_submission_keeps_the_form_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::AddForm(_)));
        assert_eq!(app.session.counts().total, 0);
        assert!(app.status.is_some(), "rejection must surface a message");
    }

    #[test]
    fn invalid_due_date_keeps_the_form_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Stretch");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        let Mode::AddForm(form) = &mut app.mode else {
            panic!("expected the add form");
        };
        form.due.clear();
        type_text(&mut app, "not a date");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::AddForm(_)));
        assert_eq!(app.session.counts().total, 0);
    }

    #[test]
    fn form_cycles_priority_and_category() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);

        let Mode::AddForm(form) = &app.mode else {
            panic!("expected the add form");
        };
        assert_eq!(form.priority, Priority::High);
        assert_eq!(form.category, Category::Health);
    }

    #[test]
    fn toggle_flips_the_selected_task() {
        let mut app = app();
        add_task(&mut app, "one");
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.session.counts().completed, 1);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.counts().completed, 0);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = app();
        add_task(&mut app, "doomed");

        press(&mut app, KeyCode::Char('d'));
        assert!(app.session.deletion().is_pending());
        assert_eq!(app.session.counts().total, 1, "request must not delete");

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.session.deletion().is_pending());
        assert_eq!(app.session.counts().total, 0);
    }

    #[test]
    fn cancel_keeps_the_task() {
        let mut app = app();
        add_task(&mut app, "survivor");

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));

        assert!(!app.session.deletion().is_pending());
        assert_eq!(app.session.counts().total, 1);
    }

    #[test]
    fn search_narrows_the_view_and_esc_clears_it() {
        let mut app = app();
        add_task(&mut app, "Buy milk");
        add_task(&mut app, "Walk dog");

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "MILK");
        assert_eq!(app.session.visible_tasks().len(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(!app.session.filter().search_active());
        assert_eq!(app.session.visible_tasks().len(), 2);
    }

    #[test]
    fn filter_keys_switch_the_status_filter() {
        let mut app = app();
        add_task(&mut app, "pending one");
        add_task(&mut app, "done one");
        press(&mut app, KeyCode::Char(' '));

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.filter().status(), StatusFilter::Completed);
        assert_eq!(app.session.visible_tasks().len(), 1);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.session.filter().status(), StatusFilter::All);
    }

    #[test]
    fn quit_key_sets_the_flag() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn theme_key_toggles_the_palette() {
        let mut app = app();
        let before = app.theme;
        press(&mut app, KeyCode::Char('t'));
        assert_ne!(app.theme, before);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, before);
    }
}
