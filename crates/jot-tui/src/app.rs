// Central application state and event handling.
// A single struct holds all state; mutations happen in handle_* methods.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use jot_core::{NoteModel, NoteScreenState, Strings};

use crate::theme::Palette;

/// Handler for note-level events coming out of the screen
pub type NoteCallback = Box<dyn FnMut(&NoteModel)>;

/// Actions the event loop must carry out (returned from `handle_key`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
}

/// Which control currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Description,
    Save,
    List,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Save,
            Self::Save => Self::List,
            Self::List => Self::Title,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Title => Self::List,
            Self::Description => Self::Title,
            Self::Save => Self::Description,
            Self::List => Self::Save,
        }
    }
}

/// Central application state
pub struct App {
    /// The two ephemeral input cells
    pub screen: NoteScreenState,
    /// Notes shown in the list, in display order
    pub notes: Vec<NoteModel>,
    /// Control that receives keystrokes
    pub focus: Focus,
    /// Selected list row, if any
    pub selected: Option<usize>,
    /// Display strings
    pub strings: Strings,
    /// Resolved colors
    pub palette: Palette,
    /// Extension point for appending a note; nothing invokes it yet
    pub on_add_note: NoteCallback,
    /// Extension point for removing a note; nothing invokes it yet
    pub on_remove_note: NoteCallback,
    /// Fired when Enter is pressed on a list row
    pub on_note_clicked: NoteCallback,
}

impl App {
    /// Build the app around a fixed note list.
    ///
    /// All callbacks start as no-ops; callers overwrite the ones they
    /// care about.
    #[must_use]
    pub fn new(notes: Vec<NoteModel>, strings: Strings, palette: Palette) -> Self {
        let selected = if notes.is_empty() { None } else { Some(0) };
        Self {
            screen: NoteScreenState::new(),
            notes,
            focus: Focus::Title,
            selected,
            strings,
            palette,
            on_add_note: Box::new(|_| {}),
            on_remove_note: Box::new(|_| {}),
            on_note_clicked: Box::new(|_| {}),
        }
    }

    /// Handle a key event, returning an action if the loop must act
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Action::Quit);
            }
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Title | Focus::Description => self.handle_field_key(key),
            Focus::Save => self.handle_save_key(key),
            Focus::List => self.handle_list_key(key),
        }
        None
    }

    /// Keystrokes for whichever input field has focus.
    ///
    /// Each keystroke forms a candidate string that the screen either
    /// accepts or silently drops; the previous value stays visible on
    /// rejection.
    fn handle_field_key(&mut self, key: KeyEvent) {
        let mut candidate = match self.focus {
            Focus::Title => self.screen.title().to_string(),
            _ => self.screen.description().to_string(),
        };

        match key.code {
            KeyCode::Char(c) => candidate.push(c),
            KeyCode::Backspace => {
                candidate.pop();
            }
            KeyCode::Enter => {
                self.focus = self.focus.next();
                return;
            }
            _ => return,
        }

        let accepted = match self.focus {
            Focus::Title => self.screen.set_title(&candidate),
            _ => self.screen.set_description(&candidate),
        };
        if !accepted {
            tracing::trace!("keystroke dropped by input filter");
        }
    }

    fn handle_save_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) && self.screen.save() {
            tracing::info!("input fields cleared");
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.map(|i| i.saturating_sub(1));
            }
            KeyCode::Down => {
                let max = self.notes.len().saturating_sub(1);
                self.selected = self.selected.map(|i| (i + 1).min(max));
            }
            KeyCode::Enter => {
                if let Some(note) = self.selected.and_then(|i| self.notes.get(i)) {
                    let note = note.clone();
                    (self.on_note_clicked)(&note);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use jot_core::NoteDataSource;
    use pretty_assertions::assert_eq;

    fn app_with_notes() -> App {
        App::new(
            NoteDataSource.load_notes(),
            Strings::default(),
            crate::theme::ThemeMode::Dark.palette(),
        )
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_letters_fills_the_title() {
        let mut app = app_with_notes();
        type_str(&mut app, "Groceries");
        assert_eq!(app.screen.title(), "Groceries");
    }

    #[test]
    fn disallowed_chars_are_dropped_silently() {
        let mut app = app_with_notes();
        type_str(&mut app, "Milk x2!");
        assert_eq!(app.screen.title(), "Milk x");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut app = app_with_notes();
        type_str(&mut app, "Milk");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.screen.title(), "Mil");
    }

    #[test]
    fn tab_cycles_focus_forward_and_back() {
        let mut app = app_with_notes();
        assert_eq!(app.focus, Focus::Title);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Description);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Title);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn enter_in_a_field_advances_focus() {
        let mut app = app_with_notes();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Description);
    }

    #[test]
    fn save_clears_filled_fields() {
        let mut app = app_with_notes();
        type_str(&mut app, "Groceries");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Milk and eggs");
        app.focus = Focus::Save;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.title(), "");
        assert_eq!(app.screen.description(), "");
    }

    #[test]
    fn save_with_empty_title_changes_nothing() {
        let mut app = app_with_notes();
        app.focus = Focus::Description;
        type_str(&mut app, "Something");
        app.focus = Focus::Save;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.description(), "Something");
    }

    #[test]
    fn save_never_fires_the_add_callback() {
        let added = Rc::new(RefCell::new(0u32));
        let counter = Rc::clone(&added);
        let mut app = app_with_notes();
        app.on_add_note = Box::new(move |_| *counter.borrow_mut() += 1);
        type_str(&mut app, "Groceries");
        app.focus = Focus::Description;
        type_str(&mut app, "Milk and eggs");
        app.focus = Focus::Save;
        press(&mut app, KeyCode::Enter);
        assert_eq!(*added.borrow(), 0);
    }

    #[test]
    fn enter_on_a_row_fires_note_clicked() {
        let clicked: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&clicked);
        let mut app = app_with_notes();
        app.on_note_clicked = Box::new(move |note| sink.borrow_mut().push(note.title.clone()));
        app.focus = Focus::List;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(*clicked.borrow(), vec!["Groceries".to_string()]);
    }

    #[test]
    fn list_selection_clamps_at_both_ends() {
        let mut app = app_with_notes();
        app.focus = Focus::List;
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, Some(0));
        for _ in 0..100 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected, Some(app.notes.len() - 1));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut app = App::new(
            vec![],
            Strings::default(),
            crate::theme::ThemeMode::Light.palette(),
        );
        assert_eq!(app.selected, None);
        app.focus = Focus::List;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut app = app_with_notes();
        assert_eq!(press(&mut app, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }
}
