// UI rendering module.
// One explicit pass from App state to the frame, dispatched to a
// widget module per screen region.

mod form;
mod note_list;
mod title_bar;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::app::App;

/// Render the whole screen from the current state.
///
/// Called after every event; nothing here mutates the app.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title bar
        Constraint::Length(8), // input form
        Constraint::Length(1), // divider
        Constraint::Min(1),    // note list
    ])
    .split(f.area());

    title_bar::render(f, chunks[0], app);
    form::render(f, chunks[1], app);
    divider(f, chunks[2], app);
    note_list::render(f, chunks[3], app);
}

fn divider(f: &mut Frame, area: Rect, app: &App) {
    let line = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.palette.border));
    f.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use jot_core::{NoteDataSource, Strings};

    use crate::theme::ThemeMode;

    fn rendered_text(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).map_or(" ", |c| c.symbol()));
            }
            text.push('\n');
        }
        text
    }

    fn demo_app() -> App {
        App::new(
            NoteDataSource.load_notes(),
            Strings::default(),
            ThemeMode::Dark.palette(),
        )
    }

    #[test]
    fn renders_app_name_and_labels() {
        let text = rendered_text(&demo_app(), 80, 40);
        assert!(text.contains("Jot"));
        assert!(text.contains("Title"));
        assert!(text.contains("Add a note"));
        assert!(text.contains("Save"));
    }

    #[test]
    fn renders_one_row_per_note_in_input_order() {
        let app = demo_app();
        let text = rendered_text(&app, 80, 40);
        let mut last = 0;
        for note in &app.notes {
            let at = text[last..]
                .find(&note.title)
                .unwrap_or_else(|| panic!("missing row for {:?}", note.title));
            last += at + note.title.len();
        }
    }

    #[test]
    fn renders_formatted_entry_dates() {
        let text = rendered_text(&demo_app(), 80, 40);
        assert!(text.contains("Mon, 5 Jun"));
    }

    #[test]
    fn renders_typed_field_text() {
        let mut app = demo_app();
        app.screen.set_title("Groceries");
        app.screen.set_description("Milk and eggs");
        let text = rendered_text(&app, 80, 40);
        assert!(text.contains("Groceries"));
        assert!(text.contains("Milk and eggs"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let app = App::new(vec![], Strings::default(), ThemeMode::Light.palette());
        let text = rendered_text(&app, 80, 24);
        assert!(text.contains("No notes yet"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let _ = rendered_text(&demo_app(), 10, 5);
    }
}
