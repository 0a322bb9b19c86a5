// Note list rendering.
// One card-like row per note: title, description, formatted date.

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::app::{App, Focus};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.notes.is_empty() {
        let placeholder = Paragraph::new("No notes yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.palette.text_secondary));
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app.notes.iter().map(|note| note_row(note, app)).collect();

    let highlight = if app.focus == Focus::List {
        Style::default().bg(app.palette.selection_bg)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);

    // Selection lives in the app; the widget state is rebuilt per frame
    // so the list stays a function of current state.
    let mut state = ListState::default().with_selected(app.selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn note_row<'a>(note: &'a jot_core::NoteModel, app: &App) -> ListItem<'a> {
    ListItem::new(vec![
        Line::styled(
            note.title.as_str(),
            Style::default()
                .fg(app.palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            note.description.as_str(),
            Style::default().fg(app.palette.text_secondary),
        ),
        Line::styled(
            note.entry_date_label(),
            Style::default()
                .fg(app.palette.text_secondary)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::raw(""),
    ])
}
