// Input form rendering.
// Two labeled single-line fields and the save button, centered.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, Focus};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let centered = Layout::horizontal([
        Constraint::Percentage(10),
        Constraint::Percentage(80),
        Constraint::Percentage(10),
    ])
    .split(area)[1];

    let rows = Layout::vertical([
        Constraint::Length(3), // title input
        Constraint::Length(3), // description input
        Constraint::Length(1), // save button
        Constraint::Min(0),
    ])
    .split(centered);

    input_field(
        f,
        rows[0],
        &app.strings.title,
        app.screen.title(),
        app.focus == Focus::Title,
        app,
    );
    input_field(
        f,
        rows[1],
        &app.strings.description,
        app.screen.description(),
        app.focus == Focus::Description,
        app,
    );
    save_button(f, rows[2], app);
}

fn input_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, app: &App) {
    let border_color = if focused {
        app.palette.accent
    } else {
        app.palette.border
    };
    let block = Block::bordered()
        .title(label.to_string())
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = Paragraph::new(value).style(Style::default().fg(app.palette.text_primary));
    f.render_widget(text, inner);

    // Put the hardware cursor after the text in the focused field
    if focused && inner.width > 0 {
        let x = inner.x + (Line::raw(value).width() as u16).min(inner.width - 1);
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

fn save_button(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Save;
    let style = if focused {
        Style::default()
            .fg(app.palette.bar_fg)
            .bg(app.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.palette.accent)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", app.strings.save),
        style,
    )))
    .alignment(Alignment::Center);
    f.render_widget(button, area);
}
