// Title bar rendering.
// App name on the left, bell ornament on the right, tinted background.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bar_style = Style::default()
        .bg(app.palette.bar_bg)
        .fg(app.palette.bar_fg);

    let name = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            app.strings.app_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .style(bar_style);
    f.render_widget(name, area);

    let bell = Paragraph::new("🔔 ")
        .alignment(Alignment::Right)
        .style(bar_style);
    f.render_widget(bell, area);
}
