use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::app::App;
use crate::components::{
    backdrop::render_backdrop, header::render_header, status_bar::render_status_bar,
};

pub mod layout;
pub mod theme;
use theme::*;

const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 6;

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let notice = Paragraph::new(app.t("common.warning").to_string())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
        f.render_widget(notice, size);
        return;
    }

    let base = Block::default().style(Style::default().bg(BG_PRIMARY));
    f.render_widget(base, size);

    let areas = layout::areas(size);
    render_header(app, f, areas.header);
    render_backdrop(&app.frame, f, areas.field);
    render_status_bar(app, f, areas.status);
}
