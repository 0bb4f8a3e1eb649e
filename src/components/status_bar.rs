use crate::app::App;
use crate::ui::theme::{
    ACCENT, BAR_BG, BAR_TEXT, FG_DIM, STATUS_EXCELLENT, STATUS_GOOD, STATUS_POOR,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use scai::particles::FrameRateStatus;

pub fn render_status_bar(app: &mut App, f: &mut Frame, area: Rect) {
    let language = app.language.active_display_name().to_string();
    let particles_label = app.t("ui.particles");
    let field_text = if app.field.is_mounted() {
        format!("{}: {}", particles_label, app.field.particle_count())
    } else {
        app.t("ui.fieldDetached").to_string()
    };

    let status_color = match app.monitor.status() {
        FrameRateStatus::Excellent => STATUS_EXCELLENT,
        FrameRateStatus::Good => STATUS_GOOD,
        FrameRateStatus::Poor => STATUS_POOR,
    };
    let stats = app.translations.stats();

    let right_side_text = match app.status_message.clone() {
        Some(key) => app.t(&key).to_string(),
        None => format!(
            "{} · {} · {}",
            app.t("ui.languageHint"),
            app.t("ui.cacheHint"),
            app.t("ui.quitHint")
        ),
    };

    let bar = Style::default().bg(BAR_BG);
    let line = Line::from(vec![
        Span::styled(format!(" {} ", language), bar.fg(Color::Black).bg(ACCENT)),
        Span::styled(format!(" {} ", field_text), bar.fg(BAR_TEXT)),
        Span::styled(
            format!("| {} fps {} ", app.monitor.fps(), app.monitor.status().label()),
            bar.fg(status_color),
        ),
        Span::styled(
            format!("| cache {}/{} ", stats.hits, stats.misses),
            bar.fg(FG_DIM),
        ),
        Span::styled(format!("| {} ", right_side_text), bar.fg(BAR_TEXT)),
    ]);
    let footer = Paragraph::new(line).style(bar);
    f.render_widget(footer, area);
}
