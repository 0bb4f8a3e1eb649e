use crate::app::App;
use crate::ui::theme::{ACCENT, BAR_BG, FG_DIM};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_header(app: &mut App, f: &mut Frame, area: Rect) {
    let title = app.t("home.title");
    let subtitle = app.t("home.subtitle");
    let inner_width = usize::from(area.width.saturating_sub(2));

    let lines = vec![
        Line::from(Span::styled(
            fit(&title, inner_width),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(fit(&subtitle, inner_width), Style::default().fg(FG_DIM))),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(ACCENT)),
        )
        .style(Style::default().bg(BAR_BG));
    f.render_widget(header, area);
}

/// Truncates `text` to `width` terminal cells, marking the cut with `…`.
fn fit(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::fit;

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(fit("SCAI", 10), "SCAI");
        assert_eq!(fit("科学AI协作框架", 6), "科学A…");
        assert_eq!(fit("abcdef", 4), "abc…");
    }
}
