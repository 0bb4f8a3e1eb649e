use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Line},
    Frame,
};
use scai::particles::{DrawCommand, DrawList, Rgba};

use crate::ui::layout::{CELL_HEIGHT, CELL_WIDTH};
use crate::ui::theme::BG_RGB;

/// Replays the last particle frame onto a braille canvas.
///
/// The terminal repaints every cell on each frame, so the trail fade becomes
/// the canvas background. Canvas coordinates grow upwards; field
/// coordinates grow downwards, hence the flip.
pub fn render_backdrop(frame: &DrawList, f: &mut Frame, area: Rect) {
    let width = f64::from(area.width) * CELL_WIDTH;
    let height = f64::from(area.height) * CELL_HEIGHT;
    let background = frame
        .commands()
        .iter()
        .find_map(|command| match command {
            DrawCommand::Fade(color) => Some(color.blend_over(BG_RGB)),
            _ => None,
        })
        .unwrap_or(BG_RGB);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(rgb(background))
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for command in frame.commands() {
                match command {
                    DrawCommand::Fade(_) => {}
                    DrawCommand::Circle {
                        center,
                        radius,
                        color,
                    } => ctx.draw(&Circle {
                        x: center.x,
                        y: height - center.y,
                        radius: *radius,
                        color: over(*color, background),
                    }),
                    DrawCommand::Line { from, to, color, .. } => ctx.draw(&Line {
                        x1: from.x,
                        y1: height - from.y,
                        x2: to.x,
                        y2: height - to.y,
                        color: over(*color, background),
                    }),
                }
            }
        });
    f.render_widget(canvas, area);
}

fn over(color: Rgba, background: (u8, u8, u8)) -> Color {
    rgb(color.blend_over(background))
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
