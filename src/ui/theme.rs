use ratatui::style::Color;

/// Page background; particles and links are blended over it.
pub const BG_RGB: (u8, u8, u8) = (5, 8, 20);
pub const BG_PRIMARY: Color = Color::Rgb(BG_RGB.0, BG_RGB.1, BG_RGB.2);
pub const FG_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const FG_DIM: Color = Color::Rgb(148, 163, 184);

pub const ACCENT: Color = Color::Rgb(0, 240, 255);

pub const BAR_BG: Color = Color::Rgb(15, 23, 42);
pub const BAR_TEXT: Color = Color::Rgb(235, 240, 255);

pub const STATUS_EXCELLENT: Color = Color::Rgb(74, 222, 128);
pub const STATUS_GOOD: Color = Color::Rgb(250, 204, 21);
pub const STATUS_POOR: Color = Color::Rgb(248, 113, 113);
