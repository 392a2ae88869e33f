use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3f, 0x51, 0xb5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STEP_DONE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const CURSOR_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
