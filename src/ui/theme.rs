use ratatui::style::Color;

pub const CAT_ORANGE: Color = Color::Rgb(0xf2, 0x8c, 0x28);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const FAVORITE_STAR: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const SKELETON: Color = Color::Rgb(0x33, 0x33, 0x33);
