use ratatui::style::Color;

// Palette lifted from the original checkout screen.
pub const HEADER_PURPLE: Color = Color::Rgb(0x37, 0x07, 0x5d);
pub const BANNER_PURPLE: Color = Color::Rgb(0x3e, 0x18, 0x57);
pub const PAY_GREEN: Color = Color::Rgb(0x60, 0xb2, 0x46);
pub const SAVINGS_ORANGE: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const CHILLI_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
