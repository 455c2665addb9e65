use ratatui::style::Color;

use crate::editing::validation::is_hex_color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub today: Color,
    pub weekday_header: Color,
    pub inactive_day: Color,
    pub table_header: Color,
    pub status_bar: Color,
    pub help_section: Color,
    pub warning: Color,
    /// Used when an event colour cannot be parsed.
    pub event_fallback: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            today: Color::Green,
            weekday_header: Color::Yellow,
            inactive_day: Color::DarkGray,
            table_header: Color::Yellow,
            status_bar: Color::White,
            help_section: Color::Yellow,
            warning: Color::LightRed,
            event_fallback: Color::Rgb(55, 136, 216),
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            selected_bg: Color::Rgb(60, 56, 54),
            today: Color::Rgb(184, 187, 38),
            weekday_header: Color::Rgb(254, 128, 25),
            inactive_day: Color::Rgb(146, 131, 116),
            table_header: Color::Rgb(250, 189, 47),
            status_bar: Color::Rgb(235, 219, 178),
            help_section: Color::Rgb(254, 128, 25),
            warning: Color::Rgb(251, 73, 52),
            event_fallback: Color::Rgb(131, 165, 152),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            selected_bg: Color::Rgb(59, 66, 82),
            today: Color::Rgb(163, 190, 140),
            weekday_header: Color::Rgb(235, 203, 139),
            inactive_day: Color::Rgb(76, 86, 106),
            table_header: Color::Rgb(235, 203, 139),
            status_bar: Color::Rgb(216, 222, 233),
            help_section: Color::Rgb(235, 203, 139),
            warning: Color::Rgb(191, 97, 106),
            event_fallback: Color::Rgb(129, 161, 193),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(139, 233, 253),
            selected_bg: Color::Rgb(68, 71, 90),
            today: Color::Rgb(80, 250, 123),
            weekday_header: Color::Rgb(241, 250, 140),
            inactive_day: Color::Rgb(98, 114, 164),
            table_header: Color::Rgb(189, 147, 249),
            status_bar: Color::Rgb(248, 248, 242),
            help_section: Color::Rgb(241, 250, 140),
            warning: Color::Rgb(255, 85, 85),
            event_fallback: Color::Rgb(255, 121, 198),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula"]
    }

    pub fn event_color(&self, value: &str) -> Color {
        parse_hex_color(value).unwrap_or(self.event_fallback)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

pub fn parse_hex_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if !is_hex_color(value) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&value[range], 16).ok();
    Some(Color::Rgb(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}
