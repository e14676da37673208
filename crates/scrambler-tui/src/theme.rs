use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub scramble: Color,
    pub revealed: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            scramble: Color::Rgb(0xa9, 0xb6, 0x65),
            revealed: Color::Rgb(0xd8, 0xa6, 0x57),
            accent: Color::Rgb(0x7d, 0xae, 0xa3),
        }
    }
}

impl Theme {
    /// Plain terminal-default palette for low-color environments
    fn plain() -> Self {
        Self {
            bg0: Color::Reset,
            bg1: Color::Reset,
            fg0: Color::White,
            fg1: Color::Gray,
            grey: Color::DarkGray,
            scramble: Color::Green,
            revealed: Color::Yellow,
            accent: Color::Cyan,
        }
    }
}

/// Load a theme by name, falling back to the default
pub fn load_theme(name: &str) -> Theme {
    match name {
        "plain" => Theme::plain(),
        _ => Theme::default(),
    }
}
