use ratatui::style::Color;
use taskflow_core::Priority;

/// Color palette for the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub(super) dark: bool,
    pub(super) fg: Color,
    pub(super) muted: Color,
    pub(super) accent: Color,
    pub(super) highlight_bg: Color,
    pub(super) highlight_fg: Color,
    pub(super) danger: Color,
    pub(super) success: Color,
}

impl Theme {
    /// Palette for dark terminals.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            dark: true,
            fg: Color::White,
            muted: Color::DarkGray,
            accent: Color::Magenta,
            highlight_bg: Color::Magenta,
            highlight_fg: Color::Black,
            danger: Color::Red,
            success: Color::Green,
        }
    }

    /// Palette for light terminals.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            dark: false,
            fg: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            danger: Color::Red,
            success: Color::Green,
        }
    }

    /// The other palette; used by the runtime theme toggle.
    #[must_use]
    pub(super) const fn toggled(self) -> Self {
        if self.dark { Self::light() } else { Self::dark() }
    }

    /// Tag color for a priority level, shared by both palettes.
    pub(super) const fn priority_color(priority: Priority) -> Color {
        match priority {
            Priority::Low => Color::Green,
            Priority::Medium => Color::Yellow,
            Priority::High => Color::Red,
        }
    }
}
