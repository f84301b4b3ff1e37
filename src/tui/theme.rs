//! Colors shared by the dashboard components

use iocraft::prelude::Color;

use crate::notify::NotificationKind;
use crate::types::Category;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Notification colors (same as the console notifier)
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
    pub link: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            info: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            id_color: Color::Cyan,
            link: Color::Blue,
        }
    }
}

impl Theme {
    pub fn notification_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Info => self.info,
            NotificationKind::Success => self.success,
            NotificationKind::Warning => self.warning,
            NotificationKind::Error => self.error,
        }
    }

    /// Color for a category name; unknown names render dimmed
    pub fn category_color(&self, name: &str) -> Color {
        match name.parse::<Category>() {
            Ok(Category::Technology) => Color::Blue,
            Ok(Category::Health) => Color::Green,
            Ok(Category::Travel) => Color::Cyan,
            Ok(Category::Food) => Color::Yellow,
            Ok(Category::Education) => Color::Magenta,
            Ok(Category::Fitness) => Color::Red,
            Ok(Category::Fashion) => Color::Rgb {
                r: 215,
                g: 95,
                b: 175,
            },
            Ok(Category::Business) => Color::White,
            Err(_) => self.text_dimmed,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_color_ignores_case_and_unknowns() {
        let t = theme();
        assert_eq!(t.category_color("food"), t.category_color("Food"));
        assert_eq!(t.category_color("Gardening"), t.text_dimmed);
    }

    #[test]
    fn test_notification_colors() {
        let t = theme();
        assert_eq!(t.notification_color(NotificationKind::Error), Color::Red);
        assert_eq!(t.notification_color(NotificationKind::Success), Color::Green);
    }
}
