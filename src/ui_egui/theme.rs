//! Theme module for the egui calendar window
//!
//! Defines the CalendarTheme color set and derives it from the active
//! seasonal theme.

use egui::Color32;

use crate::models::theme::SeasonalTheme;

/// A calendar theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background for padding cells outside the month
    pub empty_background: Color32,

    /// Weekday header background color
    pub header_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Seasonal accent, used for today's border and the header text
    pub accent: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (event lines)
    pub text_secondary: Color32,

    /// Color for load errors
    pub error_text: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            empty_background: Color32::from_rgb(235, 235, 238),
            header_background: Color32::from_rgb(225, 230, 240),
            today_background: Color32::from_rgb(230, 240, 255),
            accent: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            error_text: Color32::from_rgb(200, 30, 30),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            empty_background: Color32::from_rgb(34, 34, 36),
            header_background: Color32::from_rgb(50, 50, 56),
            today_background: Color32::from_rgb(50, 60, 80),
            accent: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            error_text: Color32::from_rgb(255, 120, 120),
        }
    }

    /// Colors for a seasonal theme: Halloween is dark, everything else light,
    /// tinted with the theme's accent
    pub fn for_seasonal(theme: SeasonalTheme) -> Self {
        let mut base = match theme {
            SeasonalTheme::Halloween => Self::dark(),
            _ => Self::light(),
        };

        let (r, g, b) = theme.accent_rgb();
        base.accent = Color32::from_rgb(r, g, b);
        if !theme.is_neutral() {
            base.header_background = blend(base.header_background, base.accent, 0.25);
            base.today_background = blend(base.day_background, base.accent, 0.2);
        }
        base
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;
        visuals.selection.bg_fill = self.accent;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

fn blend(base: Color32, tint: Color32, amount: f32) -> Color32 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
    Color32::from_rgb(
        mix(base.r(), tint.r()),
        mix(base.g(), tint.g()),
        mix(base.b(), tint.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_plain_light() {
        let theme = CalendarTheme::for_seasonal(SeasonalTheme::Default);
        assert_eq!(theme, CalendarTheme::light());
    }

    #[test]
    fn test_halloween_is_dark() {
        assert!(CalendarTheme::for_seasonal(SeasonalTheme::Halloween).is_dark);
        assert!(!CalendarTheme::for_seasonal(SeasonalTheme::Spring).is_dark);
    }

    #[test]
    fn test_seasonal_accent_applied() {
        let theme = CalendarTheme::for_seasonal(SeasonalTheme::StPatrick);
        assert_eq!(theme.accent, Color32::from_rgb(40, 150, 70));
        assert_ne!(theme.header_background, CalendarTheme::light().header_background);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }
}
