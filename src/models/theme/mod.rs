// Theme module
// Seasonal themes and the decoration profile attached to each one

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownThemeError(pub String);

/// Seasonal visual mode. `Default` is the neutral theme with no decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeasonalTheme {
    #[default]
    Default,
    Winter,
    Christmas,
    Valentines,
    StPatrick,
    Easter,
    Spring,
    Summer,
    CanadaDay,
    Autumn,
    Halloween,
}

impl SeasonalTheme {
    pub const ALL: [SeasonalTheme; 11] = [
        SeasonalTheme::Default,
        SeasonalTheme::Winter,
        SeasonalTheme::Christmas,
        SeasonalTheme::Valentines,
        SeasonalTheme::StPatrick,
        SeasonalTheme::Easter,
        SeasonalTheme::Spring,
        SeasonalTheme::Summer,
        SeasonalTheme::CanadaDay,
        SeasonalTheme::Autumn,
        SeasonalTheme::Halloween,
    ];

    /// Identifier used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonalTheme::Default => "default",
            SeasonalTheme::Winter => "winter",
            SeasonalTheme::Christmas => "christmas",
            SeasonalTheme::Valentines => "valentines",
            SeasonalTheme::StPatrick => "stpatrick",
            SeasonalTheme::Easter => "easter",
            SeasonalTheme::Spring => "spring",
            SeasonalTheme::Summer => "summer",
            SeasonalTheme::CanadaDay => "canadaday",
            SeasonalTheme::Autumn => "autumn",
            SeasonalTheme::Halloween => "halloween",
        }
    }

    /// Human readable name for buttons and tooltips
    pub fn display_name(&self) -> &'static str {
        match self {
            SeasonalTheme::Default => "Default",
            SeasonalTheme::Winter => "Winter",
            SeasonalTheme::Christmas => "Christmas",
            SeasonalTheme::Valentines => "Valentine's Day",
            SeasonalTheme::StPatrick => "St. Patrick's Day",
            SeasonalTheme::Easter => "Easter",
            SeasonalTheme::Spring => "Spring",
            SeasonalTheme::Summer => "Summer",
            SeasonalTheme::CanadaDay => "Canada Day",
            SeasonalTheme::Autumn => "Autumn",
            SeasonalTheme::Halloween => "Halloween",
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, SeasonalTheme::Default)
    }

    /// Decoration profile for this theme, `None` for the neutral theme
    pub fn animation_profile(&self) -> Option<AnimationProfile> {
        let profile = match self {
            SeasonalTheme::Default => return None,
            SeasonalTheme::Winter | SeasonalTheme::Christmas => {
                AnimationProfile::new("❄️", "snowflake", FallAnimation::Fall, 50)
            }
            SeasonalTheme::Valentines => {
                AnimationProfile::new("❤️", "heart", FallAnimation::FallHeart, 30)
            }
            SeasonalTheme::StPatrick => {
                AnimationProfile::new("☘️", "shamrock", FallAnimation::FallShamrock, 40)
            }
            SeasonalTheme::Easter => {
                AnimationProfile::new("🥚", "easter-egg", FallAnimation::FallEgg, 30)
            }
            SeasonalTheme::Spring => {
                AnimationProfile::new("🌸", "flower", FallAnimation::FallFlower, 40)
            }
            SeasonalTheme::Summer => AnimationProfile::new("☀️", "sun", FallAnimation::FallSun, 20),
            SeasonalTheme::CanadaDay => {
                AnimationProfile::new("🍁", "maple-leaf", FallAnimation::FallLeaf, 30)
            }
            SeasonalTheme::Autumn => {
                AnimationProfile::new("🍂", "autumn-leaf", FallAnimation::FallLeaf, 40)
            }
            SeasonalTheme::Halloween => AnimationProfile::new("🦇", "bat", FallAnimation::FallBat, 25),
        };
        Some(profile)
    }

    /// Accent color (r, g, b) used to tint headers and today's cell
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        match self {
            SeasonalTheme::Default => (100, 150, 255),
            SeasonalTheme::Winter => (120, 170, 220),
            SeasonalTheme::Christmas => (200, 40, 50),
            SeasonalTheme::Valentines => (220, 80, 120),
            SeasonalTheme::StPatrick => (40, 150, 70),
            SeasonalTheme::Easter => (180, 140, 220),
            SeasonalTheme::Spring => (235, 140, 180),
            SeasonalTheme::Summer => (245, 180, 40),
            SeasonalTheme::CanadaDay => (215, 30, 40),
            SeasonalTheme::Autumn => (205, 110, 40),
            SeasonalTheme::Halloween => (240, 120, 20),
        }
    }
}

impl fmt::Display for SeasonalTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonalTheme {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|theme| theme.as_str() == needle)
            .ok_or_else(|| UnknownThemeError(s.to_string()))
    }
}

/// Named motion curve for a falling decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallAnimation {
    Fall,
    FallHeart,
    FallShamrock,
    FallEgg,
    FallFlower,
    FallSun,
    FallLeaf,
    FallBat,
}

impl FallAnimation {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallAnimation::Fall => "fall",
            FallAnimation::FallHeart => "fall-heart",
            FallAnimation::FallShamrock => "fall-shamrock",
            FallAnimation::FallEgg => "fall-egg",
            FallAnimation::FallFlower => "fall-flower",
            FallAnimation::FallSun => "fall-sun",
            FallAnimation::FallLeaf => "fall-leaf",
            FallAnimation::FallBat => "fall-bat",
        }
    }

    /// Horizontal sway as a fraction of the viewport width
    pub fn sway_amplitude(&self) -> f32 {
        match self {
            FallAnimation::Fall => 0.02,
            FallAnimation::FallHeart => 0.03,
            FallAnimation::FallShamrock => 0.03,
            FallAnimation::FallEgg => 0.01,
            FallAnimation::FallFlower => 0.04,
            FallAnimation::FallSun => 0.0,
            FallAnimation::FallLeaf => 0.05,
            FallAnimation::FallBat => 0.08,
        }
    }

    /// Full turns made over one fall
    pub fn turns_per_cycle(&self) -> f32 {
        match self {
            FallAnimation::Fall => 1.0,
            FallAnimation::FallHeart => 0.0,
            FallAnimation::FallShamrock => 0.5,
            FallAnimation::FallEgg => 0.25,
            FallAnimation::FallFlower => 1.0,
            FallAnimation::FallSun => 0.5,
            FallAnimation::FallLeaf => 1.5,
            FallAnimation::FallBat => 0.0,
        }
    }
}

/// Glyph, style class, motion and count of decorations for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationProfile {
    pub glyph: &'static str,
    pub class_name: &'static str,
    pub animation: FallAnimation,
    pub quantity: usize,
}

impl AnimationProfile {
    const fn new(
        glyph: &'static str,
        class_name: &'static str,
        animation: FallAnimation,
        quantity: usize,
    ) -> Self {
        Self {
            glyph,
            class_name,
            animation,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SeasonalTheme::Winter, "snowflake", "fall", 50)]
    #[test_case(SeasonalTheme::Christmas, "snowflake", "fall", 50)]
    #[test_case(SeasonalTheme::Valentines, "heart", "fall-heart", 30)]
    #[test_case(SeasonalTheme::StPatrick, "shamrock", "fall-shamrock", 40)]
    #[test_case(SeasonalTheme::Easter, "easter-egg", "fall-egg", 30)]
    #[test_case(SeasonalTheme::Spring, "flower", "fall-flower", 40)]
    #[test_case(SeasonalTheme::Summer, "sun", "fall-sun", 20)]
    #[test_case(SeasonalTheme::CanadaDay, "maple-leaf", "fall-leaf", 30)]
    #[test_case(SeasonalTheme::Autumn, "autumn-leaf", "fall-leaf", 40)]
    #[test_case(SeasonalTheme::Halloween, "bat", "fall-bat", 25)]
    fn test_animation_profiles(theme: SeasonalTheme, class: &str, animation: &str, quantity: usize) {
        let profile = theme.animation_profile().expect("seasonal theme has a profile");
        assert_eq!(profile.class_name, class);
        assert_eq!(profile.animation.as_str(), animation);
        assert_eq!(profile.quantity, quantity);
    }

    #[test]
    fn test_default_theme_has_no_profile() {
        assert!(SeasonalTheme::Default.animation_profile().is_none());
        assert!(SeasonalTheme::Default.is_neutral());
    }

    #[test]
    fn test_parse_round_trips_every_identifier() {
        for theme in SeasonalTheme::ALL {
            assert_eq!(theme.as_str().parse::<SeasonalTheme>(), Ok(theme));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Halloween ".parse::<SeasonalTheme>(), Ok(SeasonalTheme::Halloween));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "mardigras".parse::<SeasonalTheme>().unwrap_err();
        assert_eq!(err, UnknownThemeError("mardigras".to_string()));
    }
}
