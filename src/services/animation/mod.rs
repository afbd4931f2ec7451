//! Seasonal decoration engine.
//!
//! Holds the falling glyphs for the active theme. Every call to
//! [`AnimationEngine::apply_theme_animations`] throws the previous set away
//! and spawns a fresh one with randomized motion, so switching themes never
//! leaves stray decorations behind.

use std::f32::consts::TAU;

use rand::Rng;

use crate::models::theme::{AnimationProfile, FallAnimation, SeasonalTheme};

/// Seconds a decoration takes to cross the screen, lower bound
const MIN_DURATION_SECS: f32 = 8.0;
/// Extra random seconds on top of [`MIN_DURATION_SECS`]
const DURATION_SPREAD_SECS: f32 = 10.0;
const MIN_FONT_SCALE: f32 = 0.8;
const FONT_SCALE_SPREAD: f32 = 0.7;

/// One falling glyph
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub glyph: &'static str,
    pub class_name: &'static str,
    pub animation: FallAnimation,
    /// Horizontal start position, percent of the viewport width
    pub left_pct: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    /// Multiplier on the base glyph size
    pub font_scale: f32,
}

/// Where a decoration is at a given moment, in normalized viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationFrame {
    pub x: f32,
    pub y: f32,
    /// Radians
    pub rotation: f32,
}

impl Decoration {
    fn spawn<R: Rng>(profile: &AnimationProfile, rng: &mut R) -> Self {
        let duration_secs = MIN_DURATION_SECS + rng.random::<f32>() * DURATION_SPREAD_SECS;
        Self {
            glyph: profile.glyph,
            class_name: profile.class_name,
            animation: profile.animation,
            left_pct: rng.random::<f32>() * 100.0,
            duration_secs,
            delay_secs: rng.random::<f32>() * duration_secs,
            font_scale: MIN_FONT_SCALE + rng.random::<f32>() * FONT_SCALE_SPREAD,
        }
    }

    /// Position `elapsed_secs` after the decorations were spawned.
    ///
    /// `None` until the start delay has passed; afterwards the fall repeats
    /// every `duration_secs`. `y` runs from just above the top edge (-0.05)
    /// to just below the bottom (1.05).
    pub fn position_at(&self, elapsed_secs: f32) -> Option<DecorationFrame> {
        if elapsed_secs < self.delay_secs {
            return None;
        }

        let progress = ((elapsed_secs - self.delay_secs) % self.duration_secs) / self.duration_secs;
        let sway = self.animation.sway_amplitude() * (progress * TAU * 2.0).sin();

        Some(DecorationFrame {
            x: self.left_pct / 100.0 + sway,
            y: -0.05 + progress * 1.1,
            rotation: self.animation.turns_per_cycle() * progress * TAU,
        })
    }
}

#[derive(Debug, Default)]
pub struct AnimationEngine {
    theme: SeasonalTheme,
    decorations: Vec<Decoration>,
}

impl AnimationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear current decorations and spawn the set for `theme`.
    ///
    /// Themes without a profile end up with no decorations.
    pub fn apply_theme_animations<R: Rng>(&mut self, theme: SeasonalTheme, rng: &mut R) {
        self.decorations.clear();
        self.theme = theme;

        let Some(profile) = theme.animation_profile() else {
            log::debug!("No animation defined for theme '{}'", theme);
            return;
        };

        log::debug!(
            "Creating {} {} decorations using animation '{}'",
            profile.quantity,
            profile.class_name,
            profile.animation.as_str()
        );

        self.decorations
            .extend((0..profile.quantity).map(|_| Decoration::spawn(&profile, rng)));
    }

    pub fn theme(&self) -> SeasonalTheme {
        self.theme
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_spawns_configured_quantity() {
        let mut engine = AnimationEngine::new();
        engine.apply_theme_animations(SeasonalTheme::Halloween, &mut rng());

        assert_eq!(engine.decorations().len(), 25);
        assert!(engine.decorations().iter().all(|d| d.glyph == "🦇" && d.class_name == "bat"));
    }

    #[test]
    fn test_switching_to_default_clears_everything() {
        let mut rng = rng();
        let mut engine = AnimationEngine::new();
        engine.apply_theme_animations(SeasonalTheme::Winter, &mut rng);
        assert_eq!(engine.decorations().len(), 50);

        engine.apply_theme_animations(SeasonalTheme::Default, &mut rng);
        assert!(engine.is_empty());

        engine.apply_theme_animations(SeasonalTheme::Winter, &mut rng);
        assert_eq!(engine.decorations().len(), 50);
    }

    #[test]
    fn test_switching_themes_replaces_previous_set() {
        let mut rng = rng();
        let mut engine = AnimationEngine::new();
        engine.apply_theme_animations(SeasonalTheme::Winter, &mut rng);
        engine.apply_theme_animations(SeasonalTheme::Summer, &mut rng);

        assert_eq!(engine.decorations().len(), 20);
        assert!(engine.decorations().iter().all(|d| d.class_name == "sun"));
        assert_eq!(engine.theme(), SeasonalTheme::Summer);
    }

    #[test]
    fn test_randomized_parameters_stay_in_range() {
        let mut engine = AnimationEngine::new();
        engine.apply_theme_animations(SeasonalTheme::Spring, &mut rng());

        for decoration in engine.decorations() {
            assert!((0.0..100.0).contains(&decoration.left_pct));
            assert!((8.0..18.0).contains(&decoration.duration_secs));
            assert!(decoration.delay_secs >= 0.0 && decoration.delay_secs < decoration.duration_secs);
            assert!((0.8..1.5).contains(&decoration.font_scale));
        }
    }

    #[test]
    fn test_position_hidden_until_delay() {
        let decoration = Decoration {
            glyph: "❄️",
            class_name: "snowflake",
            animation: FallAnimation::Fall,
            left_pct: 50.0,
            duration_secs: 10.0,
            delay_secs: 2.0,
            font_scale: 1.0,
        };

        assert!(decoration.position_at(1.0).is_none());

        let start = decoration.position_at(2.0).unwrap();
        assert!((start.y + 0.05).abs() < 1e-6);
        assert!((start.x - 0.5).abs() < 1e-6);

        let halfway = decoration.position_at(7.0).unwrap();
        assert!((halfway.y - 0.5).abs() < 1e-4);

        // Loops back to the top after a full duration
        let looped = decoration.position_at(12.0).unwrap();
        assert!((looped.y + 0.05).abs() < 1e-4);
    }
}
