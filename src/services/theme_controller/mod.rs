// Theme controller
// Decides which seasonal theme is shown and whether the user may switch it off

use anyhow::Result;

use crate::models::theme::SeasonalTheme;
use crate::services::preferences::{PreferencesService, FORCE_DEFAULT_THEME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeController {
    /// Theme supplied by configuration at startup
    detected: SeasonalTheme,
    /// Theme currently on screen
    active: SeasonalTheme,
    prefers_default: bool,
    toggle_visible: bool,
}

impl ThemeController {
    /// Resolve the startup theme from the configured theme and the stored preference.
    ///
    /// A stored "prefer default" flag overrides any seasonal theme. The toggle
    /// is shown for seasonal themes; for the neutral theme it stays hidden unless
    /// the flag is set anyway, in which case it is shown but does nothing.
    pub fn initialize(detected: SeasonalTheme, preferences: &PreferencesService<'_>) -> Self {
        let prefers_default = preferences.prefers_default_theme().unwrap_or_else(|err| {
            log::warn!("Failed to read theme preference, assuming none: {:#}", err);
            false
        });
        Self::from_parts(detected, prefers_default)
    }

    pub fn from_parts(detected: SeasonalTheme, prefers_default: bool) -> Self {
        let active = if prefers_default && !detected.is_neutral() {
            SeasonalTheme::Default
        } else {
            detected
        };

        let toggle_visible = !detected.is_neutral() || prefers_default;

        Self {
            detected,
            active,
            prefers_default,
            toggle_visible,
        }
    }

    pub fn detected(&self) -> SeasonalTheme {
        self.detected
    }

    pub fn active(&self) -> SeasonalTheme {
        self.active
    }

    pub fn prefers_default(&self) -> bool {
        self.prefers_default
    }

    pub fn toggle_visible(&self) -> bool {
        self.toggle_visible
    }

    /// Whether clicking the toggle does anything
    pub fn toggle_enabled(&self) -> bool {
        !self.detected.is_neutral()
    }

    /// Theme the toggle would switch to
    pub fn toggle_target(&self) -> SeasonalTheme {
        if self.active.is_neutral() {
            self.detected
        } else {
            SeasonalTheme::Default
        }
    }

    /// Flip between the detected theme and the neutral theme, recording the choice.
    ///
    /// Returns the newly active theme. Decorations must be re-applied by the caller.
    pub fn toggle(&mut self, preferences: &PreferencesService<'_>) -> Result<SeasonalTheme> {
        if !self.toggle_enabled() {
            return Ok(self.active);
        }

        let next = self.toggle_target();
        self.active = next;
        self.prefers_default = next.is_neutral();
        log::info!("Theme switched to '{}'", next);

        if self.prefers_default {
            preferences.set_flag(FORCE_DEFAULT_THEME)?;
        } else {
            preferences.clear_flag(FORCE_DEFAULT_THEME)?;
        }

        Ok(next)
    }
}
