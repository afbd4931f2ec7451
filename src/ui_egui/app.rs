mod header;
mod lifecycle;
mod navigation;
mod shortcuts;

use std::time::Instant;

use rand::rngs::SmallRng;

use crate::models::view_state::ViewState;
use crate::services::animation::AnimationEngine;
use crate::services::config::AppConfig;
use crate::services::database::Database;
use crate::services::loader::CalendarLoader;
use crate::services::theme_controller::ThemeController;
use crate::ui_egui::theme::CalendarTheme;

pub struct CalendarApp {
    config: AppConfig,
    /// Local store for the theme preference
    database: Database,
    /// Month on screen; replaced, never mutated, on navigation
    view: ViewState,
    loader: CalendarLoader,
    theme_controller: ThemeController,
    animation: AnimationEngine,
    rng: SmallRng,
    /// When the current decorations were spawned
    animation_started: Instant,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    pending_theme_apply: bool,
    /// When the shown month was last requested, for auto refresh
    last_load: Instant,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
