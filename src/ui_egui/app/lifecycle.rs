use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::CalendarApp;
use crate::models::view_state::ViewState;
use crate::services::animation::AnimationEngine;
use crate::services::config::{AppConfig, ConfigService};
use crate::services::database::Database;
use crate::services::fetcher::HttpEventFetcher;
use crate::services::loader::CalendarLoader;
use crate::services::preferences::PreferencesService;
use crate::services::theme_controller::ThemeController;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::decorations::DecorationOverlay;
use crate::ui_egui::views::month_view::MonthView;

/// Repaint interval while decorations are falling (~30 fps)
const DECORATION_FRAME: Duration = Duration::from_millis(33);

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        let database = initialize_database(&config)?;

        let detected = config.seasonal_theme();
        let theme_controller =
            ThemeController::initialize(detected, &PreferencesService::new(&database));
        log::info!(
            "Configured theme '{}', showing '{}'",
            theme_controller.detected(),
            theme_controller.active()
        );

        let fetcher = HttpEventFetcher::new(config.base_url.clone())?;
        let repaint_ctx = cc.egui_ctx.clone();
        let loader = CalendarLoader::new(Arc::new(fetcher))
            .with_completion_hook(move || repaint_ctx.request_repaint());

        let mut app = Self {
            config,
            database,
            view: ViewState::today(),
            loader,
            theme_controller,
            animation: AnimationEngine::new(),
            rng: SmallRng::from_os_rng(),
            animation_started: Instant::now(),
            active_theme: CalendarTheme::light(),
            pending_theme_apply: true,
            last_load: Instant::now(),
        };

        app.load_current();
        app.apply_theme_animations();
        app.apply_visuals(&cc.egui_ctx);
        Ok(app)
    }

    /// Request the shown month again
    pub(super) fn load_current(&mut self) {
        self.loader.load(self.view);
        self.last_load = Instant::now();
    }

    /// Respawn decorations for the active theme and schedule a palette update
    pub(super) fn apply_theme_animations(&mut self) {
        let theme = self.theme_controller.active();
        log::info!("Applying animations for theme '{}'", theme);
        self.animation.apply_theme_animations(theme, &mut self.rng);
        self.animation_started = Instant::now();
        self.pending_theme_apply = true;
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        self.active_theme = CalendarTheme::for_seasonal(self.theme_controller.active());
        self.active_theme.apply_to_context(ctx);
        self.pending_theme_apply = false;
    }

    fn refresh_if_due(&mut self, ctx: &egui::Context) {
        let Some(interval) = self.config.refresh_interval() else {
            return;
        };

        let elapsed = self.last_load.elapsed();
        if elapsed >= interval {
            log::info!("Auto refresh of {}", self.view.title());
            self.load_current();
            ctx.request_repaint_after(interval);
        } else {
            ctx.request_repaint_after(interval - elapsed);
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        if self.pending_theme_apply {
            self.apply_visuals(ctx);
        }

        self.loader.poll();
        self.refresh_if_due(ctx);

        self.render_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            MonthView::show(ui, self.loader.panel(), &self.active_theme);
        });

        let elapsed = self.animation_started.elapsed().as_secs_f32();
        DecorationOverlay::paint(ctx, &self.animation, elapsed);
        if !self.animation.is_empty() {
            ctx.request_repaint_after(DECORATION_FRAME);
        }
    }
}

fn initialize_database(config: &AppConfig) -> Result<Database> {
    let db_path = ConfigService::database_path(config);
    let db_path = db_path.to_string_lossy();

    let db = Database::new(&db_path)?;
    db.initialize_schema()
        .context("Failed to initialize preferences schema")?;
    log::info!("Using preferences database at {}", db_path);
    Ok(db)
}
