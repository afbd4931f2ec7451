use super::CalendarApp;
use crate::models::view_state::ViewState;
use crate::services::preferences::PreferencesService;

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.view = self.view.previous();
        self.load_current();
    }

    pub(super) fn navigate_next(&mut self) {
        self.view = self.view.next();
        self.load_current();
    }

    pub(super) fn jump_to_today(&mut self) {
        self.view = ViewState::today();
        self.load_current();
    }

    pub(super) fn toggle_theme(&mut self) {
        let preferences = PreferencesService::new(&self.database);
        if let Err(e) = self.theme_controller.toggle(&preferences) {
            log::error!("Failed to save theme preference: {:#}", e);
        }
        self.apply_theme_animations();
    }
}
