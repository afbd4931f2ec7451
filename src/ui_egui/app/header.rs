use egui::RichText;

use super::CalendarApp;

impl CalendarApp {
    /// Month title with navigation on the left and the theme toggle on the right
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let mut go_previous = false;
        let mut go_next = false;
        let mut go_today = false;
        let mut toggle_theme = false;

        let title = self.loader.panel().view().title();
        let toggle_visible = self.theme_controller.toggle_visible();
        let toggle_target = self.theme_controller.toggle_target();

        egui::TopBottomPanel::top("calendar_header")
            .exact_height(44.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    go_previous = ui.button("◀").on_hover_text("Previous month").clicked();
                    ui.add_sized(
                        [200.0, 28.0],
                        egui::Label::new(RichText::new(title).size(20.0).strong()),
                    );
                    go_next = ui.button("▶").on_hover_text("Next month").clicked();
                    ui.add_space(8.0);
                    go_today = ui.button("Today").on_hover_text("Ctrl+T").clicked();

                    if toggle_visible {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            toggle_theme = ui
                                .button(format!("Switch to {} theme", toggle_target.display_name()))
                                .clicked();
                        });
                    }
                });
            });

        if go_previous {
            self.navigate_previous();
        }
        if go_next {
            self.navigate_next();
        }
        if go_today {
            self.jump_to_today();
        }
        if toggle_theme {
            self.toggle_theme();
        }
    }
}
