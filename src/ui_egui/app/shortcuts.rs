use super::CalendarApp;

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // Leave arrow keys alone while a text field has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        let (previous, next, today, reload) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.modifiers.ctrl && i.key_pressed(egui::Key::T),
                i.modifiers.ctrl && i.key_pressed(egui::Key::R),
            )
        });

        if previous {
            self.navigate_previous();
        }
        if next {
            self.navigate_next();
        }
        if today {
            self.jump_to_today();
        }
        if reload {
            self.load_current();
        }
    }
}
