use chrono::Local;
use egui::{Margin, Sense, Stroke, Vec2};

use crate::services::loader::GridPanel;
use crate::services::month_grid::{GridCell, MonthGrid};
use crate::ui_egui::theme::CalendarTheme;

/// Height of the weekday header row
const HEADER_HEIGHT: f32 = 30.0;
/// Smallest height a week row may shrink to
const MIN_ROW_HEIGHT: f32 = 60.0;
const SPACING: f32 = 2.0;

pub struct MonthView;

impl MonthView {
    /// Draw the grid area: loading placeholder, or the month with an optional error banner
    pub fn show(ui: &mut egui::Ui, panel: &GridPanel, theme: &CalendarTheme) {
        match panel {
            GridPanel::Loading { .. } => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Loading events...")
                            .size(16.0)
                            .color(theme.text_secondary),
                    );
                });
            }
            GridPanel::Ready { grid, error } => {
                if let Some(message) = error {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(message.as_str())
                                .color(theme.error_text)
                                .strong(),
                        );
                    });
                    ui.add_space(4.0);
                }
                Self::show_grid(ui, grid, theme);
            }
        }
    }

    fn show_grid(ui: &mut egui::Ui, grid: &MonthGrid, theme: &CalendarTheme) {
        let today = Local::now().date_naive();
        let total_spacing = SPACING * 6.0; // 6 gaps between 7 columns
        let col_width = ((ui.available_width() - total_spacing) / 7.0).max(20.0);

        egui::Grid::new("month_header_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for day in grid.weekday_headers {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(theme.header_background)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, theme.day_border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |cell_ui| {
                                    cell_ui.centered_and_justified(|label_ui| {
                                        label_ui.label(
                                            egui::RichText::new(day)
                                                .size(14.0)
                                                .color(theme.text_primary)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });

        ui.add_space(SPACING);

        let rows = grid.num_rows().max(1) as f32;
        let row_height =
            ((ui.available_height() - SPACING * (rows - 1.0)) / rows).max(MIN_ROW_HEIGHT);

        egui::Grid::new("month_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for row in grid.rows() {
                    for cell in row {
                        let size = Vec2::new(col_width, row_height);
                        match cell {
                            GridCell::Blank => Self::render_blank_cell(ui, size, theme),
                            GridCell::Day(day) => {
                                let is_today = day.date == today;
                                Self::render_day_cell(ui, day, is_today, size, theme);
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn render_blank_cell(ui: &mut egui::Ui, size: Vec2, theme: &CalendarTheme) {
        let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
        ui.painter().rect_filled(rect, 2.0, theme.empty_background);
    }
}
