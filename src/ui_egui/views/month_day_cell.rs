//! Day cell rendering for the month view.
//!
//! Paints the day number and one bar per event, with the event's details
//! in a tooltip when hovered.

use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::MonthView;
use crate::services::month_grid::DayCell;
use crate::ui_egui::theme::CalendarTheme;

const DAY_NUMBER_HEIGHT: f32 = 24.0;
const EVENT_BAR_HEIGHT: f32 = 16.0;
const EVENT_BAR_GAP: f32 = 2.0;

impl MonthView {
    /// Truncate text to fit within a given pixel width, using binary search
    /// and appending "…" when truncation is needed.
    pub(super) fn truncate_single_line_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &egui::FontId,
        color: Color32,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                color,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        char_boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = char_boundaries.len().saturating_sub(1);

        while low < high {
            let mid = (low + high).div_ceil(2);
            let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);

            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid - 1;
            }
        }

        format!("{}{}", &text[..char_boundaries[low]], ellipsis)
    }

    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &DayCell,
        is_today: bool,
        size: Vec2,
        theme: &CalendarTheme,
    ) {
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        let bg_color = if is_today {
            theme.today_background
        } else {
            theme.day_background
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        let border = if is_today {
            Stroke::new(2.0, theme.accent)
        } else {
            Stroke::new(1.0, theme.day_border)
        };
        ui.painter().rect_stroke(rect, 2.0, border);

        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 5.0),
            egui::Align2::LEFT_TOP,
            cell.day.to_string(),
            egui::FontId::proportional(14.0),
            if is_today { theme.accent } else { theme.text_primary },
        );

        // Bars that fit below the day number; the last slot becomes "+N more" on overflow
        let usable = (rect.height() - DAY_NUMBER_HEIGHT - 4.0).max(0.0);
        let slots = (usable / (EVENT_BAR_HEIGHT + EVENT_BAR_GAP)).floor() as usize;
        let overflow = cell.events.len() > slots;
        let shown = if overflow { slots.saturating_sub(1) } else { cell.events.len() };

        let font_id = egui::FontId::proportional(11.0);
        let bar_fill = theme.accent.gamma_multiply(0.85);
        let mut hitboxes: Vec<(Rect, &str)> = Vec::with_capacity(shown);
        let mut y = rect.top() + DAY_NUMBER_HEIGHT;

        for entry in cell.events.iter().take(shown) {
            let bar = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, y),
                Vec2::new(rect.width() - 6.0, EVENT_BAR_HEIGHT),
            );
            ui.painter().rect_filled(bar, 2.0, bar_fill);

            let label = Self::truncate_single_line_to_width(
                ui,
                &entry.label(),
                &font_id,
                Color32::WHITE,
                bar.width() - 6.0,
            );
            ui.painter().text(
                Pos2::new(bar.left() + 3.0, bar.center().y),
                egui::Align2::LEFT_CENTER,
                label,
                font_id.clone(),
                Color32::WHITE,
            );

            hitboxes.push((bar, entry.tooltip.as_str()));
            y += EVENT_BAR_HEIGHT + EVENT_BAR_GAP;
        }

        if overflow {
            let hidden = cell.events.len() - shown;
            ui.painter().text(
                Pos2::new(rect.left() + 5.0, y + EVENT_BAR_HEIGHT / 2.0),
                egui::Align2::LEFT_CENTER,
                format!("+{} more", hidden),
                font_id,
                theme.text_secondary,
            );
        }

        if !response.hovered() {
            return;
        }

        let pointer = ui.input(|i| i.pointer.hover_pos());
        let hovered_tooltip = pointer.and_then(|pos| {
            hitboxes
                .iter()
                .find(|(hit, _)| hit.contains(pos))
                .map(|(hit, tooltip)| (*hit, *tooltip))
        });

        if let Some((hit, tooltip)) = hovered_tooltip {
            ui.painter().rect_stroke(
                hit.expand(1.0),
                3.0,
                Stroke::new(2.0, Color32::from_rgba_unmultiplied(255, 255, 255, 180)),
            );
            let tooltip = tooltip.to_string();
            response.on_hover_ui_at_pointer(|ui| {
                ui.label(tooltip);
            });
        } else if overflow {
            let all: Vec<String> = cell.events.iter().map(|entry| entry.label()).collect();
            response.on_hover_text(all.join("\n"));
        }
    }
}
