//! Seasonal decoration overlay.
//!
//! Paints the animation engine's decorations on a foreground layer above the
//! calendar so they never take input.

use egui::epaint::TextShape;
use egui::{Color32, FontId, LayerId, Order, Pos2};

use crate::services::animation::AnimationEngine;

/// Glyph size before each decoration's own scale
const BASE_GLYPH_SIZE: f32 = 20.0;

pub struct DecorationOverlay;

impl DecorationOverlay {
    /// Paint every visible decoration `elapsed_secs` after they were spawned.
    /// Returns the number painted.
    pub fn paint(ctx: &egui::Context, engine: &AnimationEngine, elapsed_secs: f32) -> usize {
        if engine.is_empty() {
            return 0;
        }

        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, egui::Id::new("seasonal_decorations")));
        let mut painted = 0;

        for decoration in engine.decorations() {
            let Some(frame) = decoration.position_at(elapsed_secs) else {
                continue;
            };

            let pos = Pos2::new(
                screen.left() + frame.x * screen.width(),
                screen.top() + frame.y * screen.height(),
            );
            let galley = painter.layout_no_wrap(
                decoration.glyph.to_string(),
                FontId::proportional(BASE_GLYPH_SIZE * decoration.font_scale),
                Color32::WHITE,
            );
            painter.add(TextShape::new(pos, galley, Color32::WHITE).with_angle(frame.rotation));
            painted += 1;
        }

        painted
    }
}
