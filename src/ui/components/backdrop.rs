// Background layer: drifting glow and sparkles

use std::time::Instant;

use eframe::egui::{self, Color32};

use crate::effects::{sparkle_intensity, Effects};
use crate::ui::theme::{ACCENT, BG_DARK};

const SPARKLE_RADIUS: f32 = 3.0;

pub fn paint_backdrop(ctx: &egui::Context, effects: &Effects, now: Instant) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::background());
    painter.rect_filled(screen, 0.0, BG_DARK);

    if let Some(backdrop) = &effects.backdrop {
        let (x, y) = backdrop.position();
        let center = egui::pos2(
            screen.left() + screen.width() * x / 100.0,
            screen.top() + screen.height() * y / 100.0,
        );
        let radius = screen.width().max(screen.height()) * 0.4;
        // Concentric rings approximate a radial gradient
        for step in (1..=8).rev() {
            let t = step as f32 / 8.0;
            painter.circle_filled(
                center,
                radius * t,
                ACCENT.gamma_multiply(0.02 * (1.0 - t) + 0.005),
            );
        }
    }

    if let Some(sparkles) = &effects.sparkles {
        for sparkle in sparkles.iter() {
            let Some(k) = sparkle_intensity(now.saturating_duration_since(sparkle.born)) else {
                continue;
            };
            let pos = egui::pos2(
                screen.left() + screen.width() * sparkle.x,
                screen.top() + screen.height() * sparkle.y,
            );
            painter.circle_filled(
                pos,
                SPARKLE_RADIUS * k,
                Color32::from_rgb(0xcc, 0xff, 0xcc).gamma_multiply(k),
            );
        }
    }
}
