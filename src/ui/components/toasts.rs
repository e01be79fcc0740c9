// Notification overlay

use std::time::Instant;

use eframe::egui::{self, Align2, FontId, Stroke};

use crate::notify::Toasts;
use crate::ui::theme::{ACCENT, BG_MID};

const STACK_SPACING: f32 = 56.0;

/// Toasts rest at the screen center, later ones stacked below
pub fn toast_center(screen: egui::Rect, offset: f32, index: usize) -> egui::Pos2 {
    egui::pos2(
        screen.center().x,
        screen.center().y + screen.height() * offset + index as f32 * STACK_SPACING,
    )
}

pub fn paint_toasts(ctx: &egui::Context, toasts: &Toasts, now: Instant) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("toasts"),
    ));

    for (i, toast) in toasts.iter().enumerate() {
        let Some(phase) = toasts.phase(toast, now) else {
            continue;
        };
        let center = toast_center(screen, phase.offset, i);
        let galley = painter.layout_no_wrap(
            toast.message.clone(),
            FontId::proportional(20.0),
            ACCENT.gamma_multiply(phase.opacity),
        );
        let rect = Align2::CENTER_CENTER
            .anchor_size(center, galley.size())
            .expand2(egui::vec2(24.0, 12.0));
        painter.rect(
            rect,
            8.0,
            BG_MID.gamma_multiply(phase.opacity),
            Stroke::new(2.0, ACCENT.gamma_multiply(phase.opacity)),
            egui::StrokeKind::Outside,
        );
        painter.galley(
            rect.center() - galley.size() / 2.0,
            galley,
            ACCENT,
        );
    }
}
