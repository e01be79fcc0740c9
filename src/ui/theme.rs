//! Green-on-black console palette

use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, Stroke, Visuals};

pub const BG_DARK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
pub const BG_MID: Color32 = Color32::from_rgb(0x0a, 0x14, 0x0a);
pub const BG_LIGHT: Color32 = Color32::from_rgb(0x14, 0x28, 0x14);
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0xff, 0x00);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(0x00, 0x80, 0x00);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xe6, 0xff, 0xe6);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x7a, 0x99, 0x7a);
pub const SELECTION_BG: Color32 = Color32::from_rgb(0x0d, 0x33, 0x0d);

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_MID;
    visuals.extreme_bg_color = BG_DARK;
    visuals.selection.bg_fill = SELECTION_BG;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT;

    visuals.widgets.noninteractive.bg_fill = BG_MID;
    visuals.widgets.noninteractive.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.inactive.bg_fill = BG_LIGHT;
    visuals.widgets.inactive.weak_bg_fill = BG_LIGHT;
    visuals.widgets.inactive.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.hovered.bg_fill = ACCENT_DIM;
    visuals.widgets.hovered.weak_bg_fill = ACCENT_DIM;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke.color = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.weak_bg_fill = ACCENT;
    visuals.widgets.active.fg_stroke.color = BG_DARK;
    ctx.set_visuals(visuals);
}

/// Blend the accent toward white by `glow` (0..1)
pub fn glow_color(glow: f32) -> Color32 {
    let g = glow.clamp(0.0, 1.0);
    let lift = (g * 160.0) as u8;
    Color32::from_rgb(lift, 0xff, lift)
}

pub fn card_frame(selected: bool) -> Frame {
    Frame::NONE
        .fill(if selected { SELECTION_BG } else { BG_MID })
        .stroke(Stroke::new(
            if selected { 2.0 } else { 1.0 },
            if selected { ACCENT } else { BG_LIGHT },
        ))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
}

pub fn bar_frame() -> Frame {
    Frame::NONE
        .fill(BG_MID)
        .stroke(Stroke::new(1.0, BG_LIGHT))
        .inner_margin(Margin::symmetric(12, 6))
}
