//! eframe::App implementation for DashApp

use std::time::{Duration, Instant};

use eframe::egui;
use tracing::warn;

use super::DashApp;
use crate::ui::components::{item_card, paint_backdrop, paint_toasts, tab_bar};
use crate::ui::theme::{bar_frame, TEXT_MUTED};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

impl eframe::App for DashApp {
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        if !raw_input.focused {
            return;
        }
        self.handle_keyboard(raw_input);
        self.handle_gamepads();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.effects.tick(now);
        self.nav.notifier_mut().prune(now);
        let glow = self.effects.glow(now);

        paint_backdrop(ctx, &self.effects, now);

        egui::TopBottomPanel::top("tab_bar")
            .frame(bar_frame())
            .show(ctx, |ui| {
                let tabs: Vec<_> = self.nav.catalog().tabs().collect();
                let bar = tab_bar(
                    ui,
                    tabs,
                    self.nav.surface(),
                    self.effects.clock.text(),
                    glow,
                );
                self.track_hover(bar.hovered);
                if let Some(tab) = bar.clicked {
                    if let Err(e) = self.nav.switch_tab(tab) {
                        warn!("Tab switch rejected: {}", e);
                    }
                }
            });

        egui::TopBottomPanel::bottom("hint_bar")
            .frame(bar_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let selected = self
                        .nav
                        .selected()
                        .map(|item| item.title.as_str())
                        .unwrap_or("Nothing selected");
                    ui.label(egui::RichText::new(selected).color(TEXT_MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new("LB/RB tabs   A select   B back").color(TEXT_MUTED),
                        );
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(16)))
            .show(ctx, |ui| {
                let order: Vec<_> = self.nav.catalog().tabs().collect();
                let tab = self
                    .nav
                    .surface()
                    .visible_panel(order)
                    .unwrap_or(self.nav.active_tab());
                let items = self.nav.catalog().items(tab).to_vec();
                if items.is_empty() {
                    ui.label(egui::RichText::new("Nothing here yet").color(TEXT_MUTED));
                    return;
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
                        for item in &items {
                            let selected = self.nav.surface().is_item_selected(&item.id);
                            let card = ui
                                .push_id(item.id.as_str(), |ui| item_card(ui, item, selected, glow))
                                .inner;
                            if let Some(action) = card.action {
                                self.nav.activate_action(action);
                            } else if card.clicked {
                                if let Err(e) = self.nav.select_item(&item.id) {
                                    warn!("Selection rejected: {}", e);
                                }
                            }
                        }
                    });
                });
            });

        paint_toasts(ctx, self.nav.notifier(), now);

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
