// Top bar: tab headers with icons, clock on the right

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::nav::TabId;
use crate::ui::surface::PanelView;
use crate::ui::theme::{glow_color, TEXT_MUTED, TEXT_PRIMARY};

#[derive(Debug, Default)]
pub struct TabBarResponse {
    pub clicked: Option<TabId>,
    /// Tab the pointer is over this frame
    pub hovered: Option<TabId>,
}

pub fn tab_icon(tab: TabId) -> &'static str {
    match tab {
        TabId::Home => icons::HOUSE,
        TabId::Games => icons::GAME_CONTROLLER,
        TabId::Music => icons::MUSIC_NOTES,
        TabId::Video => icons::FILM_STRIP,
        TabId::Settings => icons::GEAR,
    }
}

pub fn tab_bar(
    ui: &mut Ui,
    tabs: impl IntoIterator<Item = TabId>,
    view: &PanelView,
    clock: &str,
    glow: f32,
) -> TabBarResponse {
    let mut response = TabBarResponse::default();
    ui.horizontal(|ui| {
        for tab in tabs {
            let active = view.is_panel_active(tab);
            let color = if active { glow_color(glow) } else { TEXT_PRIMARY };
            let text = RichText::new(format!("{} {}", tab_icon(tab), tab.label()))
                .size(18.0)
                .color(color);
            let btn = ui.add(
                egui::Button::new(text)
                    .min_size(egui::vec2(110.0, 36.0))
                    .selected(active),
            );
            if btn.clicked() {
                response.clicked = Some(tab);
            }
            if btn.hovered() {
                response.hovered = Some(tab);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(clock).size(18.0).color(TEXT_MUTED));
            ui.label(RichText::new(icons::CLOCK).color(TEXT_MUTED));
        });
    });
    response
}
