// Item card with category icon, title and action buttons

use eframe::egui::{self, RichText, Sense, Ui, UiBuilder};
use egui_phosphor::regular as icons;

use crate::nav::{ActionKind, Item, ItemCategory};
use crate::ui::theme::{card_frame, glow_color, ACCENT, TEXT_PRIMARY};

pub const CARD_WIDTH: f32 = 200.0;

#[derive(Debug, Default)]
pub struct CardResponse {
    /// Card body clicked (not one of its buttons)
    pub clicked: bool,
    pub action: Option<ActionKind>,
}

fn category_icon(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Game => icons::GAME_CONTROLLER,
        ItemCategory::Music => icons::MUSIC_NOTE,
        ItemCategory::Video => icons::FILM_SLATE,
        ItemCategory::Setting => icons::SLIDERS_HORIZONTAL,
    }
}

fn action_icon(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Play => icons::PLAY,
        ActionKind::Copy => icons::COPY,
        ActionKind::Delete => icons::TRASH,
    }
}

pub fn item_card(ui: &mut Ui, item: &Item, selected: bool, glow: f32) -> CardResponse {
    let mut response = CardResponse::default();
    // Children sit above the scope's click sense
    let inner = ui.scope_builder(UiBuilder::new().sense(Sense::click()), |ui| {
        card_frame(selected).show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical_centered(|ui| {
                let icon_color = if selected { glow_color(glow) } else { ACCENT };
                ui.label(
                    RichText::new(category_icon(item.category))
                        .size(40.0)
                        .color(icon_color),
                );
                ui.label(RichText::new(&item.title).size(16.0).color(TEXT_PRIMARY));

                let actions = item.category.actions();
                if !actions.is_empty() {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        for action in actions {
                            let btn = ui
                                .button(action_icon(*action))
                                .on_hover_text(action.label());
                            if btn.clicked() {
                                response.action = Some(*action);
                            }
                        }
                    });
                }
            });
        });
    });

    if response.action.is_none() && inner.response.clicked() {
        response.clicked = true;
    }
    if inner.response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
