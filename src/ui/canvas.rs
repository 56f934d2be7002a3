//! Central canvas UI: the map, hover detection and the hover label.

use crate::geo::{self, MapProjection, World};
use crate::state::{AppState, HoverChange};
use eframe::egui::{self, Align2, Color32, FontId, Painter, Rect, Sense, Vec2};

const BACKGROUND: Color32 = Color32::WHITE;
const LABEL_COLOR: Color32 = Color32::BLACK;
const LABEL_OFFSET: Vec2 = Vec2::new(10.0, 10.0);
const LABEL_SIZE: f32 = 24.0;

/// Renders the map canvas and refreshes the hover selection.
pub fn render_canvas(ctx: &egui::Context, state: &mut AppState, world: &World) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, Sense::hover());
            let rect = response.rect;

            painter.rect_filled(rect, 0.0, BACKGROUND);

            let projection = MapProjection::from_view(&state.view_state, rect);

            let pointer = ui
                .input(|i| i.pointer.hover_pos())
                .filter(|pos| rect.contains(*pos));
            update_hover(state, world, &projection, pointer);

            geo::render_world(&painter, world, &projection, state.hover.current());

            draw_hover_label(&painter, &rect, state.hover.label(world));
        });
}

/// Hit-tests the pointer and logs when the hovered country changes.
fn update_hover(
    state: &mut AppState,
    world: &World,
    projection: &MapProjection,
    pointer: Option<egui::Pos2>,
) {
    let hit =
        pointer.and_then(|pos| geo::country_at_screen_pos(world.countries(), projection, pos));

    match state.hover.update(hit) {
        HoverChange::Entered(index) => {
            if let Some(country) = world.country_at(index) {
                log::info!(
                    "Hovering {} ({}, {})",
                    country.name,
                    country.code,
                    country.continent
                );
            }
        }
        HoverChange::Cleared => log::debug!("Hover cleared"),
        HoverChange::Unchanged => {}
    }
}

fn draw_hover_label(painter: &Painter, rect: &Rect, text: &str) {
    painter.text(
        rect.left_top() + LABEL_OFFSET,
        Align2::LEFT_TOP,
        text,
        FontId::proportional(LABEL_SIZE),
        LABEL_COLOR,
    );
}
