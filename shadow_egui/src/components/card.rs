use egui::{Frame, Margin, Response, Sense, Ui, vec2};
use shadow_engine::{GeometryParams, ShadowStyle, Size};

use super::canvas::{ShapeCanvas, corner_radius};
use crate::consts::{colors, layout};

/// The preview card: a full-width rounded white box with the shadow painted
/// underneath it.
pub fn shadow_card(ui: &mut Ui, geometry: &GeometryParams, style: &ShadowStyle) -> Response {
    Frame::new()
        .inner_margin(Margin::same(layout::CARD_PADDING))
        .show(ui, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(vec2(ui.available_width(), geometry.height), Sense::hover());

            // Shadow first so the card background lands on top of it
            let mut canvas = ShapeCanvas::new(rect.min);
            style.draw(&mut canvas, Size::new(rect.width(), rect.height()));

            let painter = ui.painter();
            painter.extend(canvas.into_shapes());
            painter.rect_filled(rect, corner_radius(geometry.radius), colors::CARD);

            response
        })
        .inner
}
