use egui::{Sense, Stroke, Ui, vec2};
use shadow_engine::{Engine, Section};

use super::canvas::to_color32;
use super::engine_ext::EngineExt;
use crate::consts::{colors, layout};

/// Round swatch of the current shadow color followed by hue, saturation,
/// value and alpha sliders. The picked color is [`Engine::shadow_color`].
pub fn color_picker(ui: &mut Ui, engine: &mut Engine) {
    let swatch = vec2(layout::SWATCH_SIZE, layout::SWATCH_SIZE);
    let (rect, _) = ui.allocate_exact_size(swatch, Sense::hover());
    let radius = layout::SWATCH_SIZE / 2.0;
    ui.painter()
        .circle_filled(rect.center(), radius, to_color32(engine.shadow_color()));
    ui.painter().circle_stroke(
        rect.center(),
        radius,
        Stroke::new(1.0, colors::SWATCH_STROKE),
    );

    engine.show_sliders(ui, Section::ShadowColor);
}
