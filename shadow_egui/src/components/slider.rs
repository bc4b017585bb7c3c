use egui::{Response, Slider, Ui};
use shadow_engine::SlotDef;

/// A `title:value` line (plus the slot's unit suffix) above a full-width
/// slider bound to `value`.
pub fn labeled_slider(ui: &mut Ui, slot: &SlotDef, value: &mut f32) -> Response {
    ui.vertical(|ui| {
        ui.label(format!("{}:{:?}{}", slot.label(), value, slot.unit_suffix()));

        ui.scope(|ui| {
            ui.spacing_mut().slider_width = ui.available_width();

            let mut slider = Slider::new(value, slot.range()).show_value(false);
            let step = slot.extended.step();
            if step > 0.0 {
                slider = slider.step_by(step as f64);
            }

            let response = ui.add(slider);
            if slot.common.tooltip.is_empty() {
                response
            } else {
                response.on_hover_text(slot.common.tooltip.as_str())
            }
        })
        .inner
    })
    .inner
}
