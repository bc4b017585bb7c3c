use egui::{Frame, Margin, ScrollArea, Ui};
use shadow_engine::{Engine, Section};

use crate::components::engine_ext::EngineExt;
use crate::consts::layout;

/// The scrolling list of section headers and sliders under the card.
pub fn show_controls(ui: &mut Ui, engine: &mut Engine) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            Frame::new()
                .inner_margin(Margin::same(layout::LIST_PADDING))
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = layout::ITEM_SPACING;

                    for section in Section::ALL {
                        engine.show_section(ui, section);
                    }
                });
        });
}
