use egui::{Frame, Margin, RichText, Ui};

use crate::consts::{colors, layout};

/// Bold section title on a solid strip, followed by a divider.
pub fn section_header(ui: &mut Ui, title: &str) {
    Frame::new()
        .fill(colors::HEADER)
        .inner_margin(Margin::same(layout::HEADER_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(16.0));
        });
    ui.separator();
}
