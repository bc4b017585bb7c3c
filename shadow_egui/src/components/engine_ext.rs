use egui::{Response, Ui};
use shadow_engine::{Engine, Section};

use super::card::shadow_card;
use super::color_picker::color_picker;
use super::header::section_header;
use super::slider::labeled_slider;

/// Helper functions on the engine for UI display
pub trait EngineExt {
    /// Shows one labeled slider per slot of `section`.
    fn show_sliders(&mut self, ui: &mut Ui, section: Section);

    /// Shows the header of `section` followed by its controls.
    fn show_section(&mut self, ui: &mut Ui, section: Section);

    /// Shows the preview card with its shadow.
    fn show_card(&self, ui: &mut Ui) -> Response;
}

impl EngineExt for Engine {
    fn show_sliders(&mut self, ui: &mut Ui, section: Section) {
        let mut drag_stopped = false;
        self.edit_section(section, |slot, value| {
            drag_stopped |= labeled_slider(ui, slot, value).drag_stopped();
        });

        if drag_stopped {
            self.seal_history();
        }
    }

    fn show_section(&mut self, ui: &mut Ui, section: Section) {
        section_header(ui, section.title());

        match section {
            Section::ShadowColor => color_picker(ui, self),
            Section::Geometry | Section::Shadow => self.show_sliders(ui, section),
        }
    }

    fn show_card(&self, ui: &mut Ui) -> Response {
        shadow_card(ui, self.geometry(), &self.shadow_style())
    }
}
