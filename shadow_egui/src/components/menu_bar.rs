use egui::Button;
use egui_phosphor::regular::{ARROW_CLOCKWISE, ARROW_COUNTER_CLOCKWISE, ARROWS_COUNTER_CLOCKWISE};

use crate::app::ViewState;

#[derive(Default)]
pub struct MenuBarActions {
    pub undo: bool,
    pub redo: bool,
    pub reset: bool,
}

/// Whether the history buttons should be clickable.
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
}

pub struct MenuBar;

impl MenuBar {
    pub fn show(
        ctx: &egui::Context,
        view_state: &mut ViewState,
        history: HistoryState,
    ) -> (egui::InnerResponse<()>, MenuBarActions) {
        let mut actions = MenuBarActions::default();

        let response = egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Shadow", |ui| {
                    if ui.button("Reset").clicked() {
                        actions.reset = true;
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui
                        .add_enabled(history.can_undo, Button::new("Undo"))
                        .clicked()
                    {
                        actions.undo = true;
                        ui.close();
                    }

                    if ui
                        .add_enabled(history.can_redo, Button::new("Redo"))
                        .clicked()
                    {
                        actions.redo = true;
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut view_state.show_debug, "Debug Info");
                    ui.checkbox(&mut view_state.show_logs, "Logs");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(ARROWS_COUNTER_CLOCKWISE)
                        .on_hover_text("Reset")
                        .clicked()
                    {
                        actions.reset = true;
                    }
                    if ui
                        .add_enabled(history.can_redo, Button::new(ARROW_CLOCKWISE))
                        .on_hover_text("Redo")
                        .clicked()
                    {
                        actions.redo = true;
                    }
                    if ui
                        .add_enabled(history.can_undo, Button::new(ARROW_COUNTER_CLOCKWISE))
                        .on_hover_text("Undo")
                        .clicked()
                    {
                        actions.undo = true;
                    }
                });
            });
        });

        (response, actions)
    }
}
