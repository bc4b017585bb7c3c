use egui::{Context, Grid, RichText};
use shadow_engine::{DrawCommand, Engine, RecordingCanvas, Size};

/// Lists the draw calls the shadow routine makes for the current card.
pub fn show_debug_window(ctx: &Context, engine: &Engine, card_size: Option<Size>, open: &mut bool) {
    egui::Window::new("Debug Info")
        .open(open)
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            let Some(size) = card_size else {
                ui.label("Card not laid out yet");
                return;
            };

            ui.label(format!("card {:.1} x {:.1}", size.width, size.height));
            ui.label(format!(
                "undo: {} | redo: {}",
                engine.can_undo(),
                engine.can_redo()
            ));
            ui.separator();

            let mut canvas = RecordingCanvas::new();
            engine.shadow_style().draw(&mut canvas, size);

            for (i, command) in canvas.commands().iter().enumerate() {
                let DrawCommand::RoundRect {
                    rect,
                    radius_x,
                    radius_y,
                    paint,
                } = command;

                ui.label(RichText::new(format!("#{i} round rect")).strong());
                Grid::new(("draw_command", i)).num_columns(2).show(ui, |ui| {
                    ui.label("left / top");
                    ui.label(format!("{:.1} / {:.1}", rect.min.x, rect.min.y));
                    ui.end_row();

                    ui.label("right / bottom");
                    ui.label(format!("{:.1} / {:.1}", rect.max.x, rect.max.y));
                    ui.end_row();

                    ui.label("size");
                    ui.label(format!("{:.1} x {:.1}", rect.width(), rect.height()));
                    ui.end_row();

                    ui.label("radius");
                    ui.label(format!("{radius_x:.1}, {radius_y:.1}"));
                    ui.end_row();

                    ui.label("color");
                    ui.label(format!("{:#010x}", paint.color.to_argb()));
                    ui.end_row();

                    ui.label("mask");
                    match paint.mask_filter {
                        Some(filter) => ui.label(format!("{:?} {:.1}", filter.style, filter.radius)),
                        None => ui.label("none"),
                    };
                    ui.end_row();
                });
            }
        });
}
