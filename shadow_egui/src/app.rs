use std::sync::mpsc::{self, Receiver, Sender};

use egui_notify::Toasts;
use shadow_engine::history::{Event, Message};
use shadow_engine::{Engine, EngineDescriptor, Size};

use crate::components::engine_ext::EngineExt;
use crate::components::menu_bar::{HistoryState, MenuBar};
use crate::components::panels::{show_controls, show_debug_window};
use crate::consts::colors;

#[derive(Default)]
pub struct ViewState {
    pub show_logs: bool,
    pub show_debug: bool,
    pub notifications: Toasts,
    /// Size the card was laid out at last frame
    pub card_size: Option<Size>,
}

pub struct ShadowApp {
    pub engine: Engine,
    /// What should be on screen
    pub view_state: ViewState,
    /// Message receiver from engine
    message_rx: Receiver<Message>,
}

impl ShadowApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self::init()
    }

    pub fn init() -> Self {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        let engine = Engine::init(EngineDescriptor {
            on_message: Some(Box::new(move |msg| {
                let _ = tx.send(msg);
            })),
        });

        Self {
            engine,
            view_state: Default::default(),
            message_rx: rx,
        }
    }

    pub fn undo(&mut self) {
        if !self.engine.undo() {
            self.view_state.notifications.info("Nothing to undo");
        }
    }

    pub fn redo(&mut self) {
        if !self.engine.redo() {
            self.view_state.notifications.info("Nothing to redo");
        }
    }

    /// Drain engine messages. Returns true if the shadow needs a repaint.
    fn process_messages(&mut self) -> bool {
        let mut out = false;
        while let Ok(msg) = self.message_rx.try_recv() {
            match msg {
                Message::Mutation(mutation) => log::trace!("Engine mutation: {:?}", mutation),
                Message::Event(event) => {
                    log::debug!("Engine event: {:?}", event);
                    match event {
                        Event::ShadowChanged => out = true,
                        Event::ResetToDefaults => {
                            self.view_state.notifications.info("Shadow reset to defaults");
                        }
                        Event::Undone | Event::Redone => {}
                    }
                }
            }
        }
        out
    }
}

impl eframe::App for ShadowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keypress(ctx);

        let history = HistoryState {
            can_undo: self.engine.can_undo(),
            can_redo: self.engine.can_redo(),
        };
        let (_, actions) = MenuBar::show(ctx, &mut self.view_state, history);

        if actions.undo {
            self.undo();
        }
        if actions.redo {
            self.redo();
        }
        if actions.reset {
            self.engine.reset();
        }

        egui::Window::new("Log")
            .open(&mut self.view_state.show_logs)
            .show(ctx, |ui| {
                egui_logger::logger_ui().show(ui);
            });

        show_debug_window(
            ctx,
            &self.engine,
            self.view_state.card_size,
            &mut self.view_state.show_debug,
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BACKGROUND))
            .show(ctx, |ui| {
                let card = self.engine.show_card(ui);
                self.view_state.card_size = Some(Size::new(card.rect.width(), card.rect.height()));

                show_controls(ui, &mut self.engine);
            });

        self.view_state.notifications.show(ctx);

        if self.process_messages() {
            ctx.request_repaint();
        }
    }
}
