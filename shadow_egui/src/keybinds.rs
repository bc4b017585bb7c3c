use egui::{Key, KeyboardShortcut, Modifiers};

use crate::app::ShadowApp;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const RESET: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::R);

impl ShadowApp {
    pub fn handle_keypress(&mut self, ctx: &egui::Context) {
        // Redo before undo: the undo shortcut also matches with shift held
        let (redo, undo, reset, debug) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT);
            let undo = i.consume_shortcut(&UNDO);
            let reset = i.consume_shortcut(&RESET);
            (redo, undo, reset, i.key_pressed(Key::F12))
        });

        if redo {
            self.redo();
        }
        if undo {
            self.undo();
        }
        if reset {
            self.engine.reset();
        }
        if debug {
            self.view_state.show_debug = !self.view_state.show_debug;
        }
    }
}
