use std::sync::mpsc::{self, Receiver, Sender};

use shadow_engine::history::{Event, Message, Mutation};
use shadow_engine::{Engine, EngineDescriptor, Section};

struct TestMessages {
    rx: Receiver<Message>,
}

impl TestMessages {
    fn new() -> (Self, Sender<Message>) {
        let (tx, rx) = mpsc::channel();
        (Self { rx }, tx)
    }

    fn drain(&self) -> Vec<Message> {
        self.rx.try_iter().collect()
    }

    fn clear(&self) {
        while self.rx.try_recv().is_ok() {}
    }
}

fn engine_with_messages() -> (Engine, TestMessages) {
    let (messages, tx) = TestMessages::new();
    let engine = Engine::init(EngineDescriptor {
        on_message: Some(Box::new(move |msg| {
            tx.send(msg).unwrap();
        })),
    });
    (engine, messages)
}

#[test]
fn slider_edit_emits_mutation_then_changed() {
    let (mut engine, messages) = engine_with_messages();
    messages.clear();

    engine.edit_section(Section::Shadow, |slot, value| {
        if slot.name() == "blur_radius" {
            *value = 40.0;
        }
    });

    let msgs = messages.drain();
    assert_eq!(msgs.len(), 2);
    assert_eq!(
        msgs[0],
        Message::Mutation(Mutation::SetParam {
            section: Section::Shadow,
            slot: 4,
            old_value: 22.0,
            new_value: 40.0,
        })
    );
    assert_eq!(msgs[1], Message::Event(Event::ShadowChanged));
}

#[test]
fn no_messages_when_value_unchanged() {
    let (mut engine, messages) = engine_with_messages();
    messages.clear();

    // Fresh engine already holds the defaults
    engine.edit_section(Section::Geometry, |slot, value| {
        *value = slot.default_value();
    });
    engine.set_param(Section::ShadowColor, 3, 1.0).unwrap();

    let msgs = messages.drain();
    assert!(msgs.is_empty(), "Expected no messages, got {:?}", msgs);
}

#[test]
fn undo_emits_inverse_mutation() {
    let (mut engine, messages) = engine_with_messages();
    engine.set_param(Section::Geometry, 1, 40.0).unwrap();
    messages.clear();

    assert!(engine.undo());

    let msgs = messages.drain();
    assert_eq!(
        msgs,
        vec![
            Message::Mutation(Mutation::SetParam {
                section: Section::Geometry,
                slot: 1,
                old_value: 40.0,
                new_value: 22.0,
            }),
            Message::Event(Event::Undone),
            Message::Event(Event::ShadowChanged),
        ]
    );
}

#[test]
fn reset_emits_reset_event() {
    let (mut engine, messages) = engine_with_messages();
    engine.set_param(Section::Shadow, 3, 0.0).unwrap();
    messages.clear();

    engine.reset();

    let msgs = messages.drain();
    assert!(matches!(msgs[0], Message::Mutation(Mutation::Reset { .. })));
    assert!(msgs.contains(&Message::Event(Event::ResetToDefaults)));
    assert_eq!(msgs.last(), Some(&Message::Event(Event::ShadowChanged)));
}
