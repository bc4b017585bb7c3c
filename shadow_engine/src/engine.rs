use crate::color::Rgba;
use crate::error::Result;
use crate::history::{Event, History, Message, Mutation, Snapshot};
use crate::params::{ColorParams, GeometryParams, ParamSet, Params, Section, ShadowParams};
use crate::registry::SlotDef;
use crate::shadow::ShadowStyle;

pub type MessageCallback = Box<dyn FnMut(Message)>;

#[derive(Default)]
pub struct EngineDescriptor {
    /// Called for every mutation and event, in order.
    pub on_message: Option<MessageCallback>,
}

/// Owns every slider-bound value on screen plus the undo history.
pub struct Engine {
    geometry: ParamSet<GeometryParams>,
    shadow: ParamSet<ShadowParams>,
    color: ParamSet<ColorParams>,
    history: History,
    on_message: Option<MessageCallback>,
}

impl Engine {
    pub fn init(desc: EngineDescriptor) -> Self {
        log::info!("initializing shadow engine with default parameters");
        Self {
            geometry: ParamSet::new(Section::Geometry),
            shadow: ParamSet::new(Section::Shadow),
            color: ParamSet::new(Section::ShadowColor),
            history: History::default(),
            on_message: desc.on_message,
        }
    }

    pub fn geometry(&self) -> &GeometryParams {
        self.geometry.values_ref()
    }

    pub fn shadow(&self) -> &ShadowParams {
        self.shadow.values_ref()
    }

    pub fn color(&self) -> &ColorParams {
        self.color.values_ref()
    }

    /// The color picker's current output.
    pub fn shadow_color(&self) -> Rgba {
        self.color().hsva().to_rgba()
    }

    pub fn shadow_style(&self) -> ShadowStyle {
        let shadow = self.shadow();
        ShadowStyle {
            color: self.shadow_color(),
            border_radius: shadow.radius,
            blur_radius: shadow.blur_radius,
            offset_x: shadow.offset_x,
            offset_y: shadow.offset_y,
            spread: shadow.spread,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            geometry: *self.geometry(),
            shadow: *self.shadow(),
            color: *self.color(),
        }
    }

    fn params(&self, section: Section) -> &dyn Params {
        match section {
            Section::Geometry => &self.geometry,
            Section::Shadow => &self.shadow,
            Section::ShadowColor => &self.color,
        }
    }

    fn params_mut(&mut self, section: Section) -> &mut dyn Params {
        match section {
            Section::Geometry => &mut self.geometry,
            Section::Shadow => &mut self.shadow,
            Section::ShadowColor => &mut self.color,
        }
    }

    pub fn slots(&self, section: Section) -> &[SlotDef] {
        self.params(section).slots()
    }

    pub fn value(&self, section: Section, index: usize) -> Option<f32> {
        self.params(section).get(index)
    }

    /// Set one slider value, clamped to its declared range.
    pub fn set_param(&mut self, section: Section, index: usize, value: f32) -> Result<()> {
        let Some(old_value) = self.params_mut(section).set(index, value)? else {
            return Ok(());
        };

        let new_value = self.value(section, index).unwrap_or(old_value);
        self.record(Mutation::SetParam {
            section,
            slot: index,
            old_value,
            new_value,
        });
        self.emit(Event::ShadowChanged);
        Ok(())
    }

    /// Hand every slot of `section` to `f` for in-place editing, the way an
    /// immediate mode UI binds sliders. Effective changes are recorded.
    pub fn edit_section<F>(&mut self, section: Section, mut f: F)
    where
        F: FnMut(&SlotDef, &mut f32),
    {
        let changes = self.params_mut(section).edit_all(&mut f);
        if changes.is_empty() {
            return;
        }

        for change in changes {
            self.record(Mutation::SetParam {
                section,
                slot: change.slot,
                old_value: change.old_value,
                new_value: change.new_value,
            });
        }
        self.emit(Event::ShadowChanged);
    }

    /// Restore every value to its default as one undoable step.
    pub fn reset(&mut self) {
        let old = self.snapshot();
        self.restore(&Snapshot {
            geometry: GeometryParams::default(),
            shadow: ShadowParams::default(),
            color: ColorParams::default(),
        });
        let new = self.snapshot();

        let mutation = Mutation::Reset { old, new };
        if mutation.is_noop() {
            log::debug!("reset skipped, already at defaults");
            return;
        }

        log::info!("parameters reset to defaults");
        self.record(mutation);
        self.emit(Event::ResetToDefaults);
        self.emit(Event::ShadowChanged);
    }

    pub fn undo(&mut self) -> bool {
        let Some(mutation) = self.history.undo() else {
            return false;
        };
        self.apply(&mutation);
        self.emit(mutation);
        self.emit(Event::Undone);
        self.emit(Event::ShadowChanged);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(mutation) = self.history.redo() else {
            return false;
        };
        self.apply(&mutation);
        self.emit(mutation);
        self.emit(Event::Redone);
        self.emit(Event::ShadowChanged);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Marks the end of a continuous edit such as a slider drag.
    pub fn seal_history(&mut self) {
        self.history.seal();
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        self.geometry.replace(snapshot.geometry);
        self.shadow.replace(snapshot.shadow);
        self.color.replace(snapshot.color);
    }

    fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::SetParam {
                section,
                slot,
                new_value,
                ..
            } => {
                if let Err(e) = self.params_mut(*section).set(*slot, *new_value) {
                    log::warn!("failed to apply history entry: {e}");
                }
            }
            Mutation::Reset { new, .. } => self.restore(new),
        }
    }

    fn record(&mut self, mutation: Mutation) {
        if let Mutation::SetParam {
            section,
            slot,
            old_value,
            new_value,
        } = &mutation
        {
            let name = self
                .slots(*section)
                .get(*slot)
                .map(SlotDef::name)
                .unwrap_or("?");
            log::debug!("{section}/{name}: {old_value} -> {new_value}");
        }

        self.history.push(mutation.clone());
        self.emit(mutation);
    }

    fn emit(&mut self, msg: impl Into<Message>) {
        if let Some(on_message) = self.on_message.as_mut() {
            on_message(msg.into());
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("geometry", self.geometry())
            .field("shadow", self.shadow())
            .field("color", self.color())
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
