use crate::params::{ColorParams, GeometryParams, Section, ShadowParams};

pub type SlotIndex = usize;

/// Events emitted by the engine. Mutations are undoable, Events are informational.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A mutation that changed the parameter state (undoable)
    Mutation(Mutation),
    /// An informational event (not undoable)
    Event(Event),
}

impl From<Mutation> for Message {
    fn from(m: Mutation) -> Self {
        Message::Mutation(m)
    }
}

impl From<Event> for Message {
    fn from(e: Event) -> Self {
        Message::Event(e)
    }
}

/// Informational events that don't affect undo/redo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Anything feeding the shadow or the card changed; the view must repaint
    ShadowChanged,
    Undone,
    Redone,
    ResetToDefaults,
}

/// Every parameter value at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub geometry: GeometryParams,
    pub shadow: ShadowParams,
    pub color: ColorParams,
}

/// A mutation that can be applied to the parameters, stored for undo/redo
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// A slider value changed
    SetParam {
        section: Section,
        slot: SlotIndex,
        old_value: f32,
        new_value: f32,
    },
    /// Everything was restored to defaults
    Reset { old: Snapshot, new: Snapshot },
}

impl Mutation {
    /// Returns the slot this mutation targets if it can be merged with a
    /// following edit of the same slot.
    fn coalesce_target(&self) -> Option<(Section, SlotIndex)> {
        match self {
            Mutation::SetParam { section, slot, .. } => Some((*section, *slot)),
            Mutation::Reset { .. } => None,
        }
    }

    /// True when applying this mutation would leave everything as it was.
    pub fn is_noop(&self) -> bool {
        match self {
            Mutation::SetParam {
                old_value,
                new_value,
                ..
            } => old_value == new_value,
            Mutation::Reset { old, new } => old == new,
        }
    }

    /// Returns the inverse mutation for undo
    pub fn inverse(&self) -> Mutation {
        match self.clone() {
            Mutation::SetParam {
                section,
                slot,
                old_value,
                new_value,
            } => Mutation::SetParam {
                section,
                slot,
                old_value: new_value,
                new_value: old_value,
            },
            Mutation::Reset { old, new } => Mutation::Reset { old: new, new: old },
        }
    }
}

/// Simple undo/redo history with mutation coalescing
#[derive(Debug)]
pub struct History {
    undo_stack: Vec<Mutation>,
    redo_stack: Vec<Mutation>,
    max_size: usize,
    // Set once a drag ends so the next edit of the same slot starts a new entry.
    sealed: bool,
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
            sealed: false,
        }
    }

    /// Record a mutation
    pub fn push(&mut self, mutation: Mutation) {
        // Coalesce continuous value changes on same slot
        if self.try_coalesce(&mutation) {
            // A drag that came back to its start leaves nothing to undo
            if self.undo_stack.last().is_some_and(Mutation::is_noop) {
                self.undo_stack.pop();
            }
        } else {
            self.undo_stack.push(mutation);
        }
        self.sealed = false;
        self.redo_stack.clear();
        self.trim();
    }

    /// Stop merging edits into the last entry.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Try to coalesce with the last mutation (for continuous value drags).
    /// Returns true if coalesced, false otherwise.
    fn try_coalesce(&mut self, mutation: &Mutation) -> bool {
        if self.sealed {
            return false;
        }

        let Some(last) = self.undo_stack.last_mut() else {
            return false;
        };

        let Some(target) = last.coalesce_target() else {
            return false;
        };

        if Some(target) != mutation.coalesce_target() {
            return false;
        }

        match (last, mutation) {
            (
                Mutation::SetParam {
                    new_value: last_new,
                    ..
                },
                Mutation::SetParam { new_value, .. },
            ) => {
                *last_new = *new_value;
                true
            }
            _ => false,
        }
    }

    fn trim(&mut self) {
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last mutation, returns the inverse mutation to apply
    pub fn undo(&mut self) -> Option<Mutation> {
        let mutation = self.undo_stack.pop()?;
        let inverse = mutation.inverse();
        self.redo_stack.push(mutation);
        self.sealed = true;
        Some(inverse)
    }

    /// Redo the last undone mutation
    pub fn redo(&mut self) -> Option<Mutation> {
        let mutation = self.redo_stack.pop()?;
        let result = mutation.clone();
        self.undo_stack.push(mutation);
        self.sealed = true;
        Some(result)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(slot: SlotIndex, old_value: f32, new_value: f32) -> Mutation {
        Mutation::SetParam {
            section: Section::Shadow,
            slot,
            old_value,
            new_value,
        }
    }

    #[test]
    fn drags_on_one_slot_coalesce() {
        let mut history = History::default();
        history.push(set(0, 1.0, 2.0));
        history.push(set(0, 2.0, 3.0));
        history.push(set(0, 3.0, 4.0));

        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.undo(), Some(set(0, 4.0, 1.0)));
    }

    #[test]
    fn drag_back_to_start_leaves_no_entry() {
        let mut history = History::default();
        history.push(set(3, 7.0, 30.0));
        history.push(set(3, 30.0, 7.0));
        history.seal();

        assert!(!history.can_undo());
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn earlier_entries_survive_a_net_zero_drag() {
        let mut history = History::default();
        history.push(set(0, 1.0, 2.0));
        history.seal();
        history.push(set(3, 7.0, 30.0));
        history.push(set(3, 30.0, 7.0));

        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.undo(), Some(set(0, 2.0, 1.0)));
    }

    #[test]
    fn different_slots_do_not_coalesce() {
        let mut history = History::default();
        history.push(set(0, 1.0, 2.0));
        history.push(set(1, 1.0, 2.0));
        assert_eq!(history.undo_len(), 2);
    }

    #[test]
    fn seal_starts_a_new_entry() {
        let mut history = History::default();
        history.push(set(0, 1.0, 2.0));
        history.seal();
        history.push(set(0, 2.0, 3.0));
        history.push(set(0, 3.0, 5.0));

        assert_eq!(history.undo_len(), 2);
        assert_eq!(history.undo(), Some(set(0, 5.0, 2.0)));
        assert_eq!(history.undo(), Some(set(0, 2.0, 1.0)));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn redo_replays_and_push_clears_redo() {
        let mut history = History::default();
        history.push(set(0, 1.0, 2.0));
        history.undo();
        assert!(history.can_redo());
        assert_eq!(history.redo(), Some(set(0, 1.0, 2.0)));

        history.undo();
        history.push(set(2, 0.0, 1.0));
        assert!(!history.can_redo());
    }

    #[test]
    fn bounded_depth() {
        let mut history = History::new(3);
        for slot in 0..5 {
            history.push(set(slot, 0.0, 1.0));
        }
        assert_eq!(history.undo_len(), 3);
        assert_eq!(history.undo(), Some(set(4, 1.0, 0.0)));
    }
}
