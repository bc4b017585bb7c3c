use crate::registry::SlotDef;

/// A struct of slider-bound `f32` parameters.
///
/// You probably won't have to implement this by hand. Instead use
/// `#[derive(ParamSchema)]`, which also derives a `Default` built from
/// each field's metadata default.
pub trait Schema: Default {
    /// Slot definitions in field order.
    fn fields() -> Vec<SlotDef>;

    fn get(&self, index: usize) -> Option<f32>;

    fn get_mut(&mut self, index: usize) -> Option<&mut f32>;

    fn field_count() -> usize {
        Self::fields().len()
    }

    /// Every field value in slot order.
    fn values(&self) -> Vec<f32> {
        (0..Self::field_count()).filter_map(|i| self.get(i)).collect()
    }
}
