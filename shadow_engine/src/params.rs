use std::fmt;

use crate::color::Hsva;
use crate::error::{Error, Result};
use crate::registry::{Angle, FloatRange, SlotDef};
use crate::traits::Schema;
use crate::ParamSchema;

/// A group of sliders shown under one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Geometry,
    Shadow,
    ShadowColor,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Geometry, Section::Shadow, Section::ShadowColor];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Geometry => "Geometry",
            Section::Shadow => "Shadow",
            Section::ShadowColor => "Shadow Color",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Size and rounding of the card the shadow sits behind.
#[derive(ParamSchema, Debug, Clone, Copy, PartialEq)]
pub struct GeometryParams {
    // The "Width" slider has always driven the card's height; the card fills
    // the available width.
    #[label("Width")]
    #[meta(FloatRange::new(0.0, 200.0, 80.0))]
    pub height: f32,

    #[label("Radius")]
    #[meta(FloatRange::new(0.0, 80.0, 22.0))]
    pub radius: f32,
}

#[derive(ParamSchema, Debug, Clone, Copy, PartialEq)]
pub struct ShadowParams {
    #[label("Radius")]
    #[meta(FloatRange::new(0.0, 80.0, 22.0))]
    pub radius: f32,

    #[label("OffsetX")]
    #[meta(FloatRange::new(0.0, 80.0, 7.0))]
    pub offset_x: f32,

    #[label("OffsetY")]
    #[meta(FloatRange::new(0.0, 80.0, 7.0))]
    pub offset_y: f32,

    #[label("Spread")]
    #[meta(FloatRange::new(0.0, 80.0, 7.0))]
    pub spread: f32,

    #[label("Blur Radius")]
    #[meta(FloatRange::new(0.0, 80.0, 22.0))]
    pub blur_radius: f32,
}

#[derive(ParamSchema, Debug, Clone, Copy, PartialEq)]
pub struct ColorParams {
    #[label("Hue")]
    #[meta(Angle::default())]
    pub hue: f32,

    #[label("Sat")]
    #[meta(FloatRange::new(0.0, 1.0, 0.0))]
    pub sat: f32,

    #[label("Val")]
    #[meta(FloatRange::new(0.0, 1.0, 0.0))]
    pub val: f32,

    #[label("Alpha")]
    #[meta(FloatRange::new(0.0, 1.0, 1.0))]
    pub alpha: f32,
}

impl ColorParams {
    pub fn hsva(&self) -> Hsva {
        Hsva::new(self.hue, self.sat, self.val, self.alpha)
    }
}

/// One changed slot, as reported by [`Params::edit_all`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotChange {
    pub slot: usize,
    pub old_value: f32,
    pub new_value: f32,
}

/// Object-safe view over a [`ParamSet`] so sections can be handled uniformly.
pub trait Params {
    fn slots(&self) -> &[SlotDef];

    fn get(&self, index: usize) -> Option<f32>;

    /// Write `value` clamped to the slot's range. Returns the previous value
    /// when something changed.
    fn set(&mut self, index: usize, value: f32) -> Result<Option<f32>>;

    /// Hand every visible slot to `f`, then clamp whatever it wrote.
    fn edit_all(&mut self, f: &mut dyn FnMut(&SlotDef, &mut f32)) -> Vec<SlotChange>;

    fn values(&self) -> Vec<f32>;
}

/// Slider-bound values of one schema together with their slot definitions.
#[derive(Debug, Clone)]
pub struct ParamSet<T: Schema> {
    section: Section,
    values: T,
    slots: Vec<SlotDef>,
}

impl<T: Schema> ParamSet<T> {
    pub fn new(section: Section) -> Self {
        let slots = T::fields();
        let mut values = T::default();
        for (i, slot) in slots.iter().enumerate() {
            if let Some(v) = values.get_mut(i) {
                *v = slot.clamp(*v);
            }
        }

        Self {
            section,
            values,
            slots,
        }
    }

    pub fn values_ref(&self) -> &T {
        &self.values
    }

    pub fn replace(&mut self, values: T) {
        self.values = values;
    }

    fn check_index(&self, index: usize) -> Result<&SlotDef> {
        self.slots.get(index).ok_or(Error::NoParam {
            section: self.section,
            index,
        })
    }
}

impl<T: Schema> Params for ParamSet<T> {
    fn slots(&self) -> &[SlotDef] {
        &self.slots
    }

    fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index)
    }

    fn set(&mut self, index: usize, value: f32) -> Result<Option<f32>> {
        let slot = self.check_index(index)?;
        if !value.is_finite() {
            return Err(Error::NotFinite {
                name: slot.name().to_string(),
                value,
            });
        }

        let clamped = slot.clamp(value);
        let section = self.section;
        let target = self
            .values
            .get_mut(index)
            .ok_or(Error::NoParam { section, index })?;

        if *target == clamped {
            return Ok(None);
        }

        let old = std::mem::replace(target, clamped);
        Ok(Some(old))
    }

    fn edit_all(&mut self, f: &mut dyn FnMut(&SlotDef, &mut f32)) -> Vec<SlotChange> {
        let mut changes = Vec::new();

        for (i, slot) in self.slots.iter().enumerate() {
            if !slot.is_visible() {
                continue;
            }
            let Some(value) = self.values.get_mut(i) else {
                continue;
            };

            let old_value = *value;
            f(slot, value);

            if !value.is_finite() {
                log::warn!("{}/{} edited to {}, keeping {}", self.section, slot.name(), value, old_value);
                *value = old_value;
                continue;
            }

            *value = slot.clamp(*value);
            if *value != old_value {
                changes.push(SlotChange {
                    slot: i,
                    old_value,
                    new_value: *value,
                });
            }
        }

        changes
    }

    fn values(&self) -> Vec<f32> {
        self.values.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_labels_and_ranges() {
        let geometry = ParamSet::<GeometryParams>::new(Section::Geometry);
        assert_eq!(geometry.values(), vec![80.0, 22.0]);
        assert_eq!(geometry.slots()[0].label(), "Width");
        assert_eq!(geometry.slots()[0].range(), 0.0..=200.0);

        let shadow = ParamSet::<ShadowParams>::new(Section::Shadow);
        assert_eq!(shadow.values(), vec![22.0, 7.0, 7.0, 7.0, 22.0]);
        let labels: Vec<_> = shadow.slots().iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Radius", "OffsetX", "OffsetY", "Spread", "Blur Radius"]);

        let color = ParamSet::<ColorParams>::new(Section::ShadowColor);
        assert_eq!(color.values(), vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(color.slots()[0].range(), 0.0..=360.0);
        assert_eq!(color.slots()[3].range(), 0.0..=1.0);
    }

    #[test]
    fn set_clamps_to_declared_range() {
        let mut shadow = ParamSet::<ShadowParams>::new(Section::Shadow);

        assert_eq!(shadow.set(3, 500.0), Ok(Some(7.0)));
        assert_eq!(shadow.get(3), Some(80.0));

        assert_eq!(shadow.set(3, -500.0), Ok(Some(80.0)));
        assert_eq!(shadow.get(3), Some(0.0));
    }

    #[test]
    fn values_stay_in_range_for_any_input() {
        let mut color = ParamSet::<ColorParams>::new(Section::ShadowColor);
        let inputs = [-1e9, -1.0, -0.0, 0.3, 0.99, 1.0, 1.5, 359.0, 361.0, 1e9, f32::MAX];

        for i in 0..color.slots().len() {
            let range = color.slots()[i].range();
            for input in inputs {
                color.set(i, input).unwrap();
                let v = color.get(i).unwrap();
                assert!(range.contains(&v), "slot {i} got {v} for {input}");
            }
        }
    }

    #[test]
    fn set_unchanged_returns_none() {
        let mut geometry = ParamSet::<GeometryParams>::new(Section::Geometry);
        assert_eq!(geometry.set(0, 80.0), Ok(None));
        // Clamped write that lands on the current value is also a no-op.
        geometry.set(1, 80.0).unwrap();
        assert_eq!(geometry.set(1, 1000.0), Ok(None));
    }

    #[test]
    fn set_rejects_bad_index_and_non_finite() {
        let mut geometry = ParamSet::<GeometryParams>::new(Section::Geometry);
        assert_eq!(
            geometry.set(9, 1.0),
            Err(Error::NoParam {
                section: Section::Geometry,
                index: 9
            })
        );
        assert!(matches!(
            geometry.set(0, f32::NAN),
            Err(Error::NotFinite { .. })
        ));
        assert_eq!(geometry.get(0), Some(80.0));
    }

    #[test]
    fn edit_all_reports_and_clamps_changes() {
        let mut shadow = ParamSet::<ShadowParams>::new(Section::Shadow);
        let changes = shadow.edit_all(&mut |slot, v| {
            if slot.name() == "spread" {
                *v = 120.0;
            }
            if slot.name() == "offset_x" {
                *v = f32::INFINITY;
            }
        });

        assert_eq!(
            changes,
            vec![SlotChange {
                slot: 3,
                old_value: 7.0,
                new_value: 80.0
            }]
        );
        assert_eq!(shadow.values_ref().spread, 80.0);
        assert_eq!(shadow.values_ref().offset_x, 7.0);
    }

    #[test]
    fn color_params_feed_hsva() {
        let color = ColorParams {
            hue: 120.0,
            sat: 1.0,
            val: 0.5,
            alpha: 0.25,
        };
        let rgba = color.hsva().to_rgba();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0.0, 0.5, 0.0, 0.25));
    }
}
