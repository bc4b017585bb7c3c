use std::borrow::Cow;
use std::ops::RangeInclusive;

use derive_more::From;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonMetadata {
    // Descriptive helpful piece of text shown on hover.
    pub tooltip: String,
    // True if this piece of state should be shown
    pub visible: bool,
}

impl Default for CommonMetadata {
    fn default() -> Self {
        Self {
            tooltip: String::new(),
            visible: true,
        }
    }
}

pub trait MetadataFor<T> {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl Default for FloatRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.0,
            default: 0.0,
        }
    }
}

impl FloatRange {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self {
            min,
            max,
            step: 0.0,
            default,
        }
    }
}

impl MetadataFor<f32> for FloatRange {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub unit: AngleUnit,
}

impl Default for Angle {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 360.0,
            default: 0.0,
            unit: AngleUnit::Degrees,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    Radians,
    #[default]
    Degrees,
}

impl AngleUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            AngleUnit::Radians => " rad",
            AngleUnit::Degrees => "°",
        }
    }
}

impl MetadataFor<f32> for Angle {}

#[derive(Debug, Clone, Copy, Default, PartialEq, From)]
pub enum ExtendedMetadata {
    #[default]
    None,
    #[from]
    FloatRange(FloatRange),
    #[from]
    Angle(Angle),
}

impl ExtendedMetadata {
    /// The declared `[from, to]` range, unbounded when no metadata is attached.
    pub fn range(&self) -> RangeInclusive<f32> {
        match self {
            ExtendedMetadata::None => f32::MIN..=f32::MAX,
            ExtendedMetadata::FloatRange(r) => r.min..=r.max,
            ExtendedMetadata::Angle(a) => a.min..=a.max,
        }
    }

    pub fn default_value(&self) -> f32 {
        match self {
            ExtendedMetadata::None => 0.0,
            ExtendedMetadata::FloatRange(r) => r.default,
            ExtendedMetadata::Angle(a) => a.default,
        }
    }

    /// Slider step, zero meaning continuous.
    pub fn step(&self) -> f32 {
        match self {
            ExtendedMetadata::FloatRange(r) => r.step,
            ExtendedMetadata::None | ExtendedMetadata::Angle(_) => 0.0,
        }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotDef {
    pub name: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub extended: ExtendedMetadata,
    pub common: CommonMetadata,
}

impl Default for SlotDef {
    fn default() -> Self {
        Self {
            name: Cow::Borrowed(""),
            label: Cow::Borrowed(""),
            extended: ExtendedMetadata::None,
            common: CommonMetadata::default(),
        }
    }
}

impl SlotDef {
    pub fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            label: Cow::Borrowed(name),
            ..Default::default()
        }
    }

    pub fn with_metadata(name: &'static str, extended: impl Into<ExtendedMetadata>) -> Self {
        Self {
            extended: extended.into(),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_visible(&self) -> bool {
        self.common.visible
    }

    /// Text shown after the value, e.g. `°` for angles.
    pub fn unit_suffix(&self) -> &'static str {
        match &self.extended {
            ExtendedMetadata::Angle(angle) => angle.unit.suffix(),
            ExtendedMetadata::None | ExtendedMetadata::FloatRange(_) => "",
        }
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.extended.range()
    }

    pub fn default_value(&self) -> f32 {
        self.extended.default_value()
    }

    pub fn clamp(&self, value: f32) -> f32 {
        self.extended.clamp(value)
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.common.visible = visible;
        self
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) -> &mut Self {
        self.common.tooltip = tooltip.into();
        self
    }

    pub fn set_label(&mut self, label: impl Into<Cow<'static, str>>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn set_extended<M: MetadataFor<f32> + Into<ExtendedMetadata>>(
        &mut self,
        meta: M,
    ) -> &mut Self {
        self.extended = meta.into();
        self
    }
}
