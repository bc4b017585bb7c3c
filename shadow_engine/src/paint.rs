use crate::color::Rgba;
use crate::geometry::Rect;

/// How a blur mask treats the inside and outside of the painted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurStyle {
    /// Blur inside and outside the edge.
    #[default]
    Normal,
    /// Solid inside, blurred outside.
    Solid,
    /// Nothing inside, blurred outside.
    Outer,
    /// Blurred inside, nothing outside.
    Inner,
}

/// A blur applied to the alpha mask of a fill before compositing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurMaskFilter {
    pub radius: f32,
    pub style: BlurStyle,
}

impl BlurMaskFilter {
    pub const fn new(radius: f32, style: BlurStyle) -> Self {
        Self { radius, style }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub color: Rgba,
    pub mask_filter: Option<BlurMaskFilter>,
}

impl Paint {
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            mask_filter: None,
        }
    }

    pub fn with_mask_filter(mut self, filter: BlurMaskFilter) -> Self {
        self.mask_filter = Some(filter);
        self
    }
}

/// Drawing surface supplied by the host toolkit.
///
/// Coordinates are relative to the top-left of the view being decorated.
pub trait Canvas {
    fn draw_round_rect(&mut self, rect: Rect, radius_x: f32, radius_y: f32, paint: &Paint);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RoundRect {
        rect: Rect,
        radius_x: f32,
        radius_y: f32,
        paint: Paint,
    },
}

/// A canvas that keeps every draw call in order instead of rasterizing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn draw_round_rect(&mut self, rect: Rect, radius_x: f32, radius_y: f32, paint: &Paint) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            radius_x,
            radius_y,
            paint: *paint,
        });
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_round_rect(&mut self, rect: Rect, radius_x: f32, radius_y: f32, paint: &Paint) {
        (**self).draw_round_rect(rect, radius_x, radius_y, paint);
    }
}
