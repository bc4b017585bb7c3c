use crate::color::Rgba;
use crate::geometry::{Rect, Size, rect_from_edges};
use crate::paint::{BlurMaskFilter, BlurStyle, Canvas, Paint};

/// A blurred rounded rectangle painted behind a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub color: Rgba,
    pub border_radius: f32,
    pub blur_radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub spread: f32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            border_radius: 0.0,
            blur_radius: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            spread: 0.0,
        }
    }
}

impl ShadowStyle {
    /// Shadow bounds for a view of `size`.
    ///
    /// The offset only moves the near edges; the far edges sit at the view's
    /// size plus spread.
    pub fn rect(&self, size: Size) -> Rect {
        rect_from_edges(
            self.offset_x - self.spread,
            self.offset_y - self.spread,
            size.width + self.spread,
            size.height + self.spread,
        )
    }

    pub fn paint(&self) -> Paint {
        let paint = Paint::new(self.color);
        if self.blur_radius != 0.0 {
            paint.with_mask_filter(BlurMaskFilter::new(self.blur_radius, BlurStyle::Normal))
        } else {
            paint
        }
    }

    /// Paint the shadow for a view of `size`. Call before drawing the view's
    /// own background so it lands underneath.
    pub fn draw(&self, mut canvas: impl Canvas, size: Size) {
        let rect = self.rect(size);
        log::trace!("shadow rect {rect:?} blur {}", self.blur_radius);
        canvas.draw_round_rect(rect, self.border_radius, self.border_radius, &self.paint());
    }
}
