use egui::epaint::RectShape;
use egui::{Color32, CornerRadius, Pos2, Shape, pos2};
use shadow_engine::{BlurStyle, Canvas, Paint, Rect, Rgba, Vector};

/// Collects egui shapes for draw calls made relative to a view's top-left.
pub struct ShapeCanvas {
    origin: Pos2,
    shapes: Vec<Shape>,
}

impl ShapeCanvas {
    pub fn new(origin: Pos2) -> Self {
        Self {
            origin,
            shapes: Vec::new(),
        }
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

impl Canvas for ShapeCanvas {
    fn draw_round_rect(&mut self, rect: Rect, radius_x: f32, radius_y: f32, paint: &Paint) {
        let rect = rect.translate(Vector::new(self.origin.x, self.origin.y));
        let rect = egui::Rect::from_min_max(pos2(rect.min.x, rect.min.y), pos2(rect.max.x, rect.max.y));

        // egui corners are circular
        let mut shape = RectShape::filled(
            rect,
            corner_radius(radius_x.min(radius_y)),
            to_color32(paint.color),
        );

        if let Some(filter) = paint.mask_filter {
            if filter.style != BlurStyle::Normal {
                log::debug!("{:?} blur drawn as normal blur", filter.style);
            }
            shape = shape.with_blur_width(blur_width(filter.radius));
        }

        self.shapes.push(Shape::Rect(shape));
    }
}

pub fn to_color32(color: Rgba) -> Color32 {
    let c = color.to_rgba8();
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

pub fn corner_radius(radius: f32) -> CornerRadius {
    CornerRadius::same(radius.round().clamp(0.0, u8::MAX as f32) as u8)
}

/// egui's blur width spans both sides of the edge, a mask radius only one.
pub fn blur_width(radius: f32) -> f32 {
    2.0 * radius.abs()
}
