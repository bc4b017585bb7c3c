/// A size in logical units.
///
/// Alias for ```euclid::default::Size2D<f32>```.
pub type Size = euclid::default::Size2D<f32>;

/// A point in logical units, relative to a view's top-left corner.
///
/// Alias for ```euclid::default::Point2D<f32>```.
pub type Point = euclid::default::Point2D<f32>;

/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vector = euclid::default::Vector2D<f32>;

/// Edge-based rectangle relative to a view's top-left corner: `min` is the
/// left/top edge pair, `max` the right/bottom one.
///
/// Nothing keeps `min <= max`; inverted boxes are passed through to the
/// canvas untouched.
///
/// Alias for ```euclid::default::Box2D<f32>```.
pub type Rect = euclid::default::Box2D<f32>;

/// A [`Rect`] from its four edges.
pub fn rect_from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
    Rect::new(Point::new(left, top), Point::new(right, bottom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_edges_are_kept() {
        let rect = rect_from_edges(60.0, 60.0, 40.0, -10.0);
        assert_eq!(rect.min, Point::new(60.0, 60.0));
        assert_eq!(rect.max, Point::new(40.0, -10.0));
        assert_eq!(rect.width(), -20.0);
        assert_eq!(rect.height(), -70.0);
    }

    #[test]
    fn translate_moves_every_edge() {
        let rect = rect_from_edges(2.0, 4.0, 105.0, 55.0).translate(Vector::new(40.0, 60.0));
        assert_eq!(rect, rect_from_edges(42.0, 64.0, 145.0, 115.0));
    }
}
