pub use rgb::RGBA8;

/// A color in straight (non-premultiplied) alpha, every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels quantized to 8 bits, alpha not premultiplied.
    pub fn to_rgba8(&self) -> RGBA8 {
        RGBA8::new(
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        )
    }

    /// Packed as `0xAARRGGBB`.
    pub fn to_argb(&self) -> u32 {
        let RGBA8 { r, g, b, a } = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Hue in degrees `[0, 360)`, saturation, value and alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl Hsva {
    pub const fn new(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }

    pub fn to_rgba(&self) -> Rgba {
        let channel = |n: f32| {
            let k = (n + self.h / 60.0).rem_euclid(6.0);
            self.v - self.v * self.s * k.min(4.0 - k).clamp(0.0, 1.0)
        };

        Rgba::new(channel(5.0), channel(3.0), channel(1.0), self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Rgba, expected: Rgba) {
        let pairs = [
            (actual.r, expected.r),
            (actual.g, expected.g),
            (actual.b, expected.b),
            (actual.a, expected.a),
        ];
        for (a, e) in pairs {
            assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn primaries() {
        assert_close(Hsva::new(0.0, 1.0, 1.0, 1.0).to_rgba(), Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_close(Hsva::new(120.0, 1.0, 1.0, 1.0).to_rgba(), Rgba::new(0.0, 1.0, 0.0, 1.0));
        assert_close(Hsva::new(240.0, 1.0, 1.0, 1.0).to_rgba(), Rgba::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn secondaries() {
        assert_close(Hsva::new(60.0, 1.0, 1.0, 1.0).to_rgba(), Rgba::new(1.0, 1.0, 0.0, 1.0));
        assert_close(Hsva::new(180.0, 1.0, 1.0, 1.0).to_rgba(), Rgba::new(0.0, 1.0, 1.0, 1.0));
        assert_close(Hsva::new(300.0, 1.0, 1.0, 1.0).to_rgba(), Rgba::new(1.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        for h in [0.0, 90.0, 200.0, 359.0] {
            assert_close(Hsva::new(h, 0.0, 0.25, 0.5).to_rgba(), Rgba::new(0.25, 0.25, 0.25, 0.5));
        }
    }

    #[test]
    fn defaults_are_opaque_black() {
        assert_close(Hsva::new(0.0, 0.0, 0.0, 1.0).to_rgba(), Rgba::BLACK);
    }

    #[test]
    fn hue_360_wraps_to_red() {
        assert_close(Hsva::new(360.0, 1.0, 1.0, 1.0).to_rgba(), Rgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn half_saturation_orange() {
        // h=30: r = v, g = v - v*s*0.5, b = v - v*s
        let c = Hsva::new(30.0, 0.5, 0.8, 1.0).to_rgba();
        assert_close(c, Rgba::new(0.8, 0.6, 0.4, 1.0));
    }

    #[test]
    fn argb_packing() {
        assert_eq!(Rgba::BLACK.to_argb(), 0xFF00_0000);
        assert_eq!(Rgba::WHITE.to_argb(), 0xFFFF_FFFF);
        assert_eq!(Rgba::new(1.0, 0.0, 0.0, 0.5).to_argb(), 0x80FF_0000);
        assert_eq!(Rgba::new(0.0, 0.0, 0.0, 0.0).to_argb(), 0);
    }

    #[test]
    fn quantization_rounds_and_saturates() {
        assert_eq!(Rgba::new(0.5, 1.5, -0.2, 0.2).to_rgba8(), RGBA8::new(128, 255, 0, 51));
    }
}
