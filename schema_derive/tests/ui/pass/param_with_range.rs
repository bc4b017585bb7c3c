use param_schema_derive::ParamSchema;
use shadow_engine::traits::Schema;
use shadow_engine::{Angle, FloatRange};

#[derive(ParamSchema)]
struct BlurConfig {
    #[label("Blur Radius")]
    #[tooltip("Radius of the mask blur")]
    #[meta(FloatRange { min: 0.0, max: 100.0, default: 12.0, ..Default::default() })]
    radius: f32,

    #[meta(Angle { default: 45.0, ..Default::default() })]
    direction: f32,

    // No meta attribute - unbounded, defaults to zero
    strength: f32,
}

fn main() {
    let mut config = BlurConfig::default();
    assert_eq!(config.radius, 12.0);
    assert_eq!(config.direction, 45.0);
    assert_eq!(config.strength, 0.0);

    let fields = BlurConfig::fields();
    assert_eq!(fields[0].label(), "Blur Radius");
    assert_eq!(fields[0].common.tooltip, "Radius of the mask blur");
    assert_eq!(fields[0].range(), 0.0..=100.0);
    assert_eq!(fields[1].range(), 0.0..=360.0);

    *config.get_mut(2).unwrap() = 3.0;
    assert_eq!(config.get(2), Some(3.0));
    assert_eq!(config.get(3), None);
    assert_eq!(config.values(), vec![12.0, 45.0, 3.0]);
}
