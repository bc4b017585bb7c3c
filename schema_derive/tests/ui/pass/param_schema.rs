use param_schema_derive::ParamSchema;
use shadow_engine::traits::Schema;

#[derive(ParamSchema)]
struct Plain {
    threshold: f32,
    gain: f32,
}

fn main() {
    let plain = Plain::default();
    assert_eq!(plain.threshold, 0.0);
    assert_eq!(plain.gain, 0.0);
    assert_eq!(Plain::field_count(), 2);
    assert_eq!(Plain::fields()[1].label(), "gain");
}
