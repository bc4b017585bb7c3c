#![allow(dead_code)]

use param_schema_derive::ParamSchema;

#[derive(ParamSchema)]
struct Counts {
    radius: f32,
    steps: i32,
}

fn main() {}
