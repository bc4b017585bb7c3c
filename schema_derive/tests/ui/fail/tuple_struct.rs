#![allow(dead_code)]

use param_schema_derive::ParamSchema;

#[derive(ParamSchema)]
struct Offset(f32, f32);

fn main() {}
