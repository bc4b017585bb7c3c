#![allow(dead_code)]

use param_schema_derive::ParamSchema;

#[derive(ParamSchema)]
enum BlurKind {
    Soft,
    Hard,
}

fn main() {}
