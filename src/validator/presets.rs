//! Named shortcuts for the common trim → non-empty → parse → range chains.

use super::builder::PipelineBuilder;

pub fn int_ranged(min: i32, max: i32) -> PipelineBuilder<i32> {
    PipelineBuilder::<i32>::new().trim().not_empty().integer().range(min, max)
}

pub fn long_ranged(min: i64, max: i64) -> PipelineBuilder<i64> {
    PipelineBuilder::<i64>::new().trim().not_empty().integer().range(min, max)
}

pub fn float_ranged(min: f32, max: f32) -> PipelineBuilder<f32> {
    PipelineBuilder::<f32>::new().trim().not_empty().float().range(min, max)
}

pub fn double_ranged(min: f64, max: f64) -> PipelineBuilder<f64> {
    PipelineBuilder::<f64>::new().trim().not_empty().float().range(min, max)
}

pub fn string_non_empty() -> PipelineBuilder<String> {
    PipelineBuilder::<String>::new().trim().not_empty()
}

pub fn boolean() -> PipelineBuilder<bool> {
    PipelineBuilder::<bool>::new().trim().not_empty().boolean()
}
