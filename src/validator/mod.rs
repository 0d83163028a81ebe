//! Validation pipelines.
//!
//! # Data Flow
//! ```text
//! raw string
//!     → string validators (trim, not_empty, custom), in order
//!     → parser (exactly one)
//!     → typed validators (min, max, range, custom_typed), in order
//!     → T
//! ```
//!
//! # Design Decisions
//! - First failing stage wins; later stages never run
//! - No parser is an error, not a pass-through (strings get one by default)
//! - Stages are shared behind `Arc`, so cloning a pipeline is cheap

pub mod builder;
pub mod pipeline;
pub mod presets;

pub use builder::{FloatValue, IntegerValue, PipelineBuilder};
pub use pipeline::{Parser, Pipeline, StringValidator, TypedValidator};
