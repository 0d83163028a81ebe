//! Configuration variables.
//!
//! # Responsibilities
//! - Hold one typed value together with its default and pipeline
//! - Expose every variable through the type-erased `AnyVariable` trait
//! - Recover the concrete `Variable<T>` only after a checked downcast
//!
//! # Design Decisions
//! - A failed set never touches the stored value
//! - Reset bypasses the pipeline: the default is trusted as declared
//! - Readonly blocks `try_set`; loading from a file may still apply values

pub mod erased;
pub mod typed;

pub use erased::{AnyVariable, downcast_ref};
pub use typed::Variable;
