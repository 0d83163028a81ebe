//! Typed configuration registry.
//!
//! Variables are declared once with a default and a validation pipeline,
//! updated from untrusted strings or JSON files, and read back typed or as
//! strings.
//!
//! ```
//! use config_registry::{Registry, Variable, validator::presets};
//!
//! let registry = Registry::new();
//! registry.register(Variable::new("server.port", 8080, presets::int_ranged(1, 65535)));
//!
//! registry.set("server.port", " 9000 ").unwrap();
//! assert_eq!(registry.get::<i32>("server.port"), Some(9000));
//! assert!(registry.set("server.port", "0").is_err());
//! ```

pub mod error;
pub mod logging;
pub mod registry;
pub mod validator;
pub mod value;
pub mod variable;

pub use error::{ConfigError, LoadErrors, ValidationError};
pub use registry::{Registry, VariableInfo};
pub use validator::{Pipeline, PipelineBuilder};
pub use value::{ConfigValue, ValueKind};
pub use variable::{AnyVariable, Variable};
