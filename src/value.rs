//! Scalar value types a variable can hold.
//!
//! # Responsibilities
//! - Tag each supported Rust type with a `ValueKind`
//! - Render values as canonical strings and as JSON leaves
//! - Turn a JSON leaf back into the raw string a pipeline expects

use serde_json::{Number, Value};
use std::fmt;

use crate::error::ValidationError;
use crate::validator::Parser;

/// Runtime type tag for a stored variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Long,
    Float,
    Double,
    Bool,
}

impl ValueKind {
    /// Label used in metadata snapshots and template exports.
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scalar type that can live inside the registry.
pub trait ConfigValue: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    const KIND: ValueKind;

    /// Canonical string form (`true`/`false` for booleans, shortest decimal for numbers).
    fn to_config_string(&self) -> String;

    /// JSON leaf written on save and export.
    fn to_json(&self) -> Value;

    /// Parser installed by a fresh builder. Only strings get one.
    fn default_parser() -> Option<Parser<Self>> {
        None
    }
}

impl ConfigValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn to_config_string(&self) -> String {
        self.clone()
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }

    fn default_parser() -> Option<Parser<Self>> {
        Some(std::sync::Arc::new(|raw: &str| {
            Ok::<_, ValidationError>(raw.to_string())
        }))
    }
}

impl ConfigValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn to_config_string(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_integer_value {
    ($($ty:ty => $kind:ident),*) => {
        $(
            impl ConfigValue for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                fn to_config_string(&self) -> String {
                    self.to_string()
                }

                fn to_json(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

macro_rules! impl_float_value {
    ($($ty:ty => $kind:ident),*) => {
        $(
            impl ConfigValue for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                fn to_config_string(&self) -> String {
                    self.to_string()
                }

                // Goes through the shortest decimal form so an f32 such as 22.8
                // lands in the file as 22.8 rather than 22.799999237060547.
                fn to_json(&self) -> Value {
                    self.to_string()
                        .parse::<f64>()
                        .ok()
                        .and_then(Number::from_f64)
                        .map(Value::Number)
                        .unwrap_or(Value::Null)
                }
            }
        )*
    };
}

impl_integer_value!(i32 => Int, i64 => Long);
impl_float_value!(f32 => Float, f64 => Double);

/// Convert a JSON leaf found in a config file into pipeline input.
pub fn json_to_raw(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(ValidationError::new("Unsupported JSON value: null")),
        Value::Array(_) => Err(ValidationError::new("Unsupported JSON value: array")),
        Value::Object(_) => Err(ValidationError::new("Unsupported JSON value: object")),
    }
}
