//! Type-erased view over `Variable<T>`.

use serde_json::Value;
use std::any::Any;
use std::fmt;

use super::typed::Variable;
use crate::error::ConfigError;
use crate::value::{ConfigValue, ValueKind, json_to_raw};

/// Capabilities every stored variable offers without naming its type.
pub trait AnyVariable: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str>;

    fn is_readonly(&self) -> bool;

    /// Runtime tag checked before any typed access.
    fn kind(&self) -> ValueKind;

    fn type_label(&self) -> &'static str {
        self.kind().label()
    }

    fn value_as_string(&self) -> String;

    fn default_value_as_string(&self) -> String;

    fn value_as_json(&self) -> Value;

    fn default_value_as_json(&self) -> Value;

    /// Validate `raw` and store it. On error the current value is unchanged.
    fn try_set(&mut self, raw: &str) -> Result<(), ConfigError>;

    /// Validate a JSON leaf and store it. `force` skips the readonly check.
    fn try_set_json(&mut self, value: &Value, force: bool) -> Result<(), ConfigError>;

    /// Restore the default without running the pipeline.
    fn reset(&mut self);

    fn as_any(&self) -> &dyn Any;
}

impl<T: ConfigValue> AnyVariable for Variable<T> {
    fn name(&self) -> &str {
        Variable::name(self)
    }

    fn description(&self) -> Option<&str> {
        Variable::description(self)
    }

    fn is_readonly(&self) -> bool {
        Variable::is_readonly(self)
    }

    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn value_as_string(&self) -> String {
        self.value().to_config_string()
    }

    fn default_value_as_string(&self) -> String {
        self.default_value().to_config_string()
    }

    fn value_as_json(&self) -> Value {
        self.value().to_json()
    }

    fn default_value_as_json(&self) -> Value {
        self.default_value().to_json()
    }

    fn try_set(&mut self, raw: &str) -> Result<(), ConfigError> {
        if Variable::is_readonly(self) {
            return Err(ConfigError::ReadOnly(self.name().to_string()));
        }
        self.apply(raw)?;
        Ok(())
    }

    fn try_set_json(&mut self, value: &Value, force: bool) -> Result<(), ConfigError> {
        if !force && Variable::is_readonly(self) {
            return Err(ConfigError::ReadOnly(self.name().to_string()));
        }
        let raw = json_to_raw(value)?;
        self.apply(&raw)?;
        Ok(())
    }

    fn reset(&mut self) {
        self.restore_default();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Recover the concrete variable, or `None` when `T` is not the stored type.
pub fn downcast_ref<T: ConfigValue>(var: &dyn AnyVariable) -> Option<&Variable<T>> {
    if var.kind() != T::KIND {
        return None;
    }
    var.as_any().downcast_ref::<Variable<T>>()
}
