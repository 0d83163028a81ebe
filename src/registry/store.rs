//! The variable registry.

use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::path::PathBuf;

use super::info::VariableInfo;
use crate::error::ConfigError;
use crate::value::ConfigValue;
use crate::variable::{AnyVariable, Variable, downcast_ref};

/// State guarded by the registry lock.
#[derive(Debug, Default)]
pub(super) struct Inner {
    pub(super) variables: HashMap<String, Box<dyn AnyVariable>>,
    pub(super) config_path: Option<PathBuf>,
}

/// Heterogeneous, thread-safe collection of configuration variables.
///
/// Construct one at start-up and share it as `Arc<Registry>`. Every method
/// holds the single registry lock for its whole duration, file I/O included.
#[derive(Debug, Default)]
pub struct Registry {
    inner: Mutex<Inner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock()
    }

    pub fn set_config_path(&self, path: impl Into<PathBuf>) {
        self.lock().config_path = Some(path.into());
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.lock().config_path.clone()
    }

    /// Add a variable. Returns `false` and keeps the existing entry when the
    /// name is already taken.
    pub fn register<T: ConfigValue>(&self, variable: Variable<T>) -> bool {
        let mut inner = self.lock();
        let name = variable.name().to_string();

        if inner.variables.contains_key(&name) {
            tracing::warn!(name = %name, "Variable already registered, ignoring");
            return false;
        }

        tracing::debug!(name = %name, kind = %T::KIND, "Registered variable");
        inner.variables.insert(name, Box::new(variable));
        true
    }

    /// Current value, if `name` exists and holds a `T`.
    pub fn get<T: ConfigValue>(&self, name: &str) -> Option<T> {
        self.try_get(name).ok()
    }

    /// Like [`get`](Self::get), but tells a missing name apart from a type mismatch.
    pub fn try_get<T: ConfigValue>(&self, name: &str) -> Result<T, ConfigError> {
        let inner = self.lock();
        let var = inner
            .variables
            .get(name)
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))?;

        downcast_ref::<T>(var.as_ref())
            .map(|typed| typed.value().clone())
            .ok_or_else(|| ConfigError::TypeMismatch {
                name: name.to_string(),
                expected: T::KIND,
                actual: var.kind(),
            })
    }

    /// Validate `raw` and store it in `name`.
    pub fn set(&self, name: &str, raw: &str) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        let var = inner
            .variables
            .get_mut(name)
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))?;
        var.try_set(raw)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.lock().variables.contains_key(name)
    }

    pub fn get_as_string(&self, name: &str) -> Option<String> {
        self.lock().variables.get(name).map(|var| var.value_as_string())
    }

    /// Restore one variable's default. Returns `false` for an unknown name.
    pub fn reset(&self, name: &str) -> bool {
        match self.lock().variables.get_mut(name) {
            Some(var) => {
                var.reset();
                true
            }
            None => false,
        }
    }

    pub fn reset_all(&self) {
        for var in self.lock().variables.values_mut() {
            var.reset();
        }
    }

    /// Every registered name, in no particular order.
    pub fn list_all(&self) -> Vec<String> {
        self.lock().variables.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().variables.is_empty()
    }

    pub fn get_info(&self, name: &str) -> Option<VariableInfo> {
        self.lock()
            .variables
            .get(name)
            .map(|var| VariableInfo::snapshot(var.as_ref()))
    }

    pub(super) fn require_config_path(&self) -> Result<PathBuf, ConfigError> {
        self.config_path().ok_or(ConfigError::NoConfigPath)
    }
}
