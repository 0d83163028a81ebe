//! Saving, loading and exporting the registry as nested JSON.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::path::{get_nested_value, set_nested_value};
use super::store::{Inner, Registry};
use crate::error::{ConfigError, LoadErrors};
use crate::variable::AnyVariable;

impl Registry {
    /// Write every variable's current value to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let inner = self.lock();

        let mut root = Value::Object(Map::new());
        for (name, var) in sorted(&inner) {
            set_nested_value(&mut root, name, var.value_as_json());
        }
        write_json(path, &root)?;

        tracing::info!(path = %path.display(), variables = inner.variables.len(), "Config saved");
        Ok(())
    }

    /// Save to the path given by [`set_config_path`](Registry::set_config_path).
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self.require_config_path()?;
        self.save_to_file(path)
    }

    /// Apply values from `path` to every registered variable found in it.
    ///
    /// Keys with no registered variable are ignored. Every variable is tried;
    /// the ones that validate keep their new value even when others fail, and
    /// the failures come back together as [`ConfigError::Load`].
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let mut inner = self.lock();

        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let root: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut vars: Vec<_> = inner.variables.iter_mut().collect();
        vars.sort_by(|a, b| a.0.cmp(b.0));

        let mut errors = LoadErrors::new();
        let mut applied = 0usize;
        for (name, var) in vars {
            let Some(value) = get_nested_value(&root, name) else {
                continue;
            };
            match var.try_set_json(value, true) {
                Ok(()) => applied += 1,
                Err(e) => errors.push(name.as_str(), e.to_string()),
            }
        }

        if errors.is_empty() {
            tracing::info!(path = %path.display(), applied, "Config loaded");
        } else {
            tracing::warn!(
                path = %path.display(),
                applied,
                failed = errors.len(),
                "Config loaded with errors"
            );
        }
        errors.into_result()
    }

    /// Load from the path given by [`set_config_path`](Registry::set_config_path).
    pub fn load(&self) -> Result<(), ConfigError> {
        let path = self.require_config_path()?;
        self.load_from_file(path)
    }

    /// Write a self-describing dump: each leaf carries readonly, value,
    /// default, type and (when set) description.
    pub fn export_template(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let inner = self.lock();

        let mut root = Value::Object(Map::new());
        for (name, var) in sorted(&inner) {
            set_nested_value(&mut root, name, template_leaf(var));
        }
        write_json(path, &root)?;

        tracing::info!(
            path = %path.display(),
            variables = inner.variables.len(),
            "Template exported"
        );
        Ok(())
    }
}

/// Variables in name order, so overlapping paths always project the same way.
fn sorted(inner: &Inner) -> Vec<(&String, &dyn AnyVariable)> {
    let mut vars: Vec<_> = inner
        .variables
        .iter()
        .map(|(name, var)| (name, var.as_ref()))
        .collect();
    vars.sort_by(|a, b| a.0.cmp(b.0));
    vars
}

pub(crate) fn template_leaf(var: &dyn AnyVariable) -> Value {
    let mut leaf = Map::new();
    leaf.insert("readonly".into(), Value::Bool(var.is_readonly()));
    leaf.insert("value".into(), var.value_as_json());
    leaf.insert("default".into(), var.default_value_as_json());
    leaf.insert("type".into(), Value::String(var.type_label().to_string()));
    if let Some(description) = var.description() {
        leaf.insert("description".into(), Value::String(description.to_string()));
    }
    Value::Object(leaf)
}

fn write_json(path: &Path, root: &Value) -> Result<(), ConfigError> {
    let file = File::create(path).map_err(|e| ConfigError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    root.serialize(&mut serializer).map_err(ConfigError::Serialize)?;

    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| ConfigError::io(path, e))
}
