//! The concrete, typed variable.

use crate::error::ValidationError;
use crate::validator::Pipeline;
use crate::value::ConfigValue;

/// A named configuration entry of type `T`.
#[derive(Debug, Clone)]
pub struct Variable<T: ConfigValue> {
    name: String,
    value: T,
    default_value: T,
    description: Option<String>,
    readonly: bool,
    pipeline: Pipeline<T>,
}

impl<T: ConfigValue> Variable<T> {
    /// Create a variable whose current value starts at `default_value`.
    ///
    /// Accepts a built [`Pipeline`] or a
    /// [`PipelineBuilder`](crate::validator::PipelineBuilder) directly.
    pub fn new(
        name: impl Into<String>,
        default_value: T,
        pipeline: impl Into<Pipeline<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            value: default_value.clone(),
            default_value,
            description: None,
            readonly: false,
            pipeline: pipeline.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the variable readonly: runtime sets are rejected.
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn pipeline(&self) -> &Pipeline<T> {
        &self.pipeline
    }

    /// Run the pipeline on `raw` and store the result. Readonly is not checked here.
    pub(crate) fn apply(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.value = self.pipeline.run(raw)?;
        Ok(())
    }

    pub(crate) fn restore_default(&mut self) {
        self.value = self.default_value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::presets;

    #[test]
    fn test_new_starts_at_default() {
        let var = Variable::new("server.port", 8080, presets::int_ranged(1, 65535))
            .with_description("Listening port");

        assert_eq!(var.name(), "server.port");
        assert_eq!(*var.value(), 8080);
        assert_eq!(*var.default_value(), 8080);
        assert_eq!(var.description(), Some("Listening port"));
        assert!(!var.is_readonly());
        assert!(var.pipeline().has_parser());
    }

    #[test]
    fn test_apply_keeps_value_on_failure() {
        let mut var = Variable::new("integer", 512, presets::int_ranged(0, 500));

        assert!(var.apply("700").is_err());
        assert_eq!(*var.value(), 512);

        var.apply(" 42 ").unwrap();
        assert_eq!(*var.value(), 42);

        var.restore_default();
        assert_eq!(*var.value(), 512);
    }
}
