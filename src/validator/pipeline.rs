//! Staged validation pipeline.

use std::fmt;
use std::sync::Arc;

use crate::error::ValidationError;

/// Receives the current string and returns it (possibly rewritten) or an error.
pub type StringValidator = Arc<dyn Fn(String) -> Result<String, ValidationError> + Send + Sync>;

/// Turns the final string into a typed value.
pub type Parser<T> = Arc<dyn Fn(&str) -> Result<T, ValidationError> + Send + Sync>;

/// Checks (and may rewrite) the parsed value.
pub type TypedValidator<T> = Arc<dyn Fn(T) -> Result<T, ValidationError> + Send + Sync>;

/// An ordered chain: string validators, one parser, typed validators.
///
/// Every stage is a pure function, so a pipeline can be cloned into as many
/// variables as needed and run from any thread.
pub struct Pipeline<T> {
    string_validators: Vec<StringValidator>,
    parser: Option<Parser<T>>,
    typed_validators: Vec<TypedValidator<T>>,
}

impl<T> Pipeline<T> {
    /// A pipeline with no stages and no parser.
    pub fn new() -> Self {
        Self {
            string_validators: Vec::new(),
            parser: None,
            typed_validators: Vec::new(),
        }
    }

    pub fn add_string_validator(&mut self, validator: StringValidator) -> &mut Self {
        self.string_validators.push(validator);
        self
    }

    /// Install the parser, replacing any previous one.
    pub fn set_parser(&mut self, parser: Parser<T>) -> &mut Self {
        self.parser = Some(parser);
        self
    }

    pub fn add_typed_validator(&mut self, validator: TypedValidator<T>) -> &mut Self {
        self.typed_validators.push(validator);
        self
    }

    pub fn has_parser(&self) -> bool {
        self.parser.is_some()
    }

    /// Run every stage in order, stopping at the first failure.
    pub fn run(&self, raw: &str) -> Result<T, ValidationError> {
        let mut value = raw.to_string();
        for validator in &self.string_validators {
            value = validator(value)?;
        }

        let parser = self
            .parser
            .as_ref()
            .ok_or_else(|| ValidationError::new("No parser configured"))?;
        let mut parsed = parser(&value)?;

        for validator in &self.typed_validators {
            parsed = validator(parsed)?;
        }

        Ok(parsed)
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            string_validators: self.string_validators.clone(),
            parser: self.parser.clone(),
            typed_validators: self.typed_validators.clone(),
        }
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("string_validators", &self.string_validators.len())
            .field("parser", &self.parser.is_some())
            .field("typed_validators", &self.typed_validators.len())
            .finish()
    }
}
