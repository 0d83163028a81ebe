//! Fluent construction of validation pipelines.

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use super::pipeline::Pipeline;
use crate::error::ValidationError;
use crate::value::ConfigValue;

/// Integer types the `integer()` parser supports.
pub trait IntegerValue: ConfigValue + FromStr {}
impl IntegerValue for i32 {}
impl IntegerValue for i64 {}

/// Floating point types the `float()` parser supports.
pub trait FloatValue: ConfigValue + FromStr {
    fn is_finite(&self) -> bool;
}

impl FloatValue for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl FloatValue for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

/// Builds a [`Pipeline`] one stage at a time.
///
/// Each method consumes the builder and hands it back, so stages chain in any
/// order and may repeat:
///
/// ```
/// use config_registry::validator::PipelineBuilder;
///
/// let port = PipelineBuilder::<i32>::new()
///     .trim()
///     .not_empty()
///     .integer()
///     .range(1, 65535)
///     .build();
///
/// assert_eq!(port.run(" 8080 ").unwrap(), 8080);
/// assert!(port.run("0").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBuilder<T> {
    pipeline: Pipeline<T>,
}

impl<T: ConfigValue> PipelineBuilder<T> {
    /// Start an empty builder. String builders begin with a pass-through parser.
    pub fn new() -> Self {
        let mut pipeline = Pipeline::new();
        if let Some(parser) = T::default_parser() {
            pipeline.set_parser(parser);
        }
        Self { pipeline }
    }

    // string validators

    /// Strip leading and trailing whitespace.
    pub fn trim(mut self) -> Self {
        self.pipeline
            .add_string_validator(Arc::new(|value: String| {
                Ok::<_, ValidationError>(value.trim().to_string())
            }));
        self
    }

    /// Reject the empty string.
    pub fn not_empty(mut self) -> Self {
        self.pipeline.add_string_validator(Arc::new(|value: String| {
            if value.is_empty() {
                Err(ValidationError::new("Value should not be empty"))
            } else {
                Ok(value)
            }
        }));
        self
    }

    /// Append a caller-supplied string stage.
    pub fn custom<F>(mut self, validator: F) -> Self
    where
        F: Fn(String) -> Result<String, ValidationError> + Send + Sync + 'static,
    {
        self.pipeline.add_string_validator(Arc::new(validator));
        self
    }

    // parsers

    /// Install a caller-supplied parser.
    pub fn parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(&str) -> Result<T, ValidationError> + Send + Sync + 'static,
    {
        self.pipeline.set_parser(Arc::new(parser));
        self
    }

    // typed validators

    /// Append a caller-supplied typed stage.
    pub fn custom_typed<F>(mut self, validator: F) -> Self
    where
        F: Fn(T) -> Result<T, ValidationError> + Send + Sync + 'static,
    {
        self.pipeline.add_typed_validator(Arc::new(validator));
        self
    }

    pub fn build(self) -> Pipeline<T> {
        self.pipeline
    }
}

impl<T: ConfigValue + PartialOrd + Display> PipelineBuilder<T> {
    /// Values that do not compare (NaN) are rejected.
    pub fn min(self, min_value: T) -> Self {
        self.custom_typed(move |value| match value.partial_cmp(&min_value) {
            Some(Ordering::Less) | None => {
                Err(format!("Value should be >={}", min_value).into())
            }
            _ => Ok(value),
        })
    }

    pub fn max(self, max_value: T) -> Self {
        self.custom_typed(move |value| match value.partial_cmp(&max_value) {
            Some(Ordering::Greater) | None => {
                Err(format!("Value should be <={}", max_value).into())
            }
            _ => Ok(value),
        })
    }

    /// Inclusive on both ends.
    pub fn range(self, min_value: T, max_value: T) -> Self {
        let bounds = min_value..=max_value;
        self.custom_typed(move |value| {
            if bounds.contains(&value) {
                Ok(value)
            } else {
                Err(format!("Value should be >={} and <={}", bounds.start(), bounds.end()).into())
            }
        })
    }
}

impl<T: IntegerValue> PipelineBuilder<T> {
    pub fn integer(self) -> Self {
        self.parser(|value| {
            if value.is_empty() {
                return Err(ValidationError::new("String should not be empty"));
            }
            value
                .parse::<T>()
                .map_err(|_| ValidationError::new("Failed to parse integer"))
        })
    }
}

impl<T: FloatValue> PipelineBuilder<T> {
    /// Only finite values parse; `NaN` and `inf` are rejected.
    pub fn float(self) -> Self {
        self.parser(|value| {
            if value.is_empty() {
                return Err(ValidationError::new("String should not be empty"));
            }
            match value.parse::<T>() {
                Ok(parsed) if parsed.is_finite() => Ok(parsed),
                _ => Err(ValidationError::new("Failed to parse float")),
            }
        })
    }
}

impl PipelineBuilder<bool> {
    /// Accepts exactly `1`, `true`, `0` and `false`.
    pub fn boolean(self) -> Self {
        self.parser(|value| match value {
            "" => Err(ValidationError::new("String should not be empty")),
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => Err(ValidationError::new(
                "Unsupported bool value (1/true/0/false)",
            )),
        })
    }
}

impl<T: ConfigValue> Default for PipelineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<PipelineBuilder<T>> for Pipeline<T> {
    fn from(builder: PipelineBuilder<T>) -> Self {
        builder.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_then_not_empty() {
        let pipeline = PipelineBuilder::<String>::new().trim().not_empty().build();

        assert_eq!(pipeline.run("  hi  ").unwrap(), "hi");
        assert_eq!(
            pipeline.run("   ").unwrap_err().message(),
            "Value should not be empty"
        );
        assert!(pipeline.run("").is_err());
    }

    #[test]
    fn test_string_builder_has_passthrough_parser() {
        let pipeline = PipelineBuilder::<String>::new().build();
        assert_eq!(pipeline.run(" raw ").unwrap(), " raw ");
    }

    #[test]
    fn test_numeric_builder_without_parser_fails() {
        let pipeline = PipelineBuilder::<i32>::new().trim().build();
        assert_eq!(pipeline.run("5").unwrap_err().message(), "No parser configured");
    }

    #[test]
    fn test_range_is_inclusive() {
        let pipeline = PipelineBuilder::<i32>::new().integer().range(0, 500).build();

        assert_eq!(pipeline.run("500").unwrap(), 500);
        assert_eq!(pipeline.run("0").unwrap(), 0);
        assert!(pipeline.run("501").is_err());
        assert!(pipeline.run("-1").is_err());
    }

    #[test]
    fn test_range_message_reports_both_bounds() {
        let pipeline = PipelineBuilder::<i32>::new().integer().range(0, 500).build();
        let err = pipeline.run("700").unwrap_err();
        assert_eq!(err.message(), "Value should be >=0 and <=500");
    }

    #[test]
    fn test_min_and_max() {
        let pipeline = PipelineBuilder::<i64>::new().integer().min(10).max(20).build();

        assert_eq!(pipeline.run("10").unwrap(), 10);
        assert_eq!(pipeline.run("20").unwrap(), 20);
        assert_eq!(pipeline.run("9").unwrap_err().message(), "Value should be >=10");
        assert_eq!(pipeline.run("21").unwrap_err().message(), "Value should be <=20");
    }

    #[test]
    fn test_integer_parser_errors() {
        let pipeline = PipelineBuilder::<i32>::new().integer().build();

        assert_eq!(
            pipeline.run("").unwrap_err().message(),
            "String should not be empty"
        );
        assert_eq!(
            pipeline.run("12abc").unwrap_err().message(),
            "Failed to parse integer"
        );
        assert!(pipeline.run("4.5").is_err());
        assert!(pipeline.run("99999999999").is_err());
    }

    #[test]
    fn test_float_parser() {
        let pipeline = PipelineBuilder::<f32>::new().float().range(0.0, 200.0).build();

        assert_eq!(pipeline.run("22.8").unwrap(), 22.8);
        assert_eq!(pipeline.run("5").unwrap(), 5.0);
        assert_eq!(
            pipeline.run("abc").unwrap_err().message(),
            "Failed to parse float"
        );
        assert_eq!(
            pipeline.run("200.5").unwrap_err().message(),
            "Value should be >=0 and <=200"
        );
    }

    #[test]
    fn test_float_rejects_non_finite() {
        let pipeline = PipelineBuilder::<f32>::new().float().range(0.0, 200.0).build();

        for rejected in ["NaN", "nan", "inf", "-inf", "infinity"] {
            assert_eq!(
                pipeline.run(rejected).unwrap_err().message(),
                "Failed to parse float",
                "{rejected:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bounds_reject_nan_from_custom_parser() {
        let range = PipelineBuilder::<f64>::new()
            .parser(|_| Ok(f64::NAN))
            .range(0.0, 1.0)
            .build();
        assert!(range.run("x").is_err());

        let min = PipelineBuilder::<f64>::new().parser(|_| Ok(f64::NAN)).min(0.0).build();
        assert!(min.run("x").is_err());

        let max = PipelineBuilder::<f64>::new().parser(|_| Ok(f64::NAN)).max(1.0).build();
        assert!(max.run("x").is_err());
    }

    #[test]
    fn test_boolean_accepts_exact_tokens_only() {
        let pipeline = PipelineBuilder::<bool>::new().boolean().build();

        assert!(pipeline.run("1").unwrap());
        assert!(pipeline.run("true").unwrap());
        assert!(!pipeline.run("0").unwrap());
        assert!(!pipeline.run("false").unwrap());

        for rejected in ["True", "FALSE", "yes", "no", "2", " true"] {
            assert_eq!(
                pipeline.run(rejected).unwrap_err().message(),
                "Unsupported bool value (1/true/0/false)",
                "{rejected:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_custom_hooks() {
        let pipeline = PipelineBuilder::<String>::new()
            .trim()
            .custom(|value| {
                if value.contains(' ') {
                    Err("Value should not contain spaces".into())
                } else {
                    Ok(value)
                }
            })
            .custom_typed(|value| Ok(value.to_lowercase()))
            .build();

        assert_eq!(pipeline.run(" HostName ").unwrap(), "hostname");
        assert_eq!(
            pipeline.run("two words").unwrap_err().message(),
            "Value should not contain spaces"
        );
    }

    #[test]
    fn test_stages_may_repeat() {
        let pipeline = PipelineBuilder::<i32>::new()
            .integer()
            .min(0)
            .custom_typed(|v| Ok(v + 1))
            .min(5)
            .build();

        assert_eq!(pipeline.run("4").unwrap(), 5);
        assert!(pipeline.run("3").is_err());
    }
}
