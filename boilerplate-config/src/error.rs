//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Unified configuration error type.
///
/// `MissingField`, `InvalidEnum` and `OutOfRange` are semantic failures raised by
/// [`ObservabilityConfig::validate`](crate::ObservabilityConfig::validate).
/// `Schema` carries the structural failures found by the loader's annotations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field was empty at validation time.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field holds a value outside its closed set.
    #[error("invalid {field}: {value:?} (must be one of: {})", .allowed.join(", "))]
    InvalidEnum {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A numeric or duration field violates its bound.
    #[error("{0} is out of range")]
    OutOfRange(&'static str),

    /// Structural validation of the loaded configuration failed.
    #[error("Invalid configuration:\n{}", format_validation_errors(.0))]
    Schema(#[source] ValidationErrors),

    /// Figment parsing error.
    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),

    /// File not found error.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The process-wide configuration has already been published.
    #[error("Configuration already installed")]
    AlreadyInstalled,
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Schema(errors)
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut output = String::new();
    write_validation_errors(&mut output, "", errors);
    output
}

fn write_validation_errors(output: &mut String, prefix: &str, errors: &ValidationErrors) {
    use std::fmt::Write;

    for (field, kind) in errors.errors() {
        let path = format!("{prefix}{}", wire_key(&field.to_string()));
        match kind {
            ValidationErrorsKind::Field(errors) => {
                let _ = writeln!(output, "Field '{}':", path);
                for error in errors {
                    let message = match &error.message {
                        Some(msg) => msg.to_string(),
                        None => error.code.to_string(),
                    };
                    let _ = writeln!(output, "  - {}", message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                write_validation_errors(output, &format!("{path}."), nested);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    write_validation_errors(output, &format!("{path}[{index}]."), nested);
                }
            }
        }
    }
}

/// Serde name of a section whose Rust field name differs.
fn wire_key(field: &str) -> &str {
    match field {
        "error_tracking" => "new_relic",
        "health_checks" => "health_check",
        other => other,
    }
}
