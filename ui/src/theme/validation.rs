use crate::error::AppError;
use crate::theme::types::{Style, ThemeId};
use crate::validation::Validator;
use thiserror::Error;

/// Longest string accepted as a theme key or style before parsing.
const MAX_VALUE_LEN: usize = 32;

/// Validation errors specific to theme identifiers and style variants.
///
/// Persisted values can be stale (an accent removed in a later release) or
/// simply corrupted, so every variant keeps the offending input for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeValidationError {
    #[error("{what} cannot be empty")]
    Empty { what: &'static str },

    #[error("'{value}' is too long (max {max} characters)")]
    TooLong { value: String, max: usize },

    #[error("'{value}' contains invalid characters")]
    InvalidCharacters { value: String },

    #[error("'{key}' is not a <mode>-<accent> theme key")]
    MalformedKey { key: String },

    #[error("unknown mode '{value}'")]
    UnknownMode { value: String },

    #[error("unknown accent '{value}'")]
    UnknownAccent { value: String },

    #[error("unknown style '{value}'")]
    UnknownStyle { value: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::MalformedKey { key } => format!(
                "Invalid theme: '{key}'\n\n\
                Themes are written as <mode>-<accent>, for example 'dark-blue'."
            ),
            ThemeValidationError::UnknownMode { value } => format!(
                "Invalid mode: '{value}'\n\n\
                Available modes: dark, light."
            ),
            ThemeValidationError::UnknownAccent { value } => format!(
                "Invalid accent: '{value}'\n\n\
                Available accents: purple, blue, green."
            ),
            ThemeValidationError::UnknownStyle { value } => format!(
                "Invalid style: '{value}'\n\n\
                Available styles: default, monochromatic, pixelated."
            ),
            other => other.to_string(),
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Theme(error.user_message())
    }
}

fn check_shape(input: &str, what: &'static str) -> Result<(), ThemeValidationError> {
    if input.is_empty() {
        return Err(ThemeValidationError::Empty { what });
    }

    if input.len() > MAX_VALUE_LEN {
        return Err(ThemeValidationError::TooLong {
            value: input.to_string(),
            max: MAX_VALUE_LEN,
        });
    }

    if !input.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
        return Err(ThemeValidationError::InvalidCharacters {
            value: input.to_string(),
        });
    }

    Ok(())
}

/// Validator for persisted theme keys such as `dark-blue`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThemeKeyValidator;

impl ThemeKeyValidator {
    /// Validate and return the typed identifier.
    pub fn parse(&self, input: &str) -> Result<ThemeId, ThemeValidationError> {
        self.validate(input)?;
        input.parse()
    }
}

impl Validator<str> for ThemeKeyValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        check_shape(input, "Theme")?;
        input.parse::<ThemeId>().map(|_| ())
    }
}

/// Validator for persisted style variants such as `pixelated`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleValidator;

impl StyleValidator {
    pub fn parse(&self, input: &str) -> Result<Style, ThemeValidationError> {
        self.validate(input)?;
        input.parse()
    }
}

impl Validator<str> for StyleValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        check_shape(input, "Style")?;
        input.parse::<Style>().map(|_| ())
    }
}
