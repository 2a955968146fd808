//! Format registry and built-in format validators.
//!
//! A format is a named, pluggable secondary validator for string-typed
//! fields. Each validator either rejects the input or returns its canonical
//! form, which the engine writes back into the normalized value.
//!
//! Lookup of an unregistered format name is deliberately not an error: the
//! engine skips the check with a warning so entity shapes that predate a
//! given registry version keep validating.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Error produced when a string fails a format's own validation.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    /// Creates a new format error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A format validator: rejects the input or returns its canonical form.
pub type ValidatorFn = Box<dyn Fn(&str) -> Result<String, FormatError> + Send + Sync>;

/// Registry mapping format names to validator functions.
///
/// Registration is expected to happen during process initialization, before
/// any concurrent validation begins; afterwards the registry is treated as
/// read-only and is safe to share across validation calls.
///
/// # Example
///
/// ```rust
/// use schemas_validator::FormatRegistry;
///
/// let mut registry = FormatRegistry::with_builtins();
/// registry.register("uppercase", |s| Ok(s.to_uppercase()));
///
/// let validator = registry.lookup("uppercase").expect("registered");
/// assert_eq!(validator("abc").unwrap(), "ABC");
/// ```
pub struct FormatRegistry {
    validators: HashMap<String, ValidatorFn>,
}

impl FormatRegistry {
    /// Creates an empty registry with no formats.
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in formats: `date-time`, `date`,
    /// `time`, and `email`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("date-time", normalize_date_time);
        registry.register("date", normalize_date);
        registry.register("time", normalize_time);
        registry.register("email", check_email);
        registry
    }

    /// Registers a validator under a format name, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, validator: F)
    where
        F: Fn(&str) -> Result<String, FormatError> + Send + Sync + 'static,
    {
        self.validators.insert(name.into(), Box::new(validator));
    }

    /// Looks up the validator registered under a format name.
    pub fn lookup(&self, name: &str) -> Option<&ValidatorFn> {
        self.validators.get(name)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("FormatRegistry")
            .field("formats", &names)
            .finish()
    }
}

/// Validates an RFC-3339 timestamp and normalizes it to canonical UTC with
/// microsecond precision, folding any numeric offset to `Z`.
pub fn normalize_date_time(input: &str) -> Result<String, FormatError> {
    let parsed =
        DateTime::parse_from_rfc3339(input).map_err(|e| FormatError::new(e.to_string()))?;
    Ok(parsed
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.6fZ")
        .to_string())
}

/// Validates an ISO calendar date and normalizes it to zero-padded
/// `YYYY-MM-DD`.
pub fn normalize_date(input: &str) -> Result<String, FormatError> {
    let parsed =
        NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| FormatError::new(e.to_string()))?;
    Ok(parsed.format("%Y-%m-%d").to_string())
}

/// Validates an ISO time of day and normalizes it to `HH:MM:SS.ssssss`.
pub fn normalize_time(input: &str) -> Result<String, FormatError> {
    let parsed = NaiveTime::parse_from_str(input, "%H:%M:%S%.f")
        .map_err(|e| FormatError::new(e.to_string()))?;
    Ok(parsed.format("%H:%M:%S%.6f").to_string())
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Validates an email address syntactically; returns it unchanged.
pub fn check_email(input: &str) -> Result<String, FormatError> {
    if EMAIL_RE.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(FormatError::new("not a valid email address"))
    }
}
