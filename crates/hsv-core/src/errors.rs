//! Structured error types shared across HSV crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`HsvError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (argument values, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint, usually the usage line of the rejected command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the hyperstate engine and its shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum HsvError {
    /// An engine command was issued before a layer was initialised.
    #[error("not initialized: {0}")]
    NotInitialized(ErrorInfo),
    /// The requested topology tag is not recognised.
    #[error("unsupported topology: {0}")]
    UnsupportedTopology(ErrorInfo),
    /// Wrong count, type or range of arguments.
    #[error("invalid arguments: {0}")]
    InvalidArguments(ErrorInfo),
    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl HsvError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HsvError::NotInitialized(info)
            | HsvError::UnsupportedTopology(info)
            | HsvError::InvalidArguments(info)
            | HsvError::Config(info) => info,
        }
    }

    /// Shorthand for an [`HsvError::InvalidArguments`] with the given code.
    pub fn invalid(code: impl Into<String>, message: impl Into<String>) -> Self {
        HsvError::InvalidArguments(ErrorInfo::new(code, message))
    }

    /// Attaches a usage hint to the payload, keeping the family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        match self {
            HsvError::NotInitialized(info) => HsvError::NotInitialized(info.with_hint(hint)),
            HsvError::UnsupportedTopology(info) => {
                HsvError::UnsupportedTopology(info.with_hint(hint))
            }
            HsvError::InvalidArguments(info) => HsvError::InvalidArguments(info.with_hint(hint)),
            HsvError::Config(info) => HsvError::Config(info.with_hint(hint)),
        }
    }
}
