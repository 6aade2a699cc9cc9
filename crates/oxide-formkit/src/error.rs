//! Error types for forms.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a form operation.
///
/// Registration problems (unknown field type, duplicate name, invalid style or
/// attribute key) are not reported here; they are recorded in the form's
/// [`ErrorLog`] and construction carries on.
#[derive(Debug, Error)]
pub enum FormError {
    /// The field type tag is not one of the known types.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    /// The theme name does not match a built-in theme.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// No template exists for this theme/kind pair.
    #[error("no template '{template}' in theme '{theme}'")]
    TemplateNotFound { theme: String, template: String },

    /// A custom template file exists but could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template could not be compiled.
    #[error("failed to parse template '{template}': {message}")]
    TemplateParse { template: String, message: String },

    /// A template failed while substituting values.
    #[error("failed to render template '{template}': {message}")]
    Render { template: String, message: String },

    /// A form definition file could not be read.
    #[error("failed to read form definition {path}: {source}")]
    DefinitionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A form definition is not valid JSON for the expected shape.
    #[error("invalid form definition: {0}")]
    Definition(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Flattens a tera error and its causes into one message.
///
/// Tera keeps the useful part (line, column, missing variable) in the source
/// chain, so the top-level message alone is rarely enough.
pub(crate) fn tera_message(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// A single registration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// What the entry is about: a field name or a type tag.
    pub subject: String,
    /// Description of the problem.
    pub message: String,
}

/// How [`ErrorLog::output`] reports its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogOutput {
    /// Return the entries as formatted text.
    Return,
    /// Send every entry to the `tracing` warn level and return nothing.
    #[default]
    Emit,
}

/// Registration problems collected while a form is built.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    entries: Vec<LogEntry>,
}

impl ErrorLog {
    /// Creates a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn add(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.entries.push(LogEntry {
            subject: subject.into(),
            message: message.into(),
        });
    }

    /// Returns whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entries in the order they were recorded.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns entries about a specific subject.
    pub fn for_subject<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a LogEntry> {
        self.entries.iter().filter(move |e| e.subject == subject)
    }

    /// Reports the log in the requested mode.
    pub fn output(&self, mode: LogOutput) -> String {
        match mode {
            LogOutput::Return => self.to_string(),
            LogOutput::Emit => {
                for entry in &self.entries {
                    tracing::warn!(subject = %entry.subject, "{}", entry.message);
                }
                String::new()
            }
        }
    }
}

impl std::fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} : {}", entry.subject, entry.message)?;
        }
        Ok(())
    }
}
