//! Types shared between discovery and the file-based engine entry point.

use std::fmt;
use std::path::PathBuf;

/// Outcome of an operation that depends on solver output existing yet
#[derive(Debug, Clone, PartialEq)]
pub enum Readiness<T> {
    Ready(T),
    /// Input files are not there (yet); callers may retry later
    NotReady(MissingInputs),
}

impl<T> Readiness<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Readiness::Ready(value) => Some(value),
            Readiness::NotReady(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Readiness<U> {
        match self {
            Readiness::Ready(value) => Readiness::Ready(f(value)),
            Readiness::NotReady(missing) => Readiness::NotReady(missing),
        }
    }
}

/// Human-readable descriptions of the inputs that could not be found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingInputs {
    pub missing: Vec<String>,
}

impl MissingInputs {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn push(&mut self, description: impl Into<String>) {
        self.missing.push(description.into());
    }
}

impl fmt::Display for MissingInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Has the mechanical solver started yet?",
            self.missing.join(", ")
        )
    }
}

/// Header and trace files of one solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFiles {
    pub header: PathBuf,
    pub trace: PathBuf,
}
