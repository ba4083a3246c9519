//! Presentation layers driving the services.
//!
//! # Responsibility
//! - `console`: interactive customer menu over any line reader/writer.
//! - `product_controller`: direct-call product controller and demo sequence.
//!
//! # Invariants
//! - Only stdio failures end a session; repository failures are reported and
//!   the session continues.

use crate::repo::record_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod console;
pub mod product_controller;

pub type PresentationResult<T> = Result<T, PresentationError>;

/// Failure surfaced by a presentation entry point.
#[derive(Debug)]
pub enum PresentationError {
    Io(io::Error),
    Repo(RepoError),
}

impl Display for PresentationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console I/O failed: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PresentationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<io::Error> for PresentationError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for PresentationError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
