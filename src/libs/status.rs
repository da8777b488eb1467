//! Per-section load state for composite views.
//!
//! Each data category of a composite view is tracked independently, so a
//! single failed fetch only replaces its own section with an error panel.

use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Section<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Section<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Section::Ready(value),
            Err(e) => Section::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Section::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Section::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Section<U> {
        match self {
            Section::Loading => Section::Loading,
            Section::Failed(reason) => Section::Failed(reason),
            Section::Ready(value) => Section::Ready(f(value)),
        }
    }
}
