use std::fmt::Display;
use tracing::{error, info};

/// Outcome of a read against the database.
///
/// Callers of the HTTP API only ever see a value or its absence, so both
/// `Missing` and `Failed` flatten to `None` in [`Lookup::into_option`]. The
/// distinction is kept here so it can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    Failed(String),
}

impl<T> Lookup<T> {
    /// Wraps a single-row query result. `what` names the thing looked up, for logs.
    pub fn from_row<E: Display>(result: Result<Option<T>, E>, what: &str) -> Self {
        match result {
            Ok(Some(row)) => Self::Found(row),
            Ok(None) => {
                info!("No {what} found");
                Self::Missing
            }
            Err(e) => {
                error!("Database error while loading {what}: {e}");
                Self::Failed(e.to_string())
            }
        }
    }

    pub fn map<U, F>(self, f: F) -> Lookup<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::Missing => Lookup::Missing,
            Self::Failed(e) => Lookup::Failed(e),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing | Self::Failed(_) => None,
        }
    }
}

impl<T> Lookup<Vec<T>> {
    /// Wraps a multi-row query result; an empty result counts as missing.
    pub fn from_rows<E: Display>(result: Result<Vec<T>, E>, what: &str) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => {
                info!("No {what} found");
                Self::Missing
            }
            Ok(rows) => Self::Found(rows),
            Err(e) => {
                error!("Database error while loading {what}: {e}");
                Self::Failed(e.to_string())
            }
        }
    }
}
