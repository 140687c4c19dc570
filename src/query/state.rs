//! Query result states.

use crate::error::QueryError;

/// Outcome of a query as seen by views.
///
/// `Idle` (never fetched, e.g. gated off), `Loading` (in flight), `Empty` (fetched, no
/// rows), `Error` (fetch failed) and `Data` stay distinct all the way to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Empty,
    Error(QueryError),
    Data(T),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T> QueryState<T> {
    /// `Some(v)` → `Data(v)`, `None` → `Empty`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => QueryState::Data(v),
            None => QueryState::Empty,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Data(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            QueryState::Data(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            QueryState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, QueryState::Empty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    /// Resolved: fetched with or without rows, or failed.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            QueryState::Empty | QueryState::Error(_) | QueryState::Data(_)
        )
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Empty => QueryState::Empty,
            QueryState::Error(e) => QueryState::Error(e),
            QueryState::Data(v) => QueryState::Data(f(v)),
        }
    }

    pub fn as_ref(&self) -> QueryState<&T> {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Empty => QueryState::Empty,
            QueryState::Error(e) => QueryState::Error(e.clone()),
            QueryState::Data(v) => QueryState::Data(v),
        }
    }
}

impl<T: Clone + Default> QueryState<T> {
    /// The data, or `T::default()` for every non-`Data` state.
    pub fn data_or_default(&self) -> T {
        self.data().cloned().unwrap_or_default()
    }
}

/// `Some(v)` for a non-empty vec. Lists go through this before becoming `Data`.
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
