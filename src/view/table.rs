//! Paginated, sortable table model.

use super::cell::Cell;
use super::sort::{SortDirection, SortSpec};
use crate::error::{QueryError, TableError};
use crate::query::QueryState;
use chrono::{DateTime, Utc};

/// Rows per page when a table does not pick its own size.
pub const DEFAULT_PAGE_SIZE: usize = 5;

// ─── Column ──────────────────────────────────────────────────────────────────

pub struct Column<R> {
    pub id: &'static str,
    pub header: &'static str,
    pub accessor: fn(&R) -> Cell,
    pub sort: Option<SortSpec<R>>,
}

impl<R> Column<R> {
    pub fn new(id: &'static str, header: &'static str, accessor: fn(&R) -> Cell) -> Self {
        Self {
            id,
            header,
            accessor,
            sort: None,
        }
    }

    pub fn sortable(mut self, sort: SortSpec<R>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.sort.is_some()
    }

    pub fn cell(&self, row: &R) -> Cell {
        (self.accessor)(row)
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header,
            accessor: self.accessor,
            sort: self.sort.clone(),
        }
    }
}

// ─── Table ───────────────────────────────────────────────────────────────────

pub struct Table<R> {
    rows: Vec<R>,
    columns: Vec<Column<R>>,
    page_size: usize,
    sorted_by: Option<(&'static str, SortDirection)>,
}

impl<R> Table<R> {
    pub fn new(rows: Vec<R>, columns: Vec<Column<R>>, page_size: usize) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        Ok(Self {
            rows,
            columns,
            page_size,
            sorted_by: None,
        })
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `ceil(rows / page_size)`; zero for an empty table.
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size)
    }

    /// Rows of page `index` (zero-based). `None` past the last page.
    pub fn page(&self, index: usize) -> Option<&[R]> {
        if index >= self.page_count() {
            return None;
        }
        let start = index * self.page_size;
        let end = (start + self.page_size).min(self.rows.len());
        Some(&self.rows[start..end])
    }

    /// The column and direction of the last applied sort.
    pub fn sorted_by(&self) -> Option<(&'static str, SortDirection)> {
        self.sorted_by
    }

    /// Sort rows by column `id`. Returns `false` (rows untouched) if the column does
    /// not exist or is not sortable.
    pub fn sort_by(&mut self, id: &str, direction: SortDirection) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.id == id) else {
            return false;
        };
        let Some(sort) = column.sort.clone() else {
            return false;
        };
        sort.sort(&mut self.rows, direction);
        self.sorted_by = Some((column.id, direction));
        true
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    pub fn cells(&self, row: &R) -> Vec<Cell> {
        self.columns.iter().map(|c| c.cell(row)).collect()
    }

    /// Rendered text of page `index`, one `Vec` per row.
    pub fn render_page(&self, index: usize, now: DateTime<Utc>) -> Option<Vec<Vec<String>>> {
        let rows = self.page(index)?;
        Some(
            rows.iter()
                .map(|row| {
                    self.columns
                        .iter()
                        .map(|c| c.cell(row).render(now))
                        .collect()
                })
                .collect(),
        )
    }
}

// ─── TableBody ───────────────────────────────────────────────────────────────

/// What a table shows in place of, or as, its rows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<R> {
    /// The query is disabled or has not run.
    NotFetched,
    Loading,
    /// Fetched successfully with no rows.
    Empty,
    Error(QueryError),
    Rows(Vec<R>),
}

impl<R> TableBody<R> {
    pub fn from_state(state: QueryState<Vec<R>>) -> Self {
        Self::from_state_with(state, |rows| rows)
    }

    /// Map data rows with `f`; a mapping that produces no rows is `Empty`.
    pub fn from_state_with<T>(state: QueryState<T>, f: impl FnOnce(T) -> Vec<R>) -> Self {
        match state {
            QueryState::Idle => TableBody::NotFetched,
            QueryState::Loading => TableBody::Loading,
            QueryState::Empty => TableBody::Empty,
            QueryState::Error(e) => TableBody::Error(e),
            QueryState::Data(data) => {
                let rows = f(data);
                if rows.is_empty() {
                    TableBody::Empty
                } else {
                    TableBody::Rows(rows)
                }
            }
        }
    }

    pub fn rows(&self) -> &[R] {
        match self {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn into_rows(self) -> Vec<R> {
        match self {
            TableBody::Rows(rows) => rows,
            _ => Vec::new(),
        }
    }
}
