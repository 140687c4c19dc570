//! View models: tables, cells and the overview tab groups.
//!
//! Views are plain data. Rendering to widgets is left to the embedding application;
//! `Cell::render` produces the display text.

pub mod balances;
pub mod cell;
pub mod overview;
pub mod positions;
pub mod sort;
pub mod table;
pub mod trades;

pub use cell::Cell;
pub use overview::{MarketsTab, Overview, PositionsTab, TabGroup};
pub use sort::{compare_optional, sort_by_key, AbsentPolicy, SortDirection, SortSpec};
pub use table::{Column, Table, TableBody, DEFAULT_PAGE_SIZE};
