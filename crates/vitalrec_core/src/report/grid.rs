//! Row-major column grid layout.
//!
//! # Responsibility
//! - Partition an ordered row sequence into fixed-width display rows for
//!   dense statistics tables.
//!
//! # Invariants
//! - Concatenating the output rows reproduces the input exactly; this is
//!   a partition, not a reordering.
//! - Only the last row may be short; rows are never padded with
//!   placeholder cells.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One display row of at most `columns` cells.
pub type GridRow<T> = Vec<T>;

/// Failure for a column count the table markup cannot render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Fewer than one display column requested.
    InvalidColumnCount(usize),
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColumnCount(columns) => {
                write!(f, "invalid column count {columns}: a grid needs at least 1 column")
            }
        }
    }
}

impl Error for LayoutError {}

/// Lays out `cells` into rows of `columns`, left-to-right then down.
///
/// Replicating a header template across a row is the same operation
/// applied to a repeated single cell; there is no separate header path.
///
/// # Errors
/// - `InvalidColumnCount` when `columns < 1`.
pub fn layout<I, T>(cells: I, columns: usize) -> Result<Vec<GridRow<T>>, LayoutError>
where
    I: IntoIterator<Item = T>,
{
    if columns < 1 {
        return Err(LayoutError::InvalidColumnCount(columns));
    }

    let mut grid = Vec::new();
    let mut row: GridRow<T> = Vec::with_capacity(columns);
    for cell in cells {
        row.push(cell);
        if row.len() == columns {
            grid.push(std::mem::replace(&mut row, Vec::with_capacity(columns)));
        }
    }
    if !row.is_empty() {
        grid.push(row);
    }
    Ok(grid)
}
