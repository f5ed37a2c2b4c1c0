//! Grid layout for the command list.
//!
//! Maps an ordered list of commands onto a grid of columns, one pane per
//! command. Columns are never empty: when there are fewer commands than
//! requested columns, the column count shrinks to match. The last row (or
//! column, for [`FillOrder::ColumnMajor`]) may be only partially filled, and
//! no placeholder panes are created for the missing cells.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use it2grid::layout::{layout, Cell, FillOrder};
//!
//! let cmds: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
//! let (grid, assignment) = layout(&cmds, NonZeroUsize::new(2).unwrap(), FillOrder::RowMajor);
//!
//! assert_eq!((grid.columns, grid.rows), (2, 3));
//! assert_eq!(assignment.cell(4), Some(Cell { column: 0, row: 2 }));
//! assert_eq!(assignment.column_heights(), vec![3, 2]);
//! ```

use serde::Deserialize;
use std::num::NonZeroUsize;

/// How commands are distributed across the grid.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FillOrder {
    /// Fill left to right, then wrap to the next row.
    ///
    /// Every column is used; the right-most columns are the short ones.
    #[default]
    #[value(name = "row")]
    #[serde(rename = "row")]
    RowMajor,
    /// Fill each column top to bottom before moving to the next.
    ///
    /// Only the last column can be short, but fewer columns than requested
    /// may end up being used (5 commands over 4 columns uses 3 columns of 2).
    #[value(name = "column")]
    #[serde(rename = "column")]
    ColumnMajor,
}

/// Dimensions of the pane grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Columns actually used.
    pub columns: usize,
    /// Height of the tallest column.
    pub rows: usize,
}

/// A grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Zero-based column, left to right.
    pub column: usize,
    /// Zero-based row, top to bottom.
    pub row: usize,
}

/// Grid position of every command, indexed by command index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneAssignment {
    cells: Vec<Cell>,
    columns: usize,
}

impl PaneAssignment {
    /// Cell assigned to the command at `index`.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells, in command order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of placed commands.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no commands were placed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of panes stacked in each column, left to right.
    pub fn column_heights(&self) -> Vec<usize> {
        let mut heights = vec![0; self.columns];
        for cell in &self.cells {
            heights[cell.column] = heights[cell.column].max(cell.row + 1);
        }
        heights
    }

    /// Command indices in pane focus order.
    ///
    /// Focus visits column 0 from top to bottom, then column 1, and so on.
    pub fn traversal(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.cells.len()).collect();
        order.sort_by_key(|&i| self.cells[i]);
        order
    }
}

/// Place `commands` onto a grid with at most `columns` columns.
pub fn layout(
    commands: &[String],
    columns: NonZeroUsize,
    fill: FillOrder,
) -> (GridSpec, PaneAssignment) {
    let n = commands.len();
    let columns = columns.get().min(n);
    if columns == 0 {
        let empty = PaneAssignment {
            cells: Vec::new(),
            columns: 0,
        };
        return (GridSpec { columns: 0, rows: 0 }, empty);
    }

    let rows = n.div_ceil(columns);
    let (columns, cells) = match fill {
        FillOrder::RowMajor => {
            let cells = (0..n)
                .map(|i| Cell {
                    column: i % columns,
                    row: i / columns,
                })
                .collect();
            (columns, cells)
        }
        FillOrder::ColumnMajor => {
            let cells = (0..n)
                .map(|i| Cell {
                    column: i / rows,
                    row: i % rows,
                })
                .collect();
            (n.div_ceil(rows), cells)
        }
    };

    (GridSpec { columns, rows }, PaneAssignment { cells, columns })
}
