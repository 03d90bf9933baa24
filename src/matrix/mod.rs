// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Toroidal sparse-matrix structure for the covering search.
//!
//! Every incidence (row, column) is a node in a single arena, linked by
//! index into two independent circular doubly-linked rings: a vertical ring
//! per column and a horizontal ring per row. Arena slots `0..=cols` are the
//! column headers; slot `0` is the synthetic root whose horizontal ring
//! holds exactly the columns not yet satisfied.
//!
//! # Memory model
//!
//! Links are arena indices rather than pointers, so ring splices stay
//! branch-free while the structure remains a single owned allocation.
//! Vertical rings are frozen after construction; [`Matrix::remove`] and
//! [`Matrix::resume`] splice only the horizontal links. That asymmetry is
//! the whole trick: a removed node keeps its own links intact, so replaying
//! the removals in exact reverse (LIFO) order restores the structure without
//! ever consulting an undo log.

use crate::errors::MatrixError;

/// Upper bound on the declared row and column counts.
pub const MAX_DIMENSION: usize = 4096;

/// Upper bound on arena slots, headers included.
///
/// Worst case a dense matrix needs `rows * cols + cols + 1` slots; callers
/// registering more incidences than this get [`MatrixError::NodesExhausted`]
/// from [`Matrix::link`] before any out-of-bounds access can happen.
pub const MAX_NODES: usize = 1 << 22;

/// One incidence, or one column header (headers have `row == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    up: usize,
    down: usize,
    left: usize,
    right: usize,
    row: usize,
    col: usize,
}

/// The toroidal structure: node arena, per-column sizes, per-row anchors.
///
/// Construction protocol: [`Matrix::init`] once, then [`Matrix::link`] once
/// per true incidence, then hand the matrix to the search. `init` is
/// re-callable to reuse the allocation for a new problem.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Node arena. Slots `0..=cols` are headers, slot 0 the root.
    nodes: Vec<Node>,
    /// Vertical ring population per column (index `1..=cols`).
    sizes: Vec<usize>,
    /// One representative node per row, `None` until the row's first link.
    /// Consulted only during construction.
    anchors: Vec<Option<usize>>,
}

impl Matrix {
    /// Create an empty matrix (zero rows, zero columns).
    ///
    /// Equivalent to `init(0, 0)`: the live-column ring is empty, so a
    /// search run against it reports the empty selection as a complete
    /// cover.
    pub fn new() -> Self {
        let mut matrix = Matrix {
            rows: 0,
            cols: 0,
            nodes: Vec::new(),
            sizes: Vec::new(),
            anchors: Vec::new(),
        };
        matrix
            .init(0, 0)
            .unwrap_or_else(|_| unreachable!("zero dimensions are always in capacity"));
        matrix
    }

    /// Reset the structure for `rows` candidate rows and `cols` constraint
    /// columns.
    ///
    /// Headers `1..=cols` are linked circularly through the root `0`, each
    /// column's vertical ring initially containing only its header. All row
    /// anchors become absent.
    pub fn init(&mut self, rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(MatrixError::CapacityExceeded {
                rows,
                cols,
                max_dimension: MAX_DIMENSION,
            });
        }
        self.rows = rows;
        self.cols = cols;

        self.nodes.clear();
        for i in 0..=cols {
            self.nodes.push(Node {
                up: i,
                down: i,
                left: if i == 0 { cols } else { i - 1 },
                right: if i == cols { 0 } else { i + 1 },
                row: 0,
                col: i,
            });
        }

        self.sizes.clear();
        self.sizes.resize(cols + 1, 0);
        self.anchors.clear();
        self.anchors.resize(rows + 1, None);
        Ok(())
    }

    /// Register one incidence of `row` in `col`.
    ///
    /// The new node enters `col`'s vertical ring directly below the header
    /// (so candidate iteration visits the most recently linked row first)
    /// and `row`'s horizontal ring directly after the anchor. Must be called
    /// once per true incidence, all calls before the first search.
    pub fn link(&mut self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row == 0 || row > self.rows {
            return Err(MatrixError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        if col == 0 || col > self.cols {
            return Err(MatrixError::ColumnOutOfRange {
                col,
                cols: self.cols,
            });
        }
        if self.nodes.len() >= MAX_NODES {
            return Err(MatrixError::NodesExhausted { limit: MAX_NODES });
        }

        let node = self.nodes.len();

        // Vertical: splice in between the header and its current downward
        // neighbour.
        let below_header = self.nodes[col].down;
        self.nodes.push(Node {
            up: col,
            down: below_header,
            left: node,
            right: node,
            row,
            col,
        });
        self.nodes[below_header].up = node;
        self.nodes[col].down = node;
        self.sizes[col] += 1;

        // Horizontal: a fresh row starts as a singleton ring, otherwise the
        // node goes immediately after the anchor.
        match self.anchors[row] {
            None => self.anchors[row] = Some(node),
            Some(anchor) => {
                let after_anchor = self.nodes[anchor].right;
                self.nodes[node].right = after_anchor;
                self.nodes[after_anchor].left = node;
                self.nodes[node].left = anchor;
                self.nodes[anchor].right = node;
            }
        }
        Ok(())
    }

    /// Splice every node of `start`'s vertical ring, except `start` itself,
    /// out of its horizontal ring.
    ///
    /// Started at a column header this satisfies the column: each row
    /// through it stops being a candidate elsewhere. Started at an incidence
    /// node the walk also reaches the column's header, splicing the column
    /// out of the live-column ring while keeping `start`'s own row ring
    /// walkable.
    ///
    /// Each call must eventually be undone by [`Matrix::resume`] on the same
    /// handle, and nested calls must be resumed in exact reverse order. An
    /// unmatched `remove` permanently corrupts the structure.
    pub fn remove(&mut self, start: usize) {
        let mut i = self.nodes[start].down;
        while i != start {
            let left = self.nodes[i].left;
            let right = self.nodes[i].right;
            self.nodes[right].left = left;
            self.nodes[left].right = right;
            i = self.nodes[i].down;
        }
    }

    /// Exact inverse of [`Matrix::remove`]: walk `start`'s vertical ring
    /// upward, re-splicing every node back into its horizontal ring.
    pub fn resume(&mut self, start: usize) {
        let mut i = self.nodes[start].up;
        while i != start {
            let left = self.nodes[i].left;
            let right = self.nodes[i].right;
            self.nodes[right].left = i;
            self.nodes[left].right = i;
            i = self.nodes[i].up;
        }
    }

    /// Declared row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Declared column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total arena slots, headers included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when no unsatisfied columns remain.
    pub fn is_covered(&self) -> bool {
        self.nodes[0].right == 0
    }

    /// Vertical ring population of `col`, fixed at construction time.
    ///
    /// `remove` never touches vertical rings, so this stays exact for the
    /// whole search.
    pub fn size(&self, col: usize) -> usize {
        self.sizes[col]
    }

    /// Owning row id of an incidence node (0 for headers).
    #[inline]
    pub fn row_of(&self, node: usize) -> usize {
        self.nodes[node].row
    }

    /// Owning column id of a node.
    #[inline]
    pub fn col_of(&self, node: usize) -> usize {
        self.nodes[node].col
    }

    #[inline]
    pub fn up(&self, node: usize) -> usize {
        self.nodes[node].up
    }

    #[inline]
    pub fn down(&self, node: usize) -> usize {
        self.nodes[node].down
    }

    #[inline]
    pub fn left(&self, node: usize) -> usize {
        self.nodes[node].left
    }

    #[inline]
    pub fn right(&self, node: usize) -> usize {
        self.nodes[node].right
    }

    /// Iterate the headers of the currently unsatisfied columns, in ring
    /// order from the root.
    pub fn live_columns(&self) -> LiveColumns<'_> {
        LiveColumns {
            matrix: self,
            current: self.nodes[0].right,
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the live-column ring, yielding header ids.
pub struct LiveColumns<'a> {
    matrix: &'a Matrix,
    current: usize,
}

impl Iterator for LiveColumns<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == 0 {
            return None;
        }
        let col = self.current;
        self.current = self.matrix.right(col);
        Some(col)
    }
}
