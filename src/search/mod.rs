// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branch-and-bound depth-first search over the toroidal matrix.
//!
//! The search repeatedly picks the live column with the fewest candidate
//! rows, tries each row that covers it, and recurses with that row's whole
//! column footprint spliced out of the structure. Every branch is undone on
//! the way back up by resuming the removed columns in exact reverse order,
//! so the matrix a caller gets back after a run is indistinguishable from
//! the one it passed in.
//!
//! Two prunes keep the exponential tree in check:
//!
//! - a depth cut: a partial path already as long as the incumbent can never
//!   strictly improve on it;
//! - an admissible lower bound ([`Search::lower_bound`]) on the rows still
//!   required: one selected row satisfies at most the columns it
//!   intersects, so the number of greedily chosen mutually unreachable
//!   column groups is a floor on the remaining selection size.
//!
//! Both cuts use strict comparison, so the first complete cover found at
//! the minimal depth is the one reported.

pub mod observer;

pub use observer::{NullObserver, SearchObserver};

use crate::matrix::Matrix;
use crate::statistics::{Counter, Statistics};

/// Incumbent depth before any complete cover has been found.
const UNBOUNDED: usize = usize::MAX;

/// Search state: the partial path, the incumbent, and scratch storage.
///
/// A `Search` owns no matrix; it borrows one per run. The incumbent
/// persists across runs and is cleared only by [`Search::reset`], so a
/// kernel reusing its matrix via `init` must reset the search too (the
/// [`crate::solver::Solver`] facade does both together).
#[derive(Debug, Clone)]
pub struct Search {
    /// Rows selected along the current branch.
    path: Vec<usize>,
    /// Best complete cover found so far.
    best_path: Vec<usize>,
    /// Length of `best_path`, [`UNBOUNDED`] until a cover is found.
    best_depth: usize,
    /// Scratch flags for the lower-bound sweep, indexed by column id.
    marks: Vec<bool>,
    /// Counters incremented as the search runs.
    pub statistics: Statistics,
}

impl Search {
    pub fn new() -> Self {
        Search {
            path: Vec::new(),
            best_path: Vec::new(),
            best_depth: UNBOUNDED,
            marks: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Forget the incumbent and zero the counters, as for a fresh instance.
    pub fn reset(&mut self) {
        self.path.clear();
        self.best_path.clear();
        self.best_depth = UNBOUNDED;
        self.statistics.reset();
    }

    /// Run the search to exhaustion over `matrix`.
    ///
    /// The matrix must be fully built (`init` plus all `link` calls). On
    /// return the matrix is restored to its pre-search state and the best
    /// cover found, if any, is available via [`Search::solution`].
    pub fn run(&mut self, matrix: &mut Matrix) {
        self.run_observed(matrix, &mut NullObserver);
    }

    /// As [`Search::run`], with callbacks on descent and on incumbent
    /// replacement.
    pub fn run_observed(&mut self, matrix: &mut Matrix, observer: &mut dyn SearchObserver) {
        self.path.clear();
        self.marks.clear();
        self.marks.resize(matrix.cols() + 1, false);
        self.dance(matrix, observer, 0);
        debug_assert!(self.path.is_empty(), "unbalanced push/pop in search");
    }

    /// The best cover found by runs since the last reset.
    ///
    /// `None` means no complete cover exists; `Some(&[])` is the valid
    /// empty cover of a matrix with no columns.
    pub fn solution(&self) -> Option<&[usize]> {
        if self.best_depth == UNBOUNDED {
            None
        } else {
            Some(&self.best_path)
        }
    }

    /// One node of the branch-and-bound tree.
    fn dance(&mut self, matrix: &mut Matrix, observer: &mut dyn SearchObserver, depth: usize) {
        observer.on_descend(depth);
        self.statistics.increment(Counter::Nodes);

        if depth + self.lower_bound(matrix) > self.best_depth || depth > self.best_depth {
            self.statistics.increment(Counter::Prunes);
            return;
        }

        if matrix.is_covered() {
            // Strict improvement only: the first cover found at the minimal
            // depth stays the incumbent.
            if self.best_depth > depth {
                self.best_depth = depth;
                self.best_path.clear();
                self.best_path.extend_from_slice(&self.path);
                self.statistics.increment(Counter::Incumbents);
                observer.on_incumbent(&self.best_path);
            }
            return;
        }

        // Branch on the live column with the fewest candidates, ties to the
        // earliest in ring order.
        let Some(chosen) = matrix.live_columns().min_by_key(|&col| matrix.size(col)) else {
            return;
        };

        let mut node = matrix.down(chosen);
        while node != chosen {
            // Selecting this node's row satisfies its entire column
            // footprint. Removing from `node` rather than the header keeps
            // the node's own row ring intact for the nested walk.
            matrix.remove(node);
            let mut other = matrix.right(node);
            while other != node {
                matrix.remove(other);
                other = matrix.right(other);
            }

            self.path.push(matrix.row_of(node));
            self.dance(matrix, observer, depth + 1);
            self.path.pop();

            // Resume in exact reverse order of removal.
            let mut other = matrix.left(node);
            while other != node {
                matrix.resume(other);
                other = matrix.left(other);
            }
            matrix.resume(node);

            node = matrix.down(node);
        }
    }

    /// Admissible lower bound on the rows still needed to satisfy every
    /// live column.
    ///
    /// Greedy sweep: take the first still-marked live column, charge one
    /// hypothetical row for it, and unmark every column reachable through
    /// any row intersecting it. No single row can satisfy columns from two
    /// different sweeps, so the sweep count never overestimates. Only the
    /// scratch marks are touched; the rings are read, never written.
    fn lower_bound(&mut self, matrix: &Matrix) -> usize {
        for mark in self.marks.iter_mut() {
            *mark = false;
        }
        for col in matrix.live_columns() {
            self.marks[col] = true;
        }

        let mut bound = 0;
        for col in matrix.live_columns() {
            if !self.marks[col] {
                continue;
            }
            bound += 1;
            self.marks[col] = false;
            let mut node = matrix.down(col);
            while node != col {
                let mut other = matrix.right(node);
                while other != node {
                    self.marks[matrix.col_of(other)] = false;
                    other = matrix.right(other);
                }
                node = matrix.down(node);
            }
        }
        bound
    }
}

impl Default for Search {
    // A derived Default would zero `best_depth`, which reads as "a cover of
    // length zero was already found".
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(rows: usize, cols: usize, incidences: &[(usize, usize)]) -> Matrix {
        let mut matrix = Matrix::new();
        matrix.init(rows, cols).unwrap();
        for &(row, col) in incidences {
            matrix.link(row, col).unwrap();
        }
        matrix
    }

    #[test]
    fn lower_bound_counts_independent_column_groups() {
        // Columns 1 and 2 are joined by row 1; column 3 stands alone.
        let matrix = build(2, 3, &[(1, 1), (1, 2), (2, 3)]);
        let mut search = Search::new();
        search.marks.resize(matrix.cols() + 1, false);
        assert_eq!(search.lower_bound(&matrix), 2);
    }

    #[test]
    fn lower_bound_is_zero_when_covered() {
        let matrix = build(0, 0, &[]);
        let mut search = Search::new();
        search.marks.resize(matrix.cols() + 1, false);
        assert_eq!(search.lower_bound(&matrix), 0);
    }

    #[test]
    fn empty_matrix_is_covered_by_the_empty_selection() {
        let mut matrix = build(0, 0, &[]);
        let mut search = Search::new();
        search.run(&mut matrix);
        assert_eq!(search.solution(), Some(&[][..]));
    }

    #[test]
    fn uncoverable_column_yields_no_solution() {
        // Column 3 has no incident row.
        let mut matrix = build(2, 3, &[(1, 1), (2, 2)]);
        let mut search = Search::new();
        search.run(&mut matrix);
        assert_eq!(search.solution(), None);
    }

    #[test]
    fn matrix_is_restored_after_a_run() {
        let mut matrix = build(3, 3, &[(1, 1), (1, 2), (2, 2), (2, 3), (3, 3)]);
        let pristine = matrix.clone();
        let mut search = Search::new();
        search.run(&mut matrix);
        assert!(search.solution().is_some());
        for node in 0..matrix.node_count() {
            assert_eq!(matrix.up(node), pristine.up(node));
            assert_eq!(matrix.down(node), pristine.down(node));
            assert_eq!(matrix.left(node), pristine.left(node));
            assert_eq!(matrix.right(node), pristine.right(node));
        }
    }

    #[test]
    fn first_minimal_cover_wins_ties() {
        // Both rows cover both columns. Candidates iterate newest link
        // first, so row 2 is found first and row 1 must not displace it.
        let mut matrix = build(2, 2, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut search = Search::new();
        search.run(&mut matrix);
        assert_eq!(search.solution(), Some(&[2][..]));
    }

    #[test]
    fn statistics_track_the_run() {
        let mut matrix = build(2, 2, &[(1, 1), (2, 2)]);
        let mut search = Search::new();
        search.run(&mut matrix);
        assert_eq!(search.solution(), Some(&[1, 2][..]));
        assert!(search.statistics.get(Counter::Nodes) >= 3);
        assert_eq!(search.statistics.get(Counter::Incumbents), 1);
    }
}
