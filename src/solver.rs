// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kernel facade combining the matrix and the search.
//!
//! A [`Solver`] is the intended external interface: construct once, then
//! per problem call [`Solver::init`], [`Solver::link`] for every incidence,
//! [`Solver::solve`], and read the result. `init` resets both tiers
//! together, so a reused solver behaves exactly like a fresh one.
//!
//! The solver is deliberately single-threaded: the rings are mutated in
//! place during a run and restored before it returns, so a run must finish
//! before the structure is touched again.

use crate::errors::MatrixError;
use crate::matrix::Matrix;
use crate::search::{Search, SearchObserver};
use crate::statistics::Statistics;

/// One covering-problem kernel instance.
#[derive(Debug, Clone)]
pub struct Solver {
    matrix: Matrix,
    search: Search,
}

impl Solver {
    /// Create a solver for the empty problem (no rows, no columns).
    pub fn new() -> Self {
        Solver {
            matrix: Matrix::new(),
            search: Search::new(),
        }
    }

    /// Reset for a problem with `rows` candidate rows and `cols` constraint
    /// columns, forgetting any previous incidences and incumbent.
    pub fn init(&mut self, rows: usize, cols: usize) -> Result<(), MatrixError> {
        self.matrix.init(rows, cols)?;
        self.search.reset();
        Ok(())
    }

    /// Register one incidence: `row` covers `col`.
    pub fn link(&mut self, row: usize, col: usize) -> Result<(), MatrixError> {
        self.matrix.link(row, col)
    }

    /// Run the search to exhaustion and return the minimum cover found.
    ///
    /// `None` means no cover exists; `Some(&[])` is the valid empty cover
    /// of a problem with zero columns. The returned rows are in discovery
    /// (path) order.
    pub fn solve(&mut self) -> Option<&[usize]> {
        self.search.run(&mut self.matrix);
        self.search.solution()
    }

    /// As [`Solver::solve`], reporting descents and incumbent replacements
    /// to `observer`.
    pub fn solve_observed(&mut self, observer: &mut dyn SearchObserver) -> Option<&[usize]> {
        self.search.run_observed(&mut self.matrix, observer);
        self.search.solution()
    }

    /// The incumbent from the most recent run, without searching again.
    pub fn solution(&self) -> Option<&[usize]> {
        self.search.solution()
    }

    /// Counters accumulated since the last [`Solver::init`].
    pub fn statistics(&self) -> &Statistics {
        &self.search.statistics
    }

    /// Read-only view of the underlying structure.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
