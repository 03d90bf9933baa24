// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observer trait for watching a search run.
//!
//! The search itself performs no output. Callers that want to watch it
//! descend (progress displays, depth traces, step budgets enforced by
//! panicking, ...) implement [`SearchObserver`] and pass it to
//! [`crate::search::Search::run_observed`]. Both callbacks default to
//! no-ops, so an observer implements only what it cares about.
//!
//! # Example
//!
//! ```
//! use min_cover::{SearchObserver, Solver};
//!
//! /// Records the deepest point the search reached.
//! #[derive(Default)]
//! struct DepthGauge {
//!     deepest: usize,
//! }
//!
//! impl SearchObserver for DepthGauge {
//!     fn on_descend(&mut self, depth: usize) {
//!         self.deepest = self.deepest.max(depth);
//!     }
//! }
//!
//! let mut solver = Solver::new();
//! solver.init(2, 2).unwrap();
//! solver.link(1, 1).unwrap();
//! solver.link(2, 2).unwrap();
//!
//! let mut gauge = DepthGauge::default();
//! let _ = solver.solve_observed(&mut gauge);
//! assert_eq!(gauge.deepest, 2);
//! ```

/// Callbacks invoked by the search as it runs.
pub trait SearchObserver {
    /// Called on entry to every search node, before pruning. `depth` is the
    /// number of rows selected so far.
    fn on_descend(&mut self, _depth: usize) {}

    /// Called when a strictly better complete cover replaces the incumbent.
    fn on_incumbent(&mut self, _path: &[usize]) {}
}

/// The do-nothing observer used by [`crate::search::Search::run`].
pub struct NullObserver;

impl SearchObserver for NullObserver {}
