// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branch-and-bound dancing-links search for minimum-row covers.
//!
//! A caller encodes a covering problem as a sparse 0/1 matrix: columns are
//! constraints, rows are candidate selections. The kernel finds a selection
//! of rows covering every column while selecting as few rows as possible.
//!
//! # Architecture
//!
//! The implementation is split into two tightly coupled tiers:
//!
//! ## Tier 1: Matrix (reversible structure)
//!
//! [`matrix::Matrix`] stores the incidences as a toroidal structure: one
//! circular doubly-linked ring per column (vertical) and per row
//! (horizontal), all nodes allocated in a single arena and linked by index.
//! Its `remove`/`resume` pair splices nodes out of and back into their
//! horizontal rings, which is what makes exponential backtracking cheap:
//! every branch can be explored and then undone in time proportional to the
//! work it did.
//!
//! ## Tier 2: Search (branch and bound)
//!
//! [`search::Search`] runs a depth-first search over the live structure,
//! always branching on the live column with the fewest candidate rows. It
//! prunes with an admissible lower bound on the rows still required, and
//! keeps the best (fewest-rows) complete cover found as the incumbent.
//!
//! [`solver::Solver`] ties the two together and is the intended entry
//! point.
//!
//! # Example
//!
//! ```
//! use min_cover::Solver;
//!
//! // The 4x4 identity matrix: row i covers only column i, so the
//! // only cover selects all four rows.
//! let mut solver = Solver::new();
//! solver.init(4, 4).unwrap();
//! for i in 1..=4 {
//!     solver.link(i, i).unwrap();
//! }
//!
//! let mut cover = solver.solve().expect("identity matrix has a cover").to_vec();
//! cover.sort();
//! assert_eq!(cover, vec![1, 2, 3, 4]);
//! ```

pub mod errors;
pub mod matrix;
pub mod search;
pub mod solver;
pub mod statistics;

// Re-export commonly used types
pub use errors::MatrixError;
pub use matrix::Matrix;
pub use search::{NullObserver, Search, SearchObserver};
pub use solver::Solver;
pub use statistics::{Counter, Statistics};
