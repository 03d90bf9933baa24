// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for matrix construction.
//!
//! The kernel performs no I/O, so every error here is a caller contract
//! violation detected before it can corrupt the ring structure.

use std::fmt;

/// Errors that can occur while sizing or populating the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Requested dimensions exceed the arena's fixed capacity bound.
    CapacityExceeded {
        rows: usize,
        cols: usize,
        max_dimension: usize,
    },

    /// The incidence arena is full; no further links can be registered.
    NodesExhausted { limit: usize },

    /// Row id outside the declared range `1..=rows`.
    RowOutOfRange { row: usize, rows: usize },

    /// Column id outside the declared range `1..=cols`.
    ColumnOutOfRange { col: usize, cols: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::CapacityExceeded {
                rows,
                cols,
                max_dimension,
            } => {
                write!(
                    f,
                    "matrix of {} rows x {} columns exceeds the capacity bound of {}",
                    rows, cols, max_dimension
                )
            }
            MatrixError::NodesExhausted { limit } => {
                write!(f, "incidence arena is full ({} nodes)", limit)
            }
            MatrixError::RowOutOfRange { row, rows } => {
                write!(f, "row {} outside declared range 1..={}", row, rows)
            }
            MatrixError::ColumnOutOfRange { col, cols } => {
                write!(f, "column {} outside declared range 1..={}", col, cols)
            }
        }
    }
}

impl std::error::Error for MatrixError {}
