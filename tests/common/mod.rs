// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)] // Not every test binary uses every helper.

use min_cover::Solver;

/// Build a solver from a row-major instance: `rows[i]` lists the columns
/// covered by row id `i + 1`.
pub fn build_solver(rows: &[Vec<usize>], cols: usize) -> Solver {
    let mut solver = Solver::new();
    solver.init(rows.len(), cols).unwrap();
    for (i, row) in rows.iter().enumerate() {
        for &col in row {
            solver.link(i + 1, col).unwrap();
        }
    }
    solver
}

/// How many times each column is covered by the selected rows.
pub fn coverage(rows: &[Vec<usize>], cols: usize, selection: &[usize]) -> Vec<usize> {
    let mut counts = vec![0usize; cols + 1];
    for &row in selection {
        for &col in &rows[row - 1] {
            counts[col] += 1;
        }
    }
    counts.drain(..1);
    counts
}

/// Assert every column is covered at least once by `selection`.
pub fn assert_covers(rows: &[Vec<usize>], cols: usize, selection: &[usize]) {
    let counts = coverage(rows, cols, selection);
    for (col, count) in counts.iter().enumerate() {
        assert!(
            *count >= 1,
            "column {} uncovered by selection {:?}",
            col + 1,
            selection
        );
    }
}

/// Assert every column is covered exactly once by `selection`.
pub fn assert_covers_exactly_once(rows: &[Vec<usize>], cols: usize, selection: &[usize]) {
    let counts = coverage(rows, cols, selection);
    for (col, count) in counts.iter().enumerate() {
        assert_eq!(
            *count,
            1,
            "column {} covered {} times by selection {:?}",
            col + 1,
            count,
            selection
        );
    }
}

/// Reference solver: minimum number of rows covering every column, by
/// exhaustive subset enumeration. Only usable for small instances.
pub fn brute_force_min_cover(rows: &[Vec<usize>], cols: usize) -> Option<usize> {
    assert!(rows.len() < 20, "instance too large for brute force");
    let mut best: Option<usize> = None;
    for mask in 0u32..(1u32 << rows.len()) {
        let picked = mask.count_ones() as usize;
        if best.is_some_and(|b| picked >= b) {
            continue;
        }
        let mut covered = vec![false; cols + 1];
        for (i, row) in rows.iter().enumerate() {
            if mask & (1 << i) != 0 {
                for &col in row {
                    covered[col] = true;
                }
            }
        }
        if (1..=cols).all(|col| covered[col]) {
            best = Some(picked);
        }
    }
    best
}
