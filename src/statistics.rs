// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the solver and incremented by the search as it
//! runs. They are the cheap always-on half of the observability story; the
//! [`crate::search::SearchObserver`] trait is the opt-in half.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The counters tracked during a search.
#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counter {
    /// Search tree nodes entered (recursive calls).
    Nodes,
    /// Branches abandoned because the lower bound could not beat the
    /// incumbent.
    Prunes,
    /// Times a strictly better complete cover replaced the incumbent.
    Incumbents,
}

/// Counter storage, indexed by [`Counter`].
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }

    /// Zero every counter.
    pub(crate) fn reset(&mut self) {
        self.stats = [0; Counter::COUNT];
    }
}
