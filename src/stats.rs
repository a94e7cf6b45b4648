// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-instance operation counters.
//!
//! Every index owns one `StatsCollector`. Nothing here is global: two indexes
//! built side by side keep independent counts. Counters only go up during a
//! build and are zeroed by `reset` at the start of the next one.

use crate::types::Stats;
use std::time::{Duration, Instant};

/// Mutable accumulator behind `Stats`.
#[derive(Debug, Clone, Default)]
pub struct StatsCollector {
    comparisons: u64,
    assignments: u64,
    rotations: u64,
    started: Option<Instant>,
    elapsed: Duration,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters and the recorded time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn assign(&mut self, n: u64) {
        self.assignments += n;
    }

    #[inline]
    pub fn rotate(&mut self, n: u64) {
        self.rotations += n;
    }

    /// Start the build clock.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stop the build clock, adding the interval to the elapsed total.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
        }
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn assignments(&self) -> u64 {
        self.assignments
    }

    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Elapsed time so far, including a clock that is still running.
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => self.elapsed + started.elapsed(),
            None => self.elapsed,
        }
    }

    /// Freeze the current counters into an immutable `Stats`.
    pub fn snapshot(&self, height: u32) -> Stats {
        Stats {
            comparisons: self.comparisons,
            assignments: self.assignments,
            rotations: self.rotations,
            elapsed: self.elapsed(),
            height,
        }
    }
}
