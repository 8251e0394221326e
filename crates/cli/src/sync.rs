// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Screen synchronizer: waits for banner patterns in the raw output
//! stream under one of three explicit policies.

use std::time::Duration;

use bytes::Bytes;
use tokio::sync::mpsc;
use tracing::trace;

use crate::error::Error;
use crate::pattern::Pattern;
use crate::scan::ScanBuffer;

/// How long a pattern check is allowed to block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Check only output already buffered; never block. Used to
    /// opportunistically detect a state (e.g. the splash screen) without
    /// stalling when it is absent.
    Immediate,
    /// Block until a candidate matches. Used when observing completion is
    /// mandatory and there is no legitimate path where it never appears.
    Unbounded,
    /// Block up to the given duration. Absence after the deadline is a
    /// normal, expected outcome (probing an optional transient prompt),
    /// not an error.
    Deadline(Duration),
}

/// Wraps the subprocess output stream with pattern matching under the
/// three [`Wait`] policies.
///
/// Matched output is consumed through the end of the match, so successive
/// waits observe strictly later stream positions.
#[derive(Debug)]
pub struct Synchronizer {
    output_rx: mpsc::Receiver<Bytes>,
    scan: ScanBuffer,
}

impl Synchronizer {
    pub fn new(output_rx: mpsc::Receiver<Bytes>, scan_capacity: usize) -> Self {
        Self { output_rx, scan: ScanBuffer::new(scan_capacity) }
    }

    /// Wait for any of `patterns` under `wait`.
    ///
    /// Returns `Ok(Some(index))` with the matched candidate, `Ok(None)`
    /// when an Immediate check or Deadline probe ends without a match, and
    /// `Err(PatternNotFound)` when an Unbounded wait can never succeed
    /// because the output stream closed.
    pub async fn await_patterns(
        &mut self,
        patterns: &[Pattern],
        wait: Wait,
    ) -> Result<Option<usize>, Error> {
        self.drain_buffered();
        if let Some(idx) = self.check(patterns) {
            return Ok(Some(idx));
        }

        match wait {
            Wait::Immediate => Ok(None),
            Wait::Unbounded => loop {
                match self.output_rx.recv().await {
                    Some(chunk) => {
                        self.scan.push(&chunk);
                        if let Some(idx) = self.check(patterns) {
                            return Ok(Some(idx));
                        }
                    }
                    None => return Err(Error::PatternNotFound),
                }
            },
            Wait::Deadline(d) => {
                let deadline = tokio::time::Instant::now() + d;
                loop {
                    match tokio::time::timeout_at(deadline, self.output_rx.recv()).await {
                        Ok(Some(chunk)) => {
                            self.scan.push(&chunk);
                            if let Some(idx) = self.check(patterns) {
                                return Ok(Some(idx));
                            }
                        }
                        // Stream closed or deadline elapsed: absence is the
                        // normal branch for a probe.
                        Ok(None) | Err(_) => return Ok(None),
                    }
                }
            }
        }
    }

    fn drain_buffered(&mut self) {
        while let Ok(chunk) = self.output_rx.try_recv() {
            self.scan.push(&chunk);
        }
    }

    fn check(&mut self, patterns: &[Pattern]) -> Option<usize> {
        let idx = self.scan.find_and_consume(patterns)?;
        trace!(pattern = %patterns[idx], "matched screen pattern");
        Some(idx)
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
