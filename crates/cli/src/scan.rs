// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::pattern::Pattern;

/// Bounded flat buffer of recently observed subprocess output.
///
/// When the buffer grows past capacity the oldest bytes are silently
/// discarded — a banner that scrolled out of the window can no longer
/// match, which is the desired behavior for "has this appeared since the
/// last command" checks.
#[derive(Debug)]
pub struct ScanBuffer {
    buf: Vec<u8>,
    capacity: usize,
}

impl ScanBuffer {
    pub fn new(capacity: usize) -> Self {
        Self { buf: Vec::new(), capacity }
    }

    /// Append observed bytes, discarding the oldest past capacity.
    pub fn push(&mut self, data: &[u8]) {
        if data.len() >= self.capacity {
            self.buf.clear();
            self.buf.extend_from_slice(&data[data.len() - self.capacity..]);
            return;
        }
        self.buf.extend_from_slice(data);
        if self.buf.len() > self.capacity {
            let excess = self.buf.len() - self.capacity;
            self.buf.drain(..excess);
        }
    }

    /// Find the earliest match among the candidates and consume the stream
    /// through the end of that match, expect-style. Ties at the same start
    /// position are broken by candidate order.
    ///
    /// Returns the index of the matched candidate.
    pub fn find_and_consume(&mut self, patterns: &[Pattern]) -> Option<usize> {
        let mut best: Option<(usize, usize, usize)> = None; // (start, end, idx)
        for (idx, pattern) in patterns.iter().enumerate() {
            if let Some(start) = find_subslice(&self.buf, pattern.bytes()) {
                let end = start + pattern.bytes().len();
                let better = match best {
                    None => true,
                    Some((s, _, _)) => start < s,
                };
                if better {
                    best = Some((start, end, idx));
                }
            }
        }
        let (_, end, idx) = best?;
        self.buf.drain(..end);
        Some(idx)
    }

    /// Bytes currently held in the window.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
