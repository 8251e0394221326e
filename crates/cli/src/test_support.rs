// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test infrastructure: a scripted PTY backend and helpers.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::mpsc;

use crate::pattern::Pattern;
use crate::pty::{Backend, ExitStatus};

/// A fake PTY backend for deterministic, sub-millisecond session tests.
///
/// Emits its scripted output chunks, then captures everything written to
/// it until the input channel closes (i.e. until the session tears down),
/// then reports the configured exit status. With
/// [`MockPty::eof_after_output`] it instead hangs up right after the
/// script, modeling a browser that exits on its own.
pub struct MockPty {
    output: Vec<Bytes>,
    chunk_delay: Duration,
    exit_status: ExitStatus,
    eof_after_output: bool,
    captured_input: Arc<parking_lot::Mutex<Vec<Bytes>>>,
}

impl Default for MockPty {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPty {
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            chunk_delay: Duration::ZERO,
            exit_status: ExitStatus { code: Some(0), signal: None },
            eof_after_output: false,
            captured_input: Arc::new(parking_lot::Mutex::new(Vec::new())),
        }
    }

    pub fn with_output(chunks: Vec<Bytes>) -> Self {
        Self { output: chunks, ..Self::new() }
    }

    /// Script the banners the session is expected to observe, in order.
    pub fn with_banners(patterns: &[Pattern]) -> Self {
        Self::with_output(
            patterns.iter().map(|p| Bytes::copy_from_slice(p.bytes())).collect(),
        )
    }

    pub fn exit_status(mut self, s: ExitStatus) -> Self {
        self.exit_status = s;
        self
    }

    pub fn chunk_delay(mut self, d: Duration) -> Self {
        self.chunk_delay = d;
        self
    }

    pub fn eof_after_output(mut self) -> Self {
        self.eof_after_output = true;
        self
    }

    pub fn captured_input(&self) -> Arc<parking_lot::Mutex<Vec<Bytes>>> {
        Arc::clone(&self.captured_input)
    }
}

impl Backend for MockPty {
    fn run(
        &mut self,
        output_tx: mpsc::Sender<Bytes>,
        mut input_rx: mpsc::Receiver<Bytes>,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ExitStatus>> + Send + '_>> {
        let output = std::mem::take(&mut self.output);
        let chunk_delay = self.chunk_delay;
        let exit_status = self.exit_status;
        let eof_after_output = self.eof_after_output;
        let captured_input = Arc::clone(&self.captured_input);

        Box::pin(async move {
            for chunk in output {
                if output_tx.send(chunk).await.is_err() {
                    break;
                }
                if chunk_delay > Duration::ZERO {
                    tokio::time::sleep(chunk_delay).await;
                }
            }
            if !eof_after_output {
                while let Some(data) = input_rx.recv().await {
                    captured_input.lock().push(data);
                }
            }
            Ok(exit_status)
        })
    }

    fn child_pid(&self) -> Option<u32> {
        None
    }
}

/// Flatten captured input chunks into one byte string for assertions.
pub fn flatten(captured: &parking_lot::Mutex<Vec<Bytes>>) -> Vec<u8> {
    let chunks = captured.lock();
    let mut out = Vec::new();
    for chunk in chunks.iter() {
        out.extend_from_slice(chunk);
    }
    out
}

/// Let the pump task run on the current-thread test runtime so scripted
/// output reaches the synchronizer before an immediate check.
pub async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}
