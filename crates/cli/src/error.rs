// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::pty::ExitStatus;

/// Error kinds surfaced by every public browser operation.
///
/// Errors always propagate to the immediate caller; nothing retries. A
/// failed confirmation wait leaves the tracked session state unchanged, so
/// callers should treat it as "possibly out of sync with the real screen"
/// and re-probe before continuing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An operation other than open was invoked with no subprocess attached.
    #[error("browser not started")]
    NotStarted,

    /// Open was invoked while a subprocess is already attached.
    #[error("browser already started")]
    AlreadyStarted,

    /// The browser subprocess could not be launched.
    #[error("failed to spawn {program}")]
    Spawn {
        program: String,
        #[source]
        source: anyhow::Error,
    },

    /// The address is malformed or not valid Unicode.
    #[error("invalid address: {reason}")]
    InvalidAddress { reason: String },

    /// An unbounded confirmation wait ended (output stream closed) without
    /// any candidate pattern appearing. Deadline probes never produce this;
    /// absence within the deadline is a normal branch there.
    #[error("expected screen pattern never appeared")]
    PatternNotFound,

    /// A write was attempted after the channel to the subprocess closed.
    #[error("transport to browser subprocess is closed")]
    TransportClosed,

    /// Teardown encountered a failure. Resources are released regardless;
    /// this reports the first error seen while doing so.
    #[error("browser teardown failed")]
    Teardown(#[source] anyhow::Error),

    /// The subprocess exited abnormally, observed by wait.
    #[error("browser exited abnormally: {0}")]
    ProcessExit(ExitStatus),
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidAddress { reason: e.to_string() }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
