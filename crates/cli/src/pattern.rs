// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named banner patterns observed in the raw links2 output stream.
//!
//! Patterns are matched as literal byte substrings against whatever the
//! subprocess writes, control bytes included — no escape-sequence
//! interpretation happens anywhere. A pattern that needs to distinguish
//! highlighted text therefore embeds the inverse-video marker
//! (`\x1b[0;7m`) as part of its bytes.

use std::fmt;

/// A named literal byte substring that identifies a menu, mode or prompt
/// being visible on the browser screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    bytes: &'static [u8],
}

impl Pattern {
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Top menu bar rendered when the dropdown menu is open. Its reappearance
/// after navigation doubles as the page-load-complete signal.
pub const DROPDOWN_MENU: Pattern = Pattern::new(
    "dropdown-menu",
    b"File  \x1b[0;7m  View    Link    Downloads    Setup    Help",
);

/// Frame of the go-to-URL dialog.
pub const GO_TO_MENU: Pattern =
    Pattern::new("go-to-menu", b"Go to URL \x1b[0;7m---------------------------+");

/// Frame of the exit-confirmation dialog.
pub const EXIT_MENU: Pattern = Pattern::new("exit-menu", b"Exit Links \x1b[0;7m-------------+");

/// Body text of the exit-confirmation dialog.
pub const EXIT_PROMPT: Pattern = Pattern::new("exit-prompt", b"Do you really want to exit Links?");

/// The splash dialog shown on a fresh start. Two variants: the dialog
/// title alone, and the full greeting line.
pub const WELCOME: Pattern = Pattern::new("welcome", b"Welcome");
pub const WELCOME_BANNER: Pattern = Pattern::new("welcome-banner", b"Welcome to links!");

/// Overwrite-confirmation prompt shown when a save target already exists.
/// The trailing cursor-position prefix anchors the match to the dialog
/// rather than document text.
pub const FILE_EXISTS: Pattern = Pattern::new("file-exists", b"File already exists \x1b[10;");

/// Candidate set used for the splash-screen probe.
pub const SPLASH: &[Pattern] = &[WELCOME_BANNER, WELCOME];

// Status-line vocabulary emitted while a page loads. Not consulted by any
// dispatcher operation today, but part of the observable protocol.
pub const LOOKING_UP_HOST: Pattern = Pattern::new("looking-up-host", b"Looking up host\x1b[0m");
pub const MAKING_CONNECTION: Pattern =
    Pattern::new("making-connection", b"Making connection\x1b[0m");
pub const REQUEST_SENT: Pattern = Pattern::new("request-sent", b"Request sent\x1b[0m");
pub const SSL_NEGOTIATION: Pattern = Pattern::new("ssl-negotiation", b"SSL negotiation\x1b[0m");
pub const FORMATTING_DOCUMENT: Pattern =
    Pattern::new("formatting-document", b"Formatting document\x1b[0m");
pub const ERROR_LOADING: Pattern = Pattern::new("error-loading", b"Error loading ");
pub const HOST_NOT_FOUND: Pattern = Pattern::new("host-not-found", b"Host not found");
pub const ERROR_BANNER: Pattern = Pattern::new("error-banner", b"Error \x1b[0;7m");
pub const NO_SUCH_FILE: Pattern =
    Pattern::new("no-such-file", b"No such file or directory\x1b[13;");
