// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed keystroke protocol understood by links2.
//!
//! These are literal byte sequences written to the subprocess PTY, not
//! configurable bindings. Keystrokes are deliberately a separate concept
//! from observation [`crate::pattern`]s even where the byte content
//! coincides (ESC is both an outbound cancel key and part of inbound
//! banner text).

/// Escape: closes menus, cancels prompts.
pub const ESC: &[u8] = b"\x1b";
/// Ctrl-C: interrupts the browser, used by quit.
pub const CTRL_C: &[u8] = b"\x03";
/// Ctrl-R followed by nothing reloads; the trailing ESC is appended by the
/// dispatcher so the dropdown banner doubles as the load-complete signal.
pub const CTRL_R: &[u8] = b"\x12";
pub const ENTER: &[u8] = b"\n";

/// Opens the go-to-URL dialog.
pub const GO_TO: &[u8] = b"g";
/// Alt-F then `d`: save formatted document from the File menu.
pub const SAVE_FORMATTED: &[u8] = b"\x1bfd";
/// Toggles between formatted output and raw source.
pub const TOGGLE_SOURCE: &[u8] = b"\\";
/// Opens the document-info panel.
pub const DOCUMENT_INFO: &[u8] = b"=";
/// Opens the HTTP-header panel.
pub const HTTP_HEADER: &[u8] = b"|";

pub const SEARCH: &[u8] = b"/";
pub const SEARCH_BACKWARD: &[u8] = b"?";
pub const FIND_NEXT: &[u8] = b"n";
pub const FIND_PREVIOUS: &[u8] = b"N";

pub const PAGE_UP: &[u8] = b"\x1b[5~";
pub const PAGE_DOWN: &[u8] = b"\x1b[6~";
pub const SCROLL_LEFT: &[u8] = b"[";
pub const SCROLL_RIGHT: &[u8] = b"]";

pub const ARROW_UP: &[u8] = b"\x1b[A";
pub const ARROW_DOWN: &[u8] = b"\x1b[B";
pub const ARROW_RIGHT: &[u8] = b"\x1b[C";
pub const ARROW_LEFT: &[u8] = b"\x1b[D";

pub const HOME: &[u8] = b"\x1b[H";
pub const END: &[u8] = b"\x1b[F";
