// SPDX-License-Identifier: BUSL-1.1
// Copyright 2025 Alfred Jean LLC

use super::*;

use yare::parameterized;

use crate::error::Error;

#[parameterized(
    https = { "https://example.com/x", "https://example.com/x" },
    http_root = { "http://example.com", "http://example.com/" },
    with_query = { "https://example.com/a?b=c", "https://example.com/a?b=c" },
    absolute_path = { "/local/path", "file:///local/path" },
    relative_path = { "docs/index.html", "file:///docs/index.html" },
    file_single_slash = { "file:/tmp/x", "file:///tmp/x" },
    file_triple_slash = { "file:///tmp/x", "file:///tmp/x" },
    hostless_scheme = { "mailto:user@example.com", "file:///user@example.com" },
)]
fn normalizes(input: &str, expected: &str) -> anyhow::Result<()> {
    assert_eq!(normalize(input.as_bytes())?, expected);
    Ok(())
}

#[test]
fn non_unicode_input_is_rejected() {
    let result = normalize(b"\xff\xfe invalid");
    assert!(matches!(result, Err(Error::InvalidAddress { .. })));
}

#[test]
fn unparseable_address_is_rejected() {
    let result = normalize(b"http://");
    assert!(matches!(result, Err(Error::InvalidAddress { .. })));
}

#[test]
fn control_bytes_never_survive_serialization() -> anyhow::Result<()> {
    // An escape sequence smuggled into the path must come out
    // percent-encoded, never as a raw control byte.
    let normalized = normalize(b"https://example.com/\x1b[2J")?;
    assert!(!normalized.bytes().any(|b| b.is_ascii_control()), "{normalized:?}");
    assert!(normalized.contains("%1B"));
    Ok(())
}

#[test]
fn spaces_are_percent_encoded() -> anyhow::Result<()> {
    assert_eq!(normalize(b"https://example.com/a b")?, "https://example.com/a%20b");
    Ok(())
}

#[test]
fn serialized_form_is_a_single_line() -> anyhow::Result<()> {
    // URL syntax strips embedded tabs and newlines outright.
    let normalized = normalize(b"https://exam\nple.com/x")?;
    assert_eq!(normalized, "https://example.com/x");
    Ok(())
}
