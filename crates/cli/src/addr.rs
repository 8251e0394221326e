// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Address normalization performed before an address is injected as
//! keystrokes.
//!
//! The address travels to the browser as raw PTY bytes, so it must never
//! carry control sequences. Serializing through [`url::Url`] guarantees a
//! single-line ASCII-safe string (URL syntax percent-encodes control
//! bytes), and forcing a `file` scheme onto host-less addresses avoids
//! relying on the browser's own ambiguous scheme inference.

use url::Url;

use crate::error::Error;

/// Validate and canonicalize a target address.
///
/// Input that is not valid UTF-8 is rejected outright. Addresses with a
/// host component pass through re-serialized; host-less addresses
/// (including bare filesystem paths, which parse as relative references)
/// are anchored onto `file:///`.
pub fn normalize(raw: &[u8]) -> Result<String, Error> {
    let text = std::str::from_utf8(raw).map_err(|_| Error::InvalidAddress {
        reason: "not valid unicode".to_owned(),
    })?;

    match Url::parse(text) {
        Ok(url) if url.has_host() => Ok(url.into()),
        Ok(url) if url.scheme() == "file" => Ok(url.into()),
        // Host-less with some other scheme (e.g. a bare "mailto:"-style
        // reference): keep only the path portion under file:///.
        Ok(url) => {
            let path = url.path().to_owned();
            Ok(file_base()?.join(&path)?.into())
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(file_base()?.join(text)?.into()),
        Err(e) => Err(e.into()),
    }
}

fn file_base() -> Result<Url, Error> {
    // Infallible parse, but propagated rather than unwrapped.
    Ok(Url::parse("file:///")?)
}

#[cfg(test)]
#[path = "addr_tests.rs"]
mod tests;
