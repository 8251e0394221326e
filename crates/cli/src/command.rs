// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The public operation table: every high-level command the driver can
//! issue, each composed of a precondition (close or open a menu), byte
//! injection, and an optional confirmation wait.

use tracing::{debug, info};

use crate::addr;
use crate::error::Error;
use crate::keys;
use crate::pattern;
use crate::session::{Browser, Menu, State};
use crate::sync::Wait;

/// Placeholder for the document-info panel. Content extraction is a
/// declared non-goal; opening and closing the panel is the whole
/// operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentInfo {}

/// Placeholder for the HTTP-header panel, same deal as [`DocumentInfo`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HttpHeader {}

impl Browser {
    /// Navigate to an address via the go-to-URL dialog.
    ///
    /// The submission ends with a trailing ESC which the browser defers
    /// consuming until the document finishes loading, so the dropdown
    /// banner reappearing is the load-complete signal.
    pub async fn navigate(&mut self, address: impl AsRef<[u8]>) -> Result<(), Error> {
        let address = addr::normalize(address.as_ref())?;
        self.close_menu().await?;

        let session = self.session_mut()?;
        session.send(keys::GO_TO).await?;
        session.expect(&[pattern::GO_TO_MENU], Wait::Unbounded).await?;
        session.state = State::Menu(Menu::GoTo);

        let submission = [address.as_bytes(), keys::ENTER, keys::ESC].concat();
        session.send(&submission).await?;
        session.expect(&[pattern::DROPDOWN_MENU], Wait::Unbounded).await?;
        session.state = State::Menu(Menu::Dropdown);
        info!(%address, "navigation complete");
        Ok(())
    }

    pub async fn scroll_up(&mut self) -> Result<(), Error> {
        self.send_idle(keys::PAGE_UP).await
    }

    pub async fn scroll_down(&mut self) -> Result<(), Error> {
        self.send_idle(keys::PAGE_DOWN).await
    }

    pub async fn scroll_left(&mut self) -> Result<(), Error> {
        self.send_idle(keys::SCROLL_LEFT).await
    }

    pub async fn scroll_right(&mut self) -> Result<(), Error> {
        self.send_idle(keys::SCROLL_RIGHT).await
    }

    pub async fn select_next_link(&mut self) -> Result<(), Error> {
        self.send_idle(keys::ARROW_DOWN).await
    }

    pub async fn select_prev_link(&mut self) -> Result<(), Error> {
        self.send_idle(keys::ARROW_UP).await
    }

    pub async fn follow_link(&mut self) -> Result<(), Error> {
        self.send_idle(keys::ARROW_RIGHT).await
    }

    pub async fn back_link(&mut self) -> Result<(), Error> {
        self.send_idle(keys::ARROW_LEFT).await
    }

    pub async fn jump_home(&mut self) -> Result<(), Error> {
        self.send_idle(keys::HOME).await
    }

    pub async fn jump_end(&mut self) -> Result<(), Error> {
        self.send_idle(keys::END).await
    }

    /// Switch to the raw-source rendering. No-op when already showing
    /// source; exactly one toggle byte crosses the wire per actual switch.
    pub async fn view_source(&mut self) -> Result<(), Error> {
        let session = self.session_mut()?;
        if !session.view_source {
            session.send(keys::TOGGLE_SOURCE).await?;
            session.view_source = true;
        }
        Ok(())
    }

    /// Switch back to the formatted rendering. Counterpart of
    /// [`Browser::view_source`].
    pub async fn view_html(&mut self) -> Result<(), Error> {
        let session = self.session_mut()?;
        if session.view_source {
            session.send(keys::TOGGLE_SOURCE).await?;
            session.view_source = false;
        }
        Ok(())
    }

    /// Save the formatted document under `name` via the File menu.
    ///
    /// After submitting the filename, probe briefly for the overwrite
    /// prompt. When it shows, confirm or cancel per `overwrite`; when it
    /// does not show within the deadline, the save proceeded without
    /// conflict.
    pub async fn save_formatted_document(
        &mut self,
        name: &str,
        overwrite: bool,
    ) -> Result<(), Error> {
        let probe = self.config().exists_prompt_wait();
        self.open_dropdown().await?;

        let session = self.session_mut()?;
        let submission = [keys::SAVE_FORMATTED, name.as_bytes(), keys::ENTER].concat();
        session.send(&submission).await?;

        if session.expect(&[pattern::FILE_EXISTS], Wait::Deadline(probe)).await?.is_some() {
            if overwrite {
                debug!(name, "save target exists, overwriting");
                session.send(keys::ENTER).await?;
            } else {
                debug!(name, "save target exists, cancelling");
                session.send(keys::ESC).await?;
            }
        }
        Ok(())
    }

    /// Reload the current document; the dropdown banner reappearing is
    /// the load-complete signal, as with navigation.
    pub async fn reload(&mut self) -> Result<(), Error> {
        self.close_menu().await?;
        let session = self.session_mut()?;
        session.send(&[keys::CTRL_R, keys::ESC].concat()).await?;
        session.expect(&[pattern::DROPDOWN_MENU], Wait::Unbounded).await?;
        session.state = State::Menu(Menu::Dropdown);
        Ok(())
    }

    /// Open the forward-search prompt. Result text is not extracted.
    pub async fn search(&mut self) -> Result<(), Error> {
        self.send_idle(keys::SEARCH).await
    }

    pub async fn search_backward(&mut self) -> Result<(), Error> {
        self.send_idle(keys::SEARCH_BACKWARD).await
    }

    pub async fn find_next(&mut self) -> Result<(), Error> {
        self.send_idle(keys::FIND_NEXT).await
    }

    pub async fn find_previous(&mut self) -> Result<(), Error> {
        self.send_idle(keys::FIND_PREVIOUS).await
    }

    /// Open and close the document-info panel. Returns an empty
    /// placeholder; only the state transition is implemented.
    pub async fn document_info(&mut self) -> Result<DocumentInfo, Error> {
        self.send_idle(keys::DOCUMENT_INFO).await?;
        self.close_menu().await?;
        Ok(DocumentInfo::default())
    }

    /// Open and close the HTTP-header panel. Returns an empty
    /// placeholder; only the state transition is implemented.
    pub async fn http_header(&mut self) -> Result<HttpHeader, Error> {
        self.send_idle(keys::HTTP_HEADER).await?;
        self.close_menu().await?;
        Ok(HttpHeader::default())
    }

    /// Interrupt the browser and tear the session down. Teardown happens
    /// regardless of earlier failures; the first error wins.
    pub async fn quit(&mut self) -> Result<(), Error> {
        info!("quitting browser");
        let interrupted = self.send_idle(keys::CTRL_C).await;
        let closed = self.close().await;
        interrupted.and(closed)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
