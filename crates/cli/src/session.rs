// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle and menu-state tracking for a driven browser.
//!
//! A [`Browser`] owns at most one subprocess at a time. "Not started" is
//! represented by the absence of a [`Session`], so the invariant that an
//! unstarted browser holds no resources cannot be violated. All state
//! mutation happens through guarded transition methods; nothing outside
//! this crate can write the tracked state directly.

use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::keys;
use crate::pattern;
use crate::pty::spawn::NativePty;
use crate::pty::{Boxed, ExitStatus};
use crate::sync::{Synchronizer, Wait};

/// Which modal menu is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Dropdown,
    Search,
    ReverseSearch,
    GoTo,
}

/// Tracked UI region of a started browser.
///
/// A menu being open and the active menu identity are a single variant,
/// so "a menu is tracked but none is active" is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Subprocess launched; the splash screen may still be showing.
    Started,
    /// Ready to accept any command.
    Idle,
    /// A modal menu is open.
    Menu(Menu),
}

/// Resources and tracked state of one attached subprocess.
pub(crate) struct Session {
    pub(crate) state: State,
    pub(crate) view_source: bool,
    input_tx: mpsc::Sender<Bytes>,
    sync: Synchronizer,
    pump: JoinHandle<anyhow::Result<ExitStatus>>,
    kill: CancellationToken,
    child_pid: Option<u32>,
}

impl Session {
    pub(crate) async fn send(&mut self, bytes: &[u8]) -> Result<(), Error> {
        debug!(bytes = bytes.len(), "injecting keystrokes");
        self.input_tx
            .send(Bytes::copy_from_slice(bytes))
            .await
            .map_err(|_| Error::TransportClosed)
    }

    pub(crate) async fn expect(
        &mut self,
        patterns: &[pattern::Pattern],
        wait: Wait,
    ) -> Result<Option<usize>, Error> {
        self.sync.await_patterns(patterns, wait).await
    }

    /// Release everything. The first error encountered is returned, but
    /// release is total either way.
    async fn teardown(self) -> Result<(), Error> {
        let Self { input_tx, sync, pump, kill, .. } = self;
        kill.cancel();
        drop(input_tx);
        drop(sync);
        match pump.await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(Error::Teardown(e)),
            Err(e) => Err(Error::Teardown(e.into())),
        }
    }
}

/// A links2 instance driven over a PTY.
///
/// Not re-entrant: all operations take `&mut self` and complete fully
/// (including their confirmation waits) before returning, so the
/// happens-before order equals call order.
pub struct Browser {
    config: Config,
    session: Option<Session>,
}

impl Browser {
    pub fn new(config: Config) -> Self {
        Self { config, session: None }
    }

    /// Tracked UI state, or `None` when no subprocess is attached.
    pub fn state(&self) -> Option<State> {
        self.session.as_ref().map(|s| s.state)
    }

    /// Whether the browser is currently rendering raw source. Tracked
    /// locally, never inferred from the remote screen.
    pub fn view_source_mode(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.view_source)
    }

    pub fn child_pid(&self) -> Option<u32> {
        self.session.as_ref().and_then(|s| s.child_pid)
    }

    /// Launch the browser subprocess on a fresh PTY.
    ///
    /// Cancelling `shutdown` terminates the subprocess; it does not cancel
    /// an in-flight confirmation wait.
    pub fn open(&mut self, shutdown: CancellationToken) -> Result<(), Error> {
        if self.session.is_some() {
            return Err(Error::AlreadyStarted);
        }
        let backend =
            NativePty::spawn(&self.config.program, self.config.cols, self.config.rows, &self.config.term)
                .map_err(|source| Error::Spawn {
                    program: self.config.program.clone(),
                    source,
                })?;
        self.open_with(backend, shutdown)
    }

    /// Attach an already-constructed backend. Used by tests and by callers
    /// that manage spawning themselves.
    pub fn open_with(
        &mut self,
        backend: impl Boxed,
        shutdown: CancellationToken,
    ) -> Result<(), Error> {
        if self.session.is_some() {
            return Err(Error::AlreadyStarted);
        }

        let mut backend = backend.boxed();
        let child_pid = backend.child_pid();
        let (output_tx, output_rx) = mpsc::channel(64);
        let (input_tx, input_rx) = mpsc::channel(64);

        let kill = shutdown.child_token();
        let pump_kill = kill.clone();
        let pump = tokio::spawn(async move {
            // Biased so a backend that has already exited reports its real
            // status instead of a synthesized signal.
            tokio::select! {
                biased;
                res = backend.run(output_tx, input_rx) => res,
                _ = pump_kill.cancelled() => {
                    // Dropping the backend terminates the subprocess group.
                    Ok(ExitStatus { code: None, signal: Some(nix::libc::SIGHUP) })
                }
            }
        });

        self.session = Some(Session {
            state: State::Started,
            view_source: false,
            input_tx,
            sync: Synchronizer::new(output_rx, self.config.scan_size),
            pump,
            kill,
            child_pid,
        });
        info!(program = %self.config.program, "browser started");
        Ok(())
    }

    /// Stop the subprocess and release every resource.
    ///
    /// Idempotent: closing an unstarted browser is a no-op. The browser is
    /// reset to its unstarted state even when teardown reports an error.
    pub async fn close(&mut self) -> Result<(), Error> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        info!("closing browser");
        session.teardown().await
    }

    /// Block until the subprocess exits on its own, then release
    /// everything. An abnormal exit wins over any teardown error.
    pub async fn wait(&mut self) -> Result<(), Error> {
        let Some(session) = self.session.take() else {
            return Err(Error::NotStarted);
        };
        let Session { input_tx, sync, pump, kill, .. } = session;
        let exit = pump.await;
        kill.cancel();
        drop(input_tx);
        drop(sync);
        match exit {
            Ok(Ok(status)) if status.success() => Ok(()),
            Ok(Ok(status)) => Err(Error::ProcessExit(status)),
            Ok(Err(e)) => Err(Error::Teardown(e)),
            Err(e) => Err(Error::Teardown(e.into())),
        }
    }

    /// Bring the session to a known baseline where a command can be sent.
    ///
    /// - Started: probe for the splash screen without blocking; while it
    ///   is still showing the session stays Started and the caller retries
    ///   later; once absent the session is Idle.
    /// - Idle: nothing to do.
    /// - Menu: one ESC closes whatever is open.
    pub async fn close_menu(&mut self) -> Result<(), Error> {
        let session = self.session.as_mut().ok_or(Error::NotStarted)?;
        match session.state {
            State::Started => {
                if session.expect(pattern::SPLASH, Wait::Immediate).await?.is_some() {
                    debug!("splash screen still showing");
                    return Ok(());
                }
                session.state = State::Idle;
                Ok(())
            }
            State::Idle => Ok(()),
            State::Menu(menu) => {
                debug!(?menu, "closing menu");
                session.send(keys::ESC).await?;
                session.state = State::Idle;
                Ok(())
            }
        }
    }

    /// Open the dropdown menu bar and confirm it rendered.
    pub async fn open_dropdown(&mut self) -> Result<(), Error> {
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.state == State::Menu(Menu::Dropdown))
        {
            return Ok(());
        }
        self.close_menu().await?;
        let session = self.session_mut()?;
        session.send(keys::ESC).await?;
        session.expect(&[pattern::DROPDOWN_MENU], Wait::Unbounded).await?;
        session.state = State::Menu(Menu::Dropdown);
        Ok(())
    }

    /// Close any open menu, then inject `bytes` without confirmation.
    pub(crate) async fn send_idle(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.close_menu().await?;
        self.session_mut()?.send(bytes).await
    }

    pub(crate) fn session_mut(&mut self) -> Result<&mut Session, Error> {
        self.session.as_mut().ok_or(Error::NotStarted)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for Browser {
    fn drop(&mut self) {
        // Terminate a still-attached subprocess; the detached pump task
        // finishes the reaping.
        if let Some(session) = self.session.take() {
            session.kill.cancel();
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
