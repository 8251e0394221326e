// SPDX-License-Identifier: BUSL-1.1
// Copyright 2025 Alfred Jean LLC

use super::*;

use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::pattern;
use crate::test_support::{flatten, settle, MockPty};

fn browser() -> Browser {
    Browser::new(Config::test())
}

#[tokio::test]
async fn open_twice_returns_already_started() -> anyhow::Result<()> {
    let mut b = browser();
    b.open_with(MockPty::new(), CancellationToken::new())?;

    let result = b.open_with(MockPty::new(), CancellationToken::new());
    assert!(matches!(result, Err(Error::AlreadyStarted)));
    assert_eq!(b.state(), Some(State::Started));
    Ok(())
}

#[tokio::test]
async fn close_resets_to_unstarted_and_is_idempotent() -> anyhow::Result<()> {
    let mut b = browser();
    b.open_with(MockPty::new(), CancellationToken::new())?;

    b.close().await?;
    assert_eq!(b.state(), None);

    // Second close on an unstarted browser is a no-op.
    b.close().await?;
    assert_eq!(b.state(), None);
    Ok(())
}

#[tokio::test]
async fn close_menu_requires_a_session() {
    let mut b = browser();
    let result = b.close_menu().await;
    assert!(matches!(result, Err(Error::NotStarted)));
}

#[tokio::test]
async fn started_becomes_idle_when_no_splash() -> anyhow::Result<()> {
    let mut b = browser();
    b.open_with(MockPty::new(), CancellationToken::new())?;
    settle().await;

    b.close_menu().await?;
    assert_eq!(b.state(), Some(State::Idle));
    Ok(())
}

#[tokio::test]
async fn visible_splash_keeps_session_started() -> anyhow::Result<()> {
    let mut b = browser();
    b.open_with(
        MockPty::with_banners(&[pattern::WELCOME_BANNER]),
        CancellationToken::new(),
    )?;
    settle().await;

    // Splash still showing: stay Started, caller retries later.
    b.close_menu().await?;
    assert_eq!(b.state(), Some(State::Started));

    // The probe consumed the splash bytes; the retry reaches Idle.
    b.close_menu().await?;
    assert_eq!(b.state(), Some(State::Idle));
    Ok(())
}

#[tokio::test]
async fn closing_an_open_menu_sends_one_escape() -> anyhow::Result<()> {
    let mock = MockPty::with_banners(&[pattern::DROPDOWN_MENU]);
    let captured = mock.captured_input();
    let mut b = browser();
    b.open_with(mock, CancellationToken::new())?;

    b.close_menu().await?;
    b.open_dropdown().await?;
    assert_eq!(b.state(), Some(State::Menu(Menu::Dropdown)));

    b.close_menu().await?;
    assert_eq!(b.state(), Some(State::Idle));
    settle().await;
    assert_eq!(flatten(&captured), b"\x1b\x1b".to_vec());
    Ok(())
}

#[tokio::test]
async fn open_dropdown_is_a_noop_when_already_open() -> anyhow::Result<()> {
    let mock = MockPty::with_banners(&[pattern::DROPDOWN_MENU]);
    let captured = mock.captured_input();
    let mut b = browser();
    b.open_with(mock, CancellationToken::new())?;

    b.open_dropdown().await?;
    b.open_dropdown().await?;
    settle().await;
    assert_eq!(flatten(&captured), b"\x1b".to_vec());
    Ok(())
}

#[tokio::test]
async fn wait_returns_ok_on_clean_exit() -> anyhow::Result<()> {
    let mut b = browser();
    b.open_with(MockPty::new().eof_after_output(), CancellationToken::new())?;

    b.wait().await?;
    assert_eq!(b.state(), None);
    Ok(())
}

#[tokio::test]
async fn wait_surfaces_abnormal_exit() -> anyhow::Result<()> {
    let mut b = browser();
    let mock = MockPty::new()
        .eof_after_output()
        .exit_status(ExitStatus { code: Some(2), signal: None });
    b.open_with(mock, CancellationToken::new())?;

    let result = b.wait().await;
    assert!(matches!(result, Err(Error::ProcessExit(ExitStatus { code: Some(2), .. }))));
    assert_eq!(b.state(), None);
    Ok(())
}

#[tokio::test]
async fn cancellation_terminates_the_subprocess() -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    let mut b = browser();
    b.open_with(MockPty::new(), shutdown.clone())?;

    shutdown.cancel();
    let result = b.wait().await;
    assert!(matches!(result, Err(Error::ProcessExit(ExitStatus { signal: Some(_), .. }))));
    assert_eq!(b.state(), None);
    Ok(())
}

#[tokio::test]
async fn view_source_mode_is_false_when_unstarted() {
    let b = browser();
    assert!(!b.view_source_mode());
    assert_eq!(b.state(), None);
    assert_eq!(b.child_pid(), None);
}
