// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use linksctl::config::Config;
use linksctl::error::Error;
use linksctl::pattern;
use linksctl::session::{Browser, Menu, State};
use linksctl::test_support::{flatten, MockPty};
use tokio_util::sync::CancellationToken;

/// A full scripted session: navigate, scroll, toggle source, reload,
/// save into an existing file, quit. Asserts the exact byte stream the
/// browser would have received.
#[tokio::test]
async fn scripted_end_to_end_session() -> anyhow::Result<()> {
    let mock = MockPty::with_banners(&[
        pattern::GO_TO_MENU,    // go-to dialog opened
        pattern::DROPDOWN_MENU, // document loaded
        pattern::DROPDOWN_MENU, // reload finished
        pattern::FILE_EXISTS,   // save target conflict
    ]);
    let captured = mock.captured_input();

    let mut b = Browser::new(Config::test());
    b.open_with(mock, CancellationToken::new())?;
    assert_eq!(b.state(), Some(State::Started));

    b.navigate("https://example.com/docs").await?;
    assert_eq!(b.state(), Some(State::Menu(Menu::Dropdown)));

    b.scroll_down().await?;
    assert_eq!(b.state(), Some(State::Idle));

    b.view_source().await?;
    b.view_html().await?;

    b.reload().await?;
    assert_eq!(b.state(), Some(State::Menu(Menu::Dropdown)));

    // The dropdown is already open, so the save goes straight to the
    // File menu hotkey; the conflict prompt is declined.
    b.save_formatted_document("out.html", false).await?;

    b.quit().await?;
    assert_eq!(b.state(), None);

    let expected = [
        b"ghttps://example.com/docs\n\x1b".as_slice(), // go-to submission
        b"\x1b",                                       // dropdown closed for scroll
        b"\x1b[6~",                                    // page down
        b"\\\\",                                       // source on, source off
        b"\x12\x1b",                                   // reload
        b"\x1bfdout.html\n",                           // save via File menu
        b"\x1b",                                       // decline overwrite
        b"\x1b\x03",                                   // close dropdown, interrupt
    ]
    .concat();
    assert_eq!(flatten(&captured), expected);
    Ok(())
}

#[tokio::test]
async fn real_subprocess_clean_exit() -> anyhow::Result<()> {
    let mut config = Config::test();
    config.program = "true".to_owned();

    let mut b = Browser::new(config);
    b.open(CancellationToken::new())?;
    assert!(b.child_pid().is_some());

    b.wait().await?;
    assert_eq!(b.state(), None);
    Ok(())
}

#[tokio::test]
async fn real_subprocess_failure_surfaces() -> anyhow::Result<()> {
    let mut config = Config::test();
    config.program = "false".to_owned();

    let mut b = Browser::new(config);
    b.open(CancellationToken::new())?;

    let result = b.wait().await;
    assert!(matches!(
        result,
        Err(Error::ProcessExit(status)) if status.code == Some(1)
    ));
    Ok(())
}

#[tokio::test]
async fn shutdown_token_terminates_real_subprocess() -> anyhow::Result<()> {
    let mut config = Config::test();
    config.program = "cat".to_owned();

    let shutdown = CancellationToken::new();
    let mut b = Browser::new(config);
    b.open(shutdown.clone())?;

    shutdown.cancel();
    let result = b.wait().await;
    assert!(matches!(
        result,
        Err(Error::ProcessExit(status)) if status.signal.is_some()
    ));
    Ok(())
}
