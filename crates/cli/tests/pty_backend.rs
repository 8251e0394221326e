// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use bytes::Bytes;
use linksctl::pty::spawn::NativePty;
use linksctl::pty::{Backend, ExitStatus};
use tokio::sync::mpsc;

#[tokio::test]
async fn spawn_and_reap() -> anyhow::Result<()> {
    let (output_tx, _output_rx) = mpsc::channel(64);
    let (_input_tx, input_rx) = mpsc::channel(64);

    let mut pty = NativePty::spawn("echo", 80, 24, "xterm")?;
    assert!(pty.child_pid().is_some());

    let status = pty.run(output_tx, input_rx).await?;
    assert_eq!(status, ExitStatus { code: Some(0), signal: None });
    Ok(())
}

#[tokio::test]
async fn input_reaches_the_child() -> anyhow::Result<()> {
    let (output_tx, mut output_rx) = mpsc::channel(64);
    let (input_tx, input_rx) = mpsc::channel(64);

    let mut pty = NativePty::spawn("cat", 80, 24, "xterm")?;
    let handle = tokio::spawn(async move { pty.run(output_tx, input_rx).await });

    input_tx.send(Bytes::from_static(b"ping\n")).await?;
    // Let cat consume the line so the Ctrl-D lands on an empty line.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    input_tx.send(Bytes::from_static(b"\x04")).await?;
    drop(input_tx);

    let status = handle.await??;
    assert_eq!(status.code, Some(0));

    let mut output = Vec::new();
    while let Ok(chunk) = output_rx.try_recv() {
        output.extend_from_slice(&chunk);
    }
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("ping"), "expected echo of 'ping' in output: {text:?}");
    Ok(())
}

#[tokio::test]
async fn nonzero_exit_is_reported() -> anyhow::Result<()> {
    let (output_tx, _output_rx) = mpsc::channel(64);
    let (_input_tx, input_rx) = mpsc::channel(64);

    let mut pty = NativePty::spawn("false", 80, 24, "xterm")?;
    let status = pty.run(output_tx, input_rx).await?;
    assert!(!status.success());
    assert_eq!(status.code, Some(1));
    Ok(())
}
