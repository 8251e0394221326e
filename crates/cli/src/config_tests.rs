// SPDX-License-Identifier: BUSL-1.1
// Copyright 2025 Alfred Jean LLC

use super::*;

use std::time::Duration;

#[test]
fn defaults_are_valid() -> anyhow::Result<()> {
    let config = Config::test();
    config.validate()?;
    assert_eq!(config.program, "links2");
    assert_eq!(config.exists_prompt_wait(), Duration::from_millis(250));
    Ok(())
}

#[test]
fn cli_defaults_parse() -> anyhow::Result<()> {
    let config = Config::try_parse_from(["linksctl"])?;
    config.validate()?;
    assert_eq!(config.cols, 132);
    assert_eq!(config.rows, 43);
    assert!(config.address.is_none());
    Ok(())
}

#[test]
fn empty_program_is_rejected() {
    let mut config = Config::test();
    config.program = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn zero_geometry_is_rejected() {
    let mut config = Config::test();
    config.cols = 0;
    assert!(config.validate().is_err());
}

#[test]
fn tiny_scan_window_is_rejected() {
    let mut config = Config::test();
    config.scan_size = 16;
    assert!(config.validate().is_err());
}
