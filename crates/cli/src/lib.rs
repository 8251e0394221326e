// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod addr;
pub mod command;
pub mod config;
pub mod error;
pub mod keys;
pub mod pattern;
pub mod pty;
pub mod scan;
pub mod session;
pub mod sync;
pub mod test_support;
