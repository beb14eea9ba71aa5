// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config_flag;

/// Filter used when `RUST_LOG` is unset, driven by the `debug` entry in [`crate::CONFIG`].
#[must_use]
pub fn default_directive() -> &'static str {
	if config_flag("debug") == Some(true) { "debug" } else { "warn" }
}

/// Install a stderr fmt subscriber. Stdout is reserved for program output.
/// Does nothing if a global subscriber is already set.
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()));
	let _ = tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_filter(filter))
		.try_init();
}
