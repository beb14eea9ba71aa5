// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() -> std::process::ExitCode {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_filter(filter))
		.init();

	let args: Vec<String> = std::env::args().skip(1).collect();
	let args_refs: Vec<&str> = args.iter().map(String::as_str).collect();
	std::process::ExitCode::from(decl_inventory::run(&args_refs) as u8)
}
