// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use hello_fixture::Status;
use std::process::ExitCode;

fn main() -> ExitCode {
	hello_fixture::telemetry::init();

	let status = match hello_fixture::greet(&mut std::io::stdout().lock()) {
		Ok(()) => Status::Ok,
		Err(err) => {
			eprintln!("Error: {err:?}");
			Status::Error
		}
	};
	tracing::debug!(code = status.code(), "exiting");
	status.into()
}
