// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

//! A handful of unrelated top-level declarations, kept small so analysis
//! tools have a known set of items to find.

pub mod telemetry;

use anyhow::Context;
use std::collections::HashMap;
use std::io::Write;
use std::process::ExitCode;
use std::sync::LazyLock;

#[doc(hidden)]
pub use tracing as __tracing;

pub const VERSION: &str = "1.0.0";

pub const GREETING: &str = "Hello, World!";

pub type Result<T> = std::result::Result<T, String>;

/// Process-wide settings. Written once on first access, never mutated.
pub static CONFIG: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| HashMap::from([("debug", "false")]));

/// Emit a debug-level log event. Goes to the log sink, never stdout.
#[macro_export]
macro_rules! debug_print {
	($($arg:tt)*) => {
		$crate::__tracing::debug!($($arg)*)
	};
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Point { x, y }
	}

	/// Euclidean distance to `other`.
	#[must_use]
	pub fn distance(&self, other: &Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

pub trait Drawable {
	fn label(&self) -> String;

	fn draw<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
		writeln!(out, "{}", self.label())
	}
}

impl Drawable for Point {
	fn label(&self) -> String {
		format!("Point at ({}, {})", self.x, self.y)
	}
}

#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
	Ok = 0,
	Error = 1,
}

impl Status {
	#[must_use]
	pub fn code(self) -> i32 {
		self as i32
	}

	#[must_use]
	pub fn is_ok(self) -> bool {
		self == Status::Ok
	}
}

impl From<Status> for ExitCode {
	fn from(status: Status) -> Self {
		ExitCode::from(status as u8)
	}
}

/// Wrapping sum of `a` and `b`.
#[must_use]
pub fn add(a: i32, b: i32) -> i32 {
	a.wrapping_add(b)
}

/// Look up a boolean entry in [`CONFIG`]. Only `"true"` and `"false"` parse.
#[must_use]
pub fn config_flag(key: &str) -> Option<bool> {
	CONFIG.get(key).and_then(|value| value.parse().ok())
}

/// Write the greeting line to `out`.
pub fn greet<W: Write>(out: &mut W) -> anyhow::Result<()> {
	debug_print!(version = VERSION, "writing greeting");
	writeln!(out, "{GREETING}").context("Failed to write greeting")?;
	out.flush().context("Failed to flush greeting")
}

pub mod utils {
	/// Strip leading and trailing whitespace.
	#[must_use]
	pub fn format(s: &str) -> String {
		s.trim().to_string()
	}
}
