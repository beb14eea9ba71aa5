// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

pub mod expect;
pub mod inventory;

use anyhow::{Context, Result};
use argh::FromArgs;
use expect::Expectations;
use inventory::{DeclKind, Declaration};
use std::path::{Path, PathBuf};

#[derive(FromArgs, Debug)]
/// List the top-level declarations of Rust source files
pub struct Args {
	/// process all .rs files in directory recursively
	#[argh(switch, short = 'r')]
	pub recursive: bool,

	/// only print declarations of this kind (repeatable), e.g. `const`, `struct`, `fn`
	#[argh(option)]
	pub kind: Vec<String>,

	/// path to a TOML file of declarations every processed file must contain; exit 1 if any are missing
	#[argh(option)]
	pub expect: Option<PathBuf>,

	/// files or directories to process (defaults to current directory)
	#[argh(positional)]
	pub paths: Vec<PathBuf>,
}

fn process_file(path: &Path, kinds: &[DeclKind], expectations: Option<&Expectations>) -> Result<bool> {
	let source = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let declarations = inventory::list_declarations(&source).with_context(|| format!("Failed to inventory {}", path.display()))?;
	tracing::debug!(path = %path.display(), count = declarations.len(), "listed declarations");

	for Declaration { kind, name, line } in &declarations {
		if kinds.is_empty() || kinds.contains(kind) {
			println!("{}:{line}\t{kind}\t{name}", path.display());
		}
	}

	let Some(expectations) = expectations else {
		return Ok(true);
	};
	let missing = expectations.missing(&declarations);
	for (kind, name) in &missing {
		eprintln!("Missing in {}: {kind} {name}", path.display());
	}
	Ok(missing.is_empty())
}

/// Run the decl-inventory tool with the given command-line arguments.
pub fn run(args: &[&str]) -> i32 {
	let parsed = match Args::from_args(&["decl-inventory"], args) {
		Ok(args) => args,
		Err(early_exit) => {
			println!("{}", early_exit.output);
			return i32::from(early_exit.status.is_err());
		}
	};

	match run_with_args(&parsed) {
		Ok(code) => code,
		Err(err) => {
			eprintln!("Error: {err:?}");
			1
		}
	}
}

/// Run the decl-inventory tool with parsed arguments.
pub fn run_with_args(args: &Args) -> Result<i32> {
	let kinds = args.kind.iter().map(|k| k.parse()).collect::<Result<Vec<DeclKind>>>()?;
	let expectations = args.expect.as_deref().map(Expectations::load).transpose()?;

	let paths = if args.paths.is_empty() {
		vec![PathBuf::from(".")]
	} else {
		args.paths.clone()
	};

	let mut all_present = true;
	let mut files_processed = 0;

	for path in paths {
		if args.recursive && path.is_dir() {
			for entry in walkdir::WalkDir::new(&path)
				.sort_by_file_name()
				.into_iter()
				.filter_map(std::result::Result::ok)
				.filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
			{
				all_present &= process_file(entry.path(), &kinds, expectations.as_ref())?;
				files_processed += 1;
			}
		} else if path.is_file() {
			all_present &= process_file(&path, &kinds, expectations.as_ref())?;
			files_processed += 1;
		} else if path.is_dir() {
			eprintln!("Skipping directory {} (use --recursive to process directories)", path.display());
		} else {
			eprintln!("Path does not exist: {}", path.display());
		}
	}

	if files_processed == 0 {
		eprintln!("No .rs files found to process");
		return Ok(1);
	}

	if all_present {
		Ok(0)
	} else {
		eprintln!("Expected declarations missing");
		Ok(1)
	}
}
