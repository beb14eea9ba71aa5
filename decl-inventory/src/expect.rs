// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use crate::inventory::{DeclKind, Declaration};
use anyhow::{Context, Result, anyhow};
use std::path::Path;

/// Declarations that must be present, read from a TOML file of the form
///
/// ```toml
/// [[declaration]]
/// kind = "const"
/// name = "VERSION"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expectations {
	pub declarations: Vec<(DeclKind, String)>,
}

impl Expectations {
	pub fn parse(text: &str) -> Result<Self> {
		let manifest: toml::Value = text.parse().context("Failed to parse expectation TOML")?;
		let Some(entries) = manifest.get("declaration") else {
			return Ok(Self::default());
		};
		let entries = entries.as_array().ok_or_else(|| anyhow!("`declaration` must be an array of tables"))?;

		let declarations = entries
			.iter()
			.enumerate()
			.map(|(i, entry)| -> Result<(DeclKind, String)> {
				let field = |key: &str| {
					entry
						.get(key)
						.and_then(|v| v.as_str())
						.ok_or_else(|| anyhow!("declaration #{} is missing string key `{key}`", i + 1))
				};
				Ok((field("kind")?.parse::<DeclKind>()?, field("name")?.to_string()))
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Self { declarations })
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
		Self::parse(&text).with_context(|| format!("Invalid expectation file {}", path.display()))
	}

	/// Expected declarations with no match in `found`.
	#[must_use]
	pub fn missing(&self, found: &[Declaration]) -> Vec<(DeclKind, String)> {
		self.declarations
			.iter()
			.filter(|(kind, name)| !found.iter().any(|d| d.kind == *kind && d.name == *name))
			.cloned()
			.collect()
	}
}
