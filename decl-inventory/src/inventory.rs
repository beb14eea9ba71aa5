// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use anyhow::{Result, anyhow};
use ra_ap_syntax::ast::HasModuleItem;
use ra_ap_syntax::ast::HasName;
use ra_ap_syntax::{AstNode, Edition, SourceFile, SyntaxKind, SyntaxNode, ast};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclKind {
	ExternCrate,
	Mod,
	Use,
	Const,
	Static,
	TypeAlias,
	Macro,
	MacroCall,
	Trait,
	Struct,
	Enum,
	Union,
	Impl,
	Fn,
	ExternBlock,
}

impl DeclKind {
	pub const ALL: [DeclKind; 15] = [
		DeclKind::ExternCrate,
		DeclKind::Mod,
		DeclKind::Use,
		DeclKind::Const,
		DeclKind::Static,
		DeclKind::TypeAlias,
		DeclKind::Macro,
		DeclKind::MacroCall,
		DeclKind::Trait,
		DeclKind::Struct,
		DeclKind::Enum,
		DeclKind::Union,
		DeclKind::Impl,
		DeclKind::Fn,
		DeclKind::ExternBlock,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			DeclKind::ExternCrate => "extern crate",
			DeclKind::Mod => "mod",
			DeclKind::Use => "use",
			DeclKind::Const => "const",
			DeclKind::Static => "static",
			DeclKind::TypeAlias => "type",
			DeclKind::Macro => "macro",
			DeclKind::MacroCall => "macro call",
			DeclKind::Trait => "trait",
			DeclKind::Struct => "struct",
			DeclKind::Enum => "enum",
			DeclKind::Union => "union",
			DeclKind::Impl => "impl",
			DeclKind::Fn => "fn",
			DeclKind::ExternBlock => "extern",
		}
	}
}

impl fmt::Display for DeclKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DeclKind {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		DeclKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| anyhow!("Unknown declaration kind {s:?}"))
	}
}

/// A top-level item found in a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
	pub kind: DeclKind,
	pub name: String,
	/// 1-based line of the item keyword, after any attributes or doc comments
	pub line: usize,
}

fn classify(item: &ast::Item) -> Result<(DeclKind, String)> {
	use DeclKind::*;
	Ok(match item {
		ast::Item::ExternCrate(i) => (ExternCrate, name_of(i.name_ref())?),
		ast::Item::Module(i) => (Mod, name_of(i.name())?),
		ast::Item::Use(i) => (Use, name_of(i.use_tree())?),
		ast::Item::Const(i) => (Const, name_of(i.name())?),
		ast::Item::Static(i) => (Static, name_of(i.name())?),
		ast::Item::TypeAlias(i) => (TypeAlias, name_of(i.name())?),
		ast::Item::MacroRules(i) => (Macro, name_of(i.name())?),
		ast::Item::MacroDef(i) => (Macro, name_of(i.name())?),
		ast::Item::MacroCall(i) => (MacroCall, name_of(i.path())?),
		ast::Item::Trait(i) => (Trait, name_of(i.name())?),
		ast::Item::Struct(i) => (Struct, name_of(i.name())?),
		ast::Item::Enum(i) => (Enum, name_of(i.name())?),
		ast::Item::Union(i) => (Union, name_of(i.name())?),
		ast::Item::Fn(i) => (Fn, name_of(i.name())?),
		ast::Item::Impl(i) => {
			let ty = name_of(i.self_ty())?;
			let ty = match strip_generics(&ty) {
				stripped if stripped.is_empty() => ty,
				stripped => stripped,
			};
			match i.trait_() {
				Some(tr) => (Impl, format!("{} for {ty}", node_text(tr.syntax()))),
				None => (Impl, ty),
			}
		}
		ast::Item::ExternBlock(_) => (ExternBlock, "extern".to_string()),
		ast::Item::AsmExpr(_) => anyhow::bail!("Unexpected AsmExpr item (rust-analyzer internal syntax)"),
	})
}

fn name_of(node: Option<impl AstNode>) -> Result<String> {
	node.map(|n| node_text(n.syntax())).ok_or_else(|| anyhow!("Item has no name"))
}

fn word_like(text: &str) -> bool {
	text.starts_with(|c: char| c.is_alphanumeric() || c == '_' || c == '\'')
}

/// Node text on one line, independent of how the source was laid out.
/// Tokens are joined without trivia, with a space after `,` and between
/// adjacent words, and trailing commas before a closing delimiter dropped.
fn node_text(node: &SyntaxNode) -> String {
	let tokens: Vec<_> = node
		.descendants_with_tokens()
		.filter_map(|el| el.into_token())
		.filter(|t| !matches!(t.kind(), SyntaxKind::COMMENT | SyntaxKind::WHITESPACE))
		.collect();

	let mut out = String::new();
	let mut prev: Option<&str> = None;
	for (i, token) in tokens.iter().enumerate() {
		let text = token.text();
		if text == "," && tokens.get(i + 1).is_some_and(|next| matches!(next.text(), "}" | ">" | "]")) {
			continue;
		}
		if prev.is_some_and(|p| p == "," || (word_like(p) && word_like(text))) {
			out.push(' ');
		}
		out.push_str(text);
		prev = Some(text);
	}
	out
}

/// Drop generic argument lists that follow a name, e.g. `Wrapper<T>` to `Wrapper`.
/// A leading qualified path like `<T as X>::Y` is kept.
fn strip_generics(ty: &str) -> String {
	let mut out = String::new();
	let mut depth = 0usize;
	let mut prev = ' ';
	for c in ty.chars() {
		match c {
			'<' if depth > 0 || out.ends_with(|p: char| p.is_alphanumeric() || p == '_') => depth += 1,
			// `->` inside fn types does not close a list
			'>' if depth > 0 && prev != '-' => depth -= 1,
			_ if depth > 0 => {}
			_ => out.push(c),
		}
		prev = c;
	}
	out.trim().to_string()
}

/// Offset of the first token that is not an attribute, comment or whitespace.
fn item_start(item: &ast::Item) -> usize {
	item.syntax()
		.children_with_tokens()
		.find(|el| !matches!(el.kind(), SyntaxKind::ATTR | SyntaxKind::COMMENT | SyntaxKind::WHITESPACE))
		.map_or_else(|| item.syntax().text_range().start(), |el| el.text_range().start())
		.into()
}

/// List the top-level items of a Rust source file in source order.
/// Inline module bodies are not descended into.
pub fn list_declarations(source: &str) -> Result<Vec<Declaration>> {
	// rustc accepts a leading BOM; the parser does not
	let source = source.strip_prefix('\u{feff}').unwrap_or(source);
	let parse = SourceFile::parse(source, Edition::Edition2024);

	if !parse.errors().is_empty() {
		anyhow::bail!(
			"File has parse errors:\n{}",
			parse.errors().iter().map(|e| format!("  {e}")).collect::<Vec<_>>().join("\n")
		);
	}

	let newlines: Vec<usize> = source.match_indices('\n').map(|(i, _)| i).collect();

	parse
		.tree()
		.items()
		.map(|item| {
			let (kind, name) = classify(&item)?;
			let start = item_start(&item);
			Ok(Declaration {
				kind,
				name,
				line: newlines.partition_point(|&n| n < start) + 1,
			})
		})
		.collect()
}
