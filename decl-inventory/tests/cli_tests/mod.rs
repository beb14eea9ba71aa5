use super::*;
use assert_cmd::cargo_bin_cmd;

#[test]
fn test_binary_help() {
	cargo_bin_cmd!("decl-inventory").arg("--help").assert().success();
}

#[test]
fn test_binary_lists_fixture() {
	let fixture = fixtures_dir().join("simple.rs");
	let expected = format!("{}:8\tconst\tVERSION\n", fixture.display());
	cargo_bin_cmd!("decl-inventory")
		.args(["--kind", "const", fixture.to_str().unwrap()])
		.assert()
		.success()
		.stdout(expected);
}

#[test]
fn test_binary_missing_expectation_fails() {
	let tempdir = tempfile::tempdir().unwrap();
	let source = tempdir.path().join("lib.rs");
	fs::write(&source, "fn add() {}\n").unwrap();

	cargo_bin_cmd!("decl-inventory")
		.args(["--expect", fixtures_dir().join("simple.toml").to_str().unwrap(), source.to_str().unwrap()])
		.assert()
		.failure()
		.code(1);
}

#[test]
fn test_expect_mode_passes_for_fixture() {
	let expect = fixtures_dir().join("simple.toml");
	let fixture = fixtures_dir().join("simple.rs");
	let result = run_inventory(&["--expect", expect.to_str().unwrap(), fixture.to_str().unwrap()]);
	assert!(result.success());
}

#[test]
fn test_expect_mode_checks_every_file() {
	let tempdir = tempfile::tempdir().unwrap();
	fs::write(tempdir.path().join("a.rs"), fs::read_to_string(fixtures_dir().join("simple.rs")).unwrap()).unwrap();
	fs::write(tempdir.path().join("b.rs"), "const VERSION: &str = \"1.0.0\";\n").unwrap();
	let expect = fixtures_dir().join("simple.toml");

	let result = run_inventory(&["-r", "--expect", expect.to_str().unwrap(), tempdir.path().to_str().unwrap()]);
	assert!(!result.success(), "b.rs lacks most expected declarations");
}

#[test]
fn test_unknown_kind_is_an_error() {
	let fixture = fixtures_dir().join("simple.rs");
	let result = run_inventory(&["--kind", "class", fixture.to_str().unwrap()]);
	assert!(!result.success());
}

#[test]
fn test_directory_requires_recursive() {
	let tempdir = tempfile::tempdir().unwrap();
	fs::write(tempdir.path().join("lib.rs"), "fn a() {}\n").unwrap();

	assert!(!run_inventory(&[tempdir.path().to_str().unwrap()]).success());
	assert!(run_inventory(&["--recursive", tempdir.path().to_str().unwrap()]).success());
}

#[test]
fn test_nonexistent_path() {
	let result = run_inventory(&["/nonexistent/path/file.rs"]);
	assert!(!result.success());
}

#[test]
fn test_parse_error_fails() {
	let tempdir = tempfile::tempdir().unwrap();
	let source = tempdir.path().join("broken.rs");
	fs::write(&source, "fn broken( {\n").unwrap();

	assert!(!run_inventory(&[source.to_str().unwrap()]).success());
}

#[test]
fn test_missing_expectation_file() {
	let fixture = fixtures_dir().join("simple.rs");
	let result = run_inventory(&["--expect", "/nonexistent/expect.toml", fixture.to_str().unwrap()]);
	assert!(!result.success());
}

#[test]
fn test_binary_repeated_kind_over_sorted_directory() {
	let tempdir = tempfile::tempdir().unwrap();
	fs::write(tempdir.path().join("b.rs"), "const B: i32 = 1;\nstruct S;\nfn b() {}\n").unwrap();
	fs::write(tempdir.path().join("a.rs"), "use std::{\n    fmt,\n    io,\n};\nfn a() {}\nconst A: i32 = 0;\n").unwrap();

	let dir = tempdir.path();
	let a = dir.join("a.rs");
	let b = dir.join("b.rs");
	let expected = format!(
		"{a}:5\tfn\ta\n{a}:6\tconst\tA\n{b}:1\tconst\tB\n{b}:3\tfn\tb\n",
		a = a.display(),
		b = b.display()
	);
	cargo_bin_cmd!("decl-inventory")
		.args(["--kind", "const", "--kind", "fn", "-r", dir.to_str().unwrap()])
		.assert()
		.success()
		.stdout(expected);
}

#[test]
fn test_binary_one_line_per_declaration() {
	let tempdir = tempfile::tempdir().unwrap();
	let source = tempdir.path().join("m.rs");
	fs::write(&source, "use std::{\n    fmt,\n    io,\n};\nfn a() {}\n").unwrap();

	let expected = format!("{s}:1\tuse\tstd::{{fmt, io}}\n{s}:5\tfn\ta\n", s = source.display());
	cargo_bin_cmd!("decl-inventory")
		.arg(source.to_str().unwrap())
		.assert()
		.success()
		.stdout(expected);
}

#[test]
fn test_bom_file_does_not_abort_recursive_run() {
	let tempdir = tempfile::tempdir().unwrap();
	fs::write(tempdir.path().join("bom.rs"), "\u{feff}fn a() {}\n").unwrap();
	fs::write(tempdir.path().join("plain.rs"), "fn b() {}\n").unwrap();

	assert!(run_inventory(&["-r", tempdir.path().to_str().unwrap()]).success());
}
