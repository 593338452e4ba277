use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_nocco")))
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

const CSHARP: &str = "\
// **Example** is a tiny program.
using System;

/// <summary>
/// Adds <c>a</c> and <c>b</c>.
/// </summary>
/// <param name=\"a\">First</param>
/// <returns>The sum</returns>
static int Add(int a, int b) => a + b;
";

#[test]
fn no_targets_does_nothing() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!dir.path().join("docs").exists());
}

#[test]
fn generates_page_and_assets() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Example.cs", CSHARP);

    cmd()
        .current_dir(dir.path())
        .arg("*.cs")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) found."));

    let docs = dir.path().join("docs");
    assert!(docs.join("nocco.css").is_file());
    assert!(docs.join("prettify.js").is_file());

    let page = fs::read_to_string(docs.join("example.html")).unwrap();
    assert!(page.contains("<title>Example.cs</title>"));
    assert!(page.contains("href=\"nocco.css\""));
    assert!(page.contains("<strong>Example</strong> is a tiny program."));
    assert!(page.contains("Adds <code>a</code> and <code>b</code>."));
    assert!(page.contains("<strong>argument</strong> <em>a</em>: First"));
    assert!(page.contains("<strong>returns</strong>: The sum"));
    assert!(page.contains("static int Add(int a, int b) =&gt; a + b;"));
    assert!(page.contains("<tr id=\"section_2\">"));
    assert!(!page.contains("<summary>"));
}

#[test]
fn nested_sources_mirror_tree_lowercased() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Top.js", "// top\nvar a;\n");
    write(dir.path(), "Sub/Dir/File.JS", "// nested\nvar b;\n");

    cmd()
        .current_dir(dir.path())
        .arg("*.js")
        .arg("*.JS")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s) found."));

    let nested = fs::read_to_string(dir.path().join("docs/sub/dir/file.html")).unwrap();
    assert!(nested.contains("href=\"../../nocco.css\""));
    assert!(nested.contains("href=\"../../top.html\""));
    assert!(nested.contains("href=\"../../sub/dir/file.html\""));

    let top = fs::read_to_string(dir.path().join("docs/top.html")).unwrap();
    assert!(top.contains("href=\"sub/dir/file.html\""));
}

#[test]
fn skips_ignored_and_reserved() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Form.cs", "// form\n");
    write(dir.path(), "Form.Designer.cs", "// generated\n");
    write(dir.path(), "bin/Debug/Out.cs", "// build output\n");
    write(dir.path(), "obj/Tmp.cs", "// build output\n");
    write(dir.path(), "README.md", "# readme\n");

    cmd()
        .current_dir(dir.path())
        .arg("*")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) found."));

    assert!(dir.path().join("docs/form.html").exists());
    assert!(!dir.path().join("docs/form.designer.html").exists());
    assert!(!dir.path().join("docs/bin").exists());
    assert!(!dir.path().join("docs/readme.html").exists());
}

#[test]
fn second_run_does_not_document_output() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app.js", "// app\n");

    for _ in 0..2 {
        cmd()
            .current_dir(dir.path())
            .arg("*.js")
            .assert()
            .success()
            .stdout(predicate::str::contains("1 file(s) found."));
    }
}

#[test]
fn custom_output_and_root() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "project/lib.sql", "-- Schema\ncreate table t (id int);\n");

    cmd()
        .current_dir(dir.path())
        .args(["-C", "project", "-o", "site", "*.sql"])
        .assert()
        .success();

    let page = fs::read_to_string(dir.path().join("site/lib.html")).unwrap();
    assert!(page.contains("<p>Schema</p>"));
    assert!(page.contains("create table t (id int);"));
}

#[test]
fn write_failure_aborts_run() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.js", "// a\n");
    // A directory where the page should go makes the write fail
    fs::create_dir_all(dir.path().join("docs/a.html")).unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("*.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn keep_going_reports_failures() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.js", "// a\n");
    write(dir.path(), "b.js", "// b\n");
    fs::create_dir_all(dir.path().join("docs/a.html")).unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--keep-going", "*.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed: a.js"))
        .stderr(predicate::str::contains("1 of 2 file(s) failed"));

    assert!(dir.path().join("docs/b.html").is_file());
}

#[test]
fn invalid_glob_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("[")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid glob pattern"));
}

#[test]
fn byte_order_mark_does_not_hide_first_comment() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Form.cs", "\u{feff}// Hello from a BOM file\nclass Form {}\n");

    cmd().current_dir(dir.path()).arg("*.cs").assert().success();

    let page = fs::read_to_string(dir.path().join("docs/form.html")).unwrap();
    assert!(page.contains("<p>Hello from a BOM file</p>"));
    assert!(!page.contains("// Hello"));
    assert!(!page.contains('\u{feff}'));
}

#[test]
fn dot_slash_target_matches_relative_path() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/a.js", "// a\n");
    write(dir.path(), "other/b.js", "// b\n");

    cmd()
        .current_dir(dir.path())
        .arg("./src/*.js")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) found."));

    assert!(dir.path().join("docs/src/a.html").is_file());
}

#[test]
fn unmatched_target_warns() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.js", "// a\n");

    cmd()
        .current_dir(dir.path())
        .env_remove("NOCCO_LOG")
        .arg("./lib/*.js")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 file(s) found."))
        .stderr(predicate::str::contains("no files matched"));
}

#[test]
fn only_the_output_directory_itself_is_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.js", "// a\n");
    write(dir.path(), "src/site/b.js", "// b\n");

    // The second run sees site/prettify.js, which must stay excluded
    for _ in 0..2 {
        cmd()
            .current_dir(dir.path())
            .args(["-o", "site", "*.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 file(s) found."));
    }

    assert!(dir.path().join("site/src/site/b.html").is_file());
    assert!(!dir.path().join("site/prettify.html").exists());
}
