use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// `/a.txt` = "hello" and `/dir/b.txt` = "world"
#[fixture]
pub fn hello_world_dir(repository_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("dir").join("b.txt"),
        "world".to_string(),
    ));

    repository_dir
}

/// Start the shell on `dir` and feed it `script` on stdin
pub fn run_simplegit_shell(dir: &Path, script: &str) -> Command {
    let mut cmd = Command::cargo_bin("simplegit").expect("Failed to find simplegit binary");
    cmd.arg(dir)
        .arg("--no-color")
        .env_remove("SIMPLEGIT_AUTHOR")
        .env_remove("RUST_LOG")
        .write_stdin(script.to_string());

    cmd
}
