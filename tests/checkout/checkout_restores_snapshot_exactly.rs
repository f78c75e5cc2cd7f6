use crate::common::command::{init_repository_dir, read_reference, run_wit_command, wit_commit};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_removes_tracked_files_missing_from_target(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = read_reference(dir, "HEAD").expect("HEAD");

    write_file(FileSpec::new(
        dir.join("extra").join("later.txt"),
        "later".to_string(),
    ));
    run_wit_command(dir, &["add", "extra"]).assert().success();
    wit_commit(dir, "add extra").assert().success();

    run_wit_command(dir, &["checkout", &first]).assert().success();

    assert!(!dir.join("extra").exists());
    assert!(!dir.join(".wit").join("staging_area").join("extra").exists());
    assert_eq!(read_file(&dir.join("a").join("b").join("3.txt")), "three");

    run_wit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Changes to be committed:\n\nChanges not staged for commit:\n\nUntracked files:\n",
        ));

    run_wit_command(dir, &["checkout", "master"]).assert().success();
    assert_eq!(read_file(&dir.join("extra").join("later.txt")), "later");

    Ok(())
}
