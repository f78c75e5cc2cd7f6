use crate::common::command::{repository_dir, run_wit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn everything_staged_is_new_before_the_first_commit(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_wit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "1".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "2".to_string()));
    run_wit_command(dir, &["add", "a.txt"]).assert().success();

    run_wit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "On branch master\nCurrent id: None\n",
        ))
        .stdout(predicate::str::contains(
            "Changes to be committed:\n        new file:   a.txt\n",
        ))
        .stdout(predicate::str::ends_with("Untracked files:\n        b.txt\n"));

    Ok(())
}
