use crate::common::command::{init_repository_dir, list_commit_ids, run_wit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_without_argument_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(init_repository_dir.path(), &["merge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "function 'merge' must have one argument: branch_name",
        ));

    Ok(())
}

#[rstest]
fn merge_unknown_branch_fails_without_committing(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let before = list_commit_ids(dir);

    run_wit_command(dir, &["merge", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown revision: ghost"));

    assert_eq!(list_commit_ids(dir), before);

    Ok(())
}
