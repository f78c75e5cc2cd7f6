use crate::common::command::{
    init_repository_dir, read_active_branch, read_parent_field, read_reference, run_wit_command,
    wit_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commits_after_detached_checkout_leave_branch_in_place(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = read_reference(dir, "HEAD").expect("HEAD");

    write_file(FileSpec::new(dir.join("1.txt"), "second".to_string()));
    run_wit_command(dir, &["add", "1.txt"]).assert().success();
    wit_commit(dir, "second").assert().success();
    let second = read_reference(dir, "HEAD").expect("HEAD");

    run_wit_command(dir, &["checkout", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("detached HEAD"))
        .stdout(predicate::str::contains(format!(
            "HEAD is now at {}",
            &first[..7]
        )));
    assert_eq!(read_active_branch(dir), "master");

    run_wit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "HEAD detached at {}",
            &first[..7]
        )));

    write_file(FileSpec::new(dir.join("side.txt"), "side".to_string()));
    run_wit_command(dir, &["add", "side.txt"]).assert().success();
    wit_commit(dir, "detached work")
        .assert()
        .success()
        .stdout(predicate::str::contains("[detached HEAD "));

    let detached = read_reference(dir, "HEAD").expect("HEAD");
    assert_eq!(read_parent_field(dir, &detached), first);
    assert_eq!(read_reference(dir, "master"), Some(second));

    Ok(())
}

#[rstest]
fn checkout_unknown_revision_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_wit_command(dir, &["checkout", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown revision: nowhere"));

    run_wit_command(dir, &["checkout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "function 'checkout' must have one argument: commit_id",
        ));

    Ok(())
}
