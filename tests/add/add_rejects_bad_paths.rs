use crate::common::command::{repository_dir, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_without_repository_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(repository_dir.path().join("a.txt"), "1")?;

    run_wit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no wit repository found"));

    Ok(())
}

#[rstest]
fn add_without_argument_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_wit_command(repository_dir.path(), &["add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "function 'add' must have one argument: file",
        ));

    Ok(())
}

#[rstest]
fn add_missing_file_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_wit_command(repository_dir.path(), &["add", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not match any files"));

    Ok(())
}

#[rstest]
fn add_metadata_directory_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_wit_command(repository_dir.path(), &["add", ".wit/images"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the repository working tree"));

    Ok(())
}

#[rstest]
fn add_path_outside_working_tree_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = repository_dir.path().join("project");
    std::fs::create_dir_all(&project)?;
    std::fs::write(repository_dir.path().join("outside.txt"), "x")?;

    run_wit_command(&project, &["init"]).assert().success();

    run_wit_command(&project, &["add", "../outside.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the repository working tree"));

    Ok(())
}

#[rstest]
fn missing_repository_is_reported_before_missing_argument(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for command in ["add", "commit", "checkout", "merge"] {
        run_wit_command(repository_dir.path(), &[command])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no wit repository found"));
    }

    Ok(())
}
