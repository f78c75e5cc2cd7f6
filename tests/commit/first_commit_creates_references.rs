use crate::common::command::{
    list_commit_ids, read_parent_field, read_references, repository_dir, run_wit_command,
    wit_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn first_commit_points_head_and_master_at_it(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "1".to_string(),
    ));
    run_wit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    wit_commit(repository_dir.path(), "first")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master \(root-commit\) [0-9a-f]{7}\] first\n$",
        )?);

    let commits = list_commit_ids(repository_dir.path());
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].len(), 40);
    assert_eq!(
        read_references(repository_dir.path()),
        vec![
            ("HEAD".to_string(), commits[0].clone()),
            ("master".to_string(), commits[0].clone()),
        ]
    );
    assert_eq!(read_parent_field(repository_dir.path(), &commits[0]), "None");

    let metadata = std::fs::read_to_string(
        repository_dir
            .path()
            .join(".wit")
            .join("images")
            .join(format!("{}.txt", commits[0])),
    )?;
    assert_eq!(
        metadata,
        "parent=None\ndate=Sun Jan  1 12:00:00 2023 +0000\nmessage=first"
    );

    Ok(())
}
