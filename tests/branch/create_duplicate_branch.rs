use crate::common::command::{init_repository_dir, read_references, run_wit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("feature")]
#[case("master")]
fn create_duplicate_branch_fails(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_wit_command(dir, &["branch", "feature"]).assert().success();
    let before = read_references(dir);

    run_wit_command(dir, &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "branch named {name} already exists"
        )));

    assert_eq!(read_references(dir), before);

    Ok(())
}
