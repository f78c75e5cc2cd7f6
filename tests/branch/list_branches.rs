use crate::common::command::{init_repository_dir, read_reference, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn list_branches_flags_the_active_one(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_reference(dir, "HEAD").expect("HEAD");
    let short = &head[..7];

    run_wit_command(dir, &["branch", "feature"]).assert().success();
    run_wit_command(dir, &["checkout", "feature"]).assert().success();

    run_wit_command(dir, &["branch"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "  master {short}\n* feature {short}\n"
        )));

    Ok(())
}
