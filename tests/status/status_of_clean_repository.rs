use crate::common::command::{init_repository_dir, read_reference, run_wit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn clean_repository_reports_empty_views(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_reference(dir, "HEAD").expect("HEAD");

    let output = run_wit_command(dir, &["status"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(
        stdout,
        format!(
            "On branch master\nCurrent id: {head}\n\n\
             Changes to be committed:\n\n\
             Changes not staged for commit:\n\n\
             Untracked files:\n"
        )
    );

    Ok(())
}

#[rstest]
fn status_twice_yields_the_same_report(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("1.txt"), "edited")?;
    std::fs::write(dir.join("scratch.txt"), "scratch")?;

    let first = run_wit_command(dir, &["status"]).assert().success();
    let second = run_wit_command(dir, &["status"]).assert().success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);

    Ok(())
}
