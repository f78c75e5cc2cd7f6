use crate::common::command::{init_repository_dir, run_wit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_files_in_each_view(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    // staged modification and staged addition
    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    write_file(FileSpec::new(dir.join("c").join("4.txt"), "four".to_string()));
    run_wit_command(dir, &["add", "1.txt"]).assert().success();
    run_wit_command(dir, &["add", "c"]).assert().success();

    // unstaged modification with unchanged size
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "owt".to_string()));

    // untracked
    write_file(FileSpec::new(dir.join("a").join("b").join("new.txt"), "?".to_string()));

    let expected = "Changes to be committed:\n\
                    \x20       modified:   1.txt\n\
                    \x20       new file:   c/4.txt\n\
                    \n\
                    Changes not staged for commit:\n\
                    \x20       modified:   a/2.txt\n\
                    \n\
                    Untracked files:\n\
                    \x20       a/b/new.txt\n";

    run_wit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(expected));

    Ok(())
}

#[rstest]
fn staging_a_modified_file_moves_it_to_staged(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "two".to_string()));

    run_wit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Changes not staged for commit:\n        modified:   1.txt\n",
        ));

    run_wit_command(dir, &["add", "1.txt"]).assert().success();

    run_wit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Changes to be committed:\n        modified:   1.txt\n",
        ))
        .stdout(predicate::str::contains(
            "Changes not staged for commit:\n\nUntracked files:",
        ));

    Ok(())
}
