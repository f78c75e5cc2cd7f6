use crate::common::command::{repository_dir, run_wit_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn add_file_relative_to_nested_working_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let nested = repository_dir.path().join("a").join("b");
    write_file(FileSpec::new(nested.join("3.txt"), "three".to_string()));
    write_file(FileSpec::new(nested.join("4.txt"), "four".to_string()));

    run_wit_command(&nested, &["add", "3.txt"])
        .assert()
        .success();

    let staging = repository_dir.path().join(".wit").join("staging_area");
    assert_eq!(read_file(&staging.join("a").join("b").join("3.txt")), "three");
    assert!(!staging.join("a").join("b").join("4.txt").exists());

    Ok(())
}

#[rstest]
fn add_file_by_absolute_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file = repository_dir.path().join("docs").join("readme.md");
    write_file(FileSpec::new(file.clone(), "# wit".to_string()));

    run_wit_command(repository_dir.path(), &["add", &file.display().to_string()])
        .assert()
        .success();

    assert_eq!(
        read_file(
            &repository_dir
                .path()
                .join(".wit")
                .join("staging_area")
                .join("docs")
                .join("readme.md")
        ),
        "# wit"
    );

    Ok(())
}
