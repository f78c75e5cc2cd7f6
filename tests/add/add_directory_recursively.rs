use crate::common::command::{repository_dir, run_wit_command};
use crate::common::file::{read_file, write_generated_files};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn add_directory_stages_every_file_below_it(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let src = repository_dir.path().join("src");
    std::fs::create_dir_all(src.join("inner"))?;
    let mut files = write_generated_files(&src, 3);
    files.extend(write_generated_files(&src.join("inner"), 2));

    run_wit_command(repository_dir.path(), &["add", "src"])
        .assert()
        .success();

    let staging = repository_dir.path().join(".wit").join("staging_area");
    for file in files {
        let relative = file.path.strip_prefix(repository_dir.path())?;
        assert_eq!(read_file(&staging.join(relative)), file.content);
    }

    Ok(())
}

#[rstest]
fn add_dot_never_stages_repository_metadata(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_generated_files(repository_dir.path(), 2);

    run_wit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    assert!(
        !repository_dir
            .path()
            .join(".wit")
            .join("staging_area")
            .join(".wit")
            .exists()
    );

    Ok(())
}
