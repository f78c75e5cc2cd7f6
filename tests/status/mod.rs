mod report_staged_unstaged_and_untracked_files;
mod status_before_first_commit;
mod status_of_clean_repository;
