mod add_directory_recursively;
mod add_file_from_nested_directory;
mod add_rejects_bad_paths;
