mod first_commit_creates_references;
