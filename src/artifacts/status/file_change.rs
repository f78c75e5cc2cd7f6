use colored::Colorize;

const LABEL_WIDTH: usize = 8;

/// Difference between the staging area and the last commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexChangeType {
    Added,
    Modified,
}

/// Difference between the working tree and the staging area
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Untracked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChangeType {
    Index(IndexChangeType),
    Workspace(WorkspaceChangeType),
}

impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::Index(IndexChangeType::Added) => "new file:   ",
            FileChangeType::Index(IndexChangeType::Modified) => "modified:   ",
            FileChangeType::Workspace(WorkspaceChangeType::Modified) => "modified:   ",
            FileChangeType::Workspace(WorkspaceChangeType::Untracked) => "",
        }
    }
}

impl std::fmt::Display for FileChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_str = match self {
            FileChangeType::Index(_) => label.green(),
            FileChangeType::Workspace(WorkspaceChangeType::Modified) => label.red(),
            FileChangeType::Workspace(WorkspaceChangeType::Untracked) => label.normal(),
        };
        write!(f, "{:>width$}{}", "", colored_str, width = LABEL_WIDTH)
    }
}
