//! Branch names and revision resolution

pub mod branch_name;
pub mod revision;

/// Characters and sequences a branch name may not contain
///
/// Git's ref-name rules, plus `=` which separates name and id in `references.txt`.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f=]";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
