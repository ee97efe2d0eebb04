/// One commit pulled from a project's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Abbreviated hash.
    pub hash: String,
    pub author: String,
    /// Author date as `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
    /// Subject line.
    pub message: String,
    /// Display name of the project the commit belongs to.
    pub project: String,
    /// Branch checked out when the history was read.
    pub branch: String,
}
