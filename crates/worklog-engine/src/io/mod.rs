use crate::models::CommitRecord;
use chrono::{Datelike, Days, Duration, NaiveDateTime, NaiveTime};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Pretty format handed to `git log`; fields are `|`-separated.
pub const LOG_FORMAT: &str = "%h|%an|%ad|%s";
/// Date format handed to `git log --date=format:`.
pub const LOG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Upper bound on commits read from one project.
pub const MAX_COMMITS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("git failed in {path}: {stderr}")]
    CommandFailed { path: PathBuf, stderr: String },
}

/// Hour of day the default weekly window starts and ends at.
pub const WEEK_CUTOFF_HOUR: u32 = 18;

/// Which commits to read from a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub since: NaiveDateTime,
    pub until: NaiveDateTime,
    /// Author filter passed to `--author`; `None` reads everyone.
    pub author: Option<String>,
}

/// A project checked out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub path: PathBuf,
    /// Display name; defaults to the last path component.
    pub name: Option<String>,
}

impl Project {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| project_name_from_path(&self.path))
    }
}

impl LogQuery {
    /// Last Friday 18:00 through this week's Friday 18:00, weeks starting on
    /// Sunday.
    pub fn default_week(now: NaiveDateTime, author: Option<String>) -> Self {
        let date = now.date();
        let sunday = date - Days::new(u64::from(date.weekday().num_days_from_sunday()));
        let friday = sunday + Days::new(5);
        let until = friday.and_time(NaiveTime::MIN) + Duration::hours(WEEK_CUTOFF_HOUR.into());
        Self {
            since: until - Days::new(7),
            until,
            author,
        }
    }
}

/// Supplies commit history for projects.
pub trait CommitSource {
    /// Ordered commit records for a project and time window.
    fn commits(&self, project: &Project, query: &LogQuery) -> Result<Vec<CommitRecord>, GitError>;

    /// Author names, most commits first.
    fn authors(&self, project: &Project) -> Result<Vec<String>, GitError>;
}

/// [`CommitSource`] backed by the `git` executable.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    fn run(&self, path: &Path, args: &[String]) -> Result<String, GitError> {
        let output = Command::new("git").arg("-C").arg(path).args(args).output()?;
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                path: path.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Name of the checked-out branch, `HEAD` when it cannot be read.
    pub fn current_branch(&self, path: &Path) -> String {
        let args = ["rev-parse", "--abbrev-ref", "HEAD"].map(String::from);
        match self.run(path, &args) {
            Ok(out) if !out.trim().is_empty() => out.trim().to_string(),
            Ok(_) => "HEAD".to_string(),
            Err(e) => {
                warn!("Failed to read branch name for {}: {e}", path.display());
                "HEAD".to_string()
            }
        }
    }
}

impl CommitSource for GitCli {
    fn commits(&self, project: &Project, query: &LogQuery) -> Result<Vec<CommitRecord>, GitError> {
        let branch = self.current_branch(&project.path);
        let args = log_args(query);
        debug!("git -C {} {}", project.path.display(), args.join(" "));

        let stdout = self.run(&project.path, &args)?;
        let name = project.display_name();
        Ok(stdout
            .lines()
            .filter_map(|line| parse_log_line(line, &name, &branch))
            .collect())
    }

    fn authors(&self, project: &Project) -> Result<Vec<String>, GitError> {
        let args = ["shortlog", "-s", "-n", "HEAD"].map(String::from);
        let stdout = self.run(&project.path, &args)?;
        Ok(stdout.lines().filter_map(parse_shortlog_line).collect())
    }
}

/// Parses one `git shortlog -s` line such as `    12\tDev Name`.
pub fn parse_shortlog_line(line: &str) -> Option<String> {
    let (count, name) = line.trim().split_once(char::is_whitespace)?;
    count.parse::<u64>().ok()?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Arguments after `git -C <path>` for a history query.
pub fn log_args(query: &LogQuery) -> Vec<String> {
    let mut args = vec!["log".to_string()];
    if let Some(author) = query.author.as_deref().filter(|a| !a.trim().is_empty()) {
        args.push(format!("--author={author}"));
    }
    args.extend([
        format!("--since={}", query.since.format(LOG_DATE_FORMAT)),
        format!("--until={}", query.until.format(LOG_DATE_FORMAT)),
        format!("--pretty=format:{LOG_FORMAT}"),
        format!("--date=format:{LOG_DATE_FORMAT}"),
        "-n".to_string(),
        MAX_COMMITS.to_string(),
    ]);
    args
}

/// Parses one line of [`LOG_FORMAT`] output. Blank or malformed lines
/// yield `None`. The subject keeps any further `|` characters.
pub fn parse_log_line(line: &str, project: &str, branch: &str) -> Option<CommitRecord> {
    if line.trim().is_empty() {
        return None;
    }
    let mut fields = line.splitn(4, '|');
    let hash = fields.next()?;
    let author = fields.next()?;
    let date = fields.next()?;
    let message = fields.next()?;

    Some(CommitRecord {
        hash: hash.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        message: message.to_string(),
        project: project.to_string(),
        branch: branch.to_string(),
    })
}

/// Last path component, `Unknown` for paths without one.
pub fn project_name_from_path(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Reads every project, skipping (and logging) those git cannot read.
pub fn collect_commits<S: CommitSource>(
    source: &S,
    projects: &[Project],
    query: &LogQuery,
) -> Vec<CommitRecord> {
    let mut all = Vec::new();
    for project in projects {
        match source.commits(project, query) {
            Ok(commits) => {
                debug!("{} commits from {}", commits.len(), project.display_name());
                all.extend(commits);
            }
            Err(e) => warn!("Skipping {}: {e}", project.path.display()),
        }
    }
    all
}

/// Distinct authors across all projects, in first-seen order. Projects git
/// cannot read are skipped.
pub fn collect_authors<S: CommitSource>(source: &S, projects: &[Project]) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for project in projects {
        match source.authors(project) {
            Ok(names) => {
                for name in names {
                    if !authors.contains(&name) {
                        authors.push(name);
                    }
                }
            }
            Err(e) => warn!("Skipping {}: {e}", project.path.display()),
        }
    }
    authors
}
