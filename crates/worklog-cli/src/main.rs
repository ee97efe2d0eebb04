use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use worklog_config::Config;
use worklog_engine::blocks::MAX_BLOCKS;
use worklog_engine::io::{GitCli, LogQuery, collect_authors, collect_commits};
use worklog_engine::publish::{
    ContentMode, NotionClient, SyncMode, build_payload, publish_report, raw_code_blocks,
};
use worklog_engine::{DateRange, Report, normalize_page_id, parse_markdown};

#[derive(Parser, Debug)]
#[command(name = "worklog", version, about = "Publish weekly git reports as workspace pages")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the blocks a markdown file converts to, as JSON
    Blocks {
        file: PathBuf,
        /// Keep the markdown source inside code blocks
        #[arg(long)]
        raw: bool,
    },
    /// Print the normalized form of a page URL or ID
    PageId {
        #[arg(value_name = "REF")]
        reference: String,
    },
    /// List commits from the configured projects
    ///
    /// Without dates, covers last Friday 18:00 through this Friday 18:00.
    Commits {
        #[arg(long, requires = "until")]
        since: Option<NaiveDate>,
        #[arg(long, requires = "since")]
        until: Option<NaiveDate>,
    },
    /// List commit authors across the configured projects
    Authors,
    /// Publish a report file to the configured page
    Publish {
        file: PathBuf,
        /// First day of the report; defaults to the current week
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,
        /// Overrides `notion.sync_mode`
        #[arg(long)]
        mode: Option<SyncMode>,
        /// Overrides `notion.content_mode`
        #[arg(long)]
        content: Option<ContentMode>,
        /// Overrides `notion.parent_page_id`
        #[arg(long, value_name = "REF")]
        page: Option<String>,
        /// Print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Show where the config file lives
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Command::Blocks { file, raw } => print_blocks(&file, raw),
        Command::PageId { reference } => {
            println!("{}", normalize_page_id(&reference)?);
            Ok(())
        }
        Command::Commits { since, until } => list_commits(since.zip(until)),
        Command::Authors => list_authors(),
        Command::Publish {
            file,
            start,
            end,
            mode,
            content,
            page,
            dry_run,
        } => publish(PublishArgs {
            file,
            dates: start.zip(end),
            mode,
            content,
            page,
            dry_run,
        }),
        Command::Config => {
            let path = Config::config_path();
            let state = if path.exists() { "exists" } else { "not found" };
            println!("{} ({state})", path.display());
            Ok(())
        }
    }
}

fn read_report(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn load_config() -> Result<Config> {
    let path = Config::config_path();
    Config::load()?.with_context(|| format!("No config file found at {}", path.display()))
}

fn print_blocks(file: &Path, raw: bool) -> Result<()> {
    let markdown = read_report(file)?;
    let blocks = if raw {
        raw_code_blocks(&markdown, MAX_BLOCKS).0
    } else {
        parse_markdown(&markdown).blocks
    };
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

/// Start of `start` through the last second of `end`.
fn query_window(start: NaiveDate, end: NaiveDate, author: Option<String>) -> Result<LogQuery> {
    if end < start {
        bail!("End date {end} is before start date {start}");
    }
    Ok(LogQuery {
        since: start.and_hms_opt(0, 0, 0).context("Invalid start of day")?,
        until: end.and_hms_opt(23, 59, 59).context("Invalid end of day")?,
        author,
    })
}

/// Explicit dates as whole days, otherwise the weekly window around `now`.
fn resolve_window(
    dates: Option<(NaiveDate, NaiveDate)>,
    author: Option<String>,
    now: NaiveDateTime,
) -> Result<(DateRange, LogQuery)> {
    let query = match dates {
        Some((start, end)) => query_window(start, end, author)?,
        None => LogQuery::default_week(now, author),
    };
    let range = match dates {
        Some((start, end)) => DateRange { start, end },
        None => DateRange {
            start: query.since.date(),
            end: query.until.date(),
        },
    };
    Ok((range, query))
}

fn list_commits(dates: Option<(NaiveDate, NaiveDate)>) -> Result<()> {
    let config = load_config()?;
    let (_, query) = resolve_window(dates, config.author.clone(), Local::now().naive_local())?;
    log::debug!("Reading commits from {} to {}", query.since, query.until);
    let commits = collect_commits(&GitCli, &config.projects(), &query);

    for commit in &commits {
        println!(
            "{} {} [{}@{}] {} ({})",
            commit.date, commit.hash, commit.project, commit.branch, commit.message, commit.author
        );
    }
    log::info!("{} commits", commits.len());
    Ok(())
}

fn list_authors() -> Result<()> {
    let config = load_config()?;
    for author in collect_authors(&GitCli, &config.projects()) {
        println!("{author}");
    }
    Ok(())
}

struct PublishArgs {
    file: PathBuf,
    dates: Option<(NaiveDate, NaiveDate)>,
    mode: Option<SyncMode>,
    content: Option<ContentMode>,
    page: Option<String>,
    dry_run: bool,
}

fn publish(args: PublishArgs) -> Result<()> {
    let config = load_config()?;
    let content = read_report(&args.file)?;
    let now = Local::now().naive_local();
    let (range, query) = resolve_window(args.dates, config.author.clone(), now)?;
    let commits = collect_commits(&GitCli, &config.projects(), &query);

    let report = Report::from_commits(range, content, &commits, now);
    let mode = args.mode.unwrap_or(config.notion.sync_mode);
    let content_mode = args.content.unwrap_or(config.notion.content_mode);

    if args.dry_run {
        let payload = build_payload(&report, mode, content_mode);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let parent = args.page.unwrap_or_else(|| config.notion.parent_page_id.clone());
    let client = NotionClient::new(config.notion.client_config())?;
    let page = publish_report(&client, &report, &parent, mode, content_mode)
        .context("Failed to publish report")?;

    println!("{}", page.url.unwrap_or(page.id));
    Ok(())
}
