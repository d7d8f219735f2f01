//! `tamilkavi` command-line browser.
//!
//! # Responsibility
//! - Parse arguments, load the corpus once, and print query results.
//! - Map load/query failures to distinct exit codes.
//!
//! # Invariants
//! - Not-found results from listings exit 0; they are not errors.

mod filter;
mod render;

use clap::{CommandFactory, Parser, ValueEnum};
use filter::{FilterOutcome, Filters};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tamilkavi_core::{
    init_logging, ConfigError, JsonDirSource, KaviConfig, Library, LoggingError, QueryError,
};

const EXIT_USAGE: u8 = 1;
const EXIT_NOT_LOADED: u8 = 2;
const EXIT_OUT_OF_RANGE: u8 = 3;
const EXIT_CONFIG: u8 = 4;

const EXAMPLES: &str = "Examples:
  tamilkavi -a anand
  tamilkavi -b 'இன்பமில்லா-இதயத்திலிருந்து'
  tamilkavi -t 'Mother-Love'
  tamilkavi -a anand -b 'இன்பமில்லா-இதயத்திலிருந்து' -t 'Mother-Love'
  tamilkavi --list authors
  tamilkavi --list categories
  tamilkavi --show all
  tamilkavi --show index --index 5";

#[derive(Parser, Debug)]
#[command(
    name = "tamilkavi",
    version,
    about = "Access and filter Tamil Kavithai data.",
    after_help = EXAMPLES
)]
struct Cli {
    /// List all authors, books, titles, or categories.
    #[arg(long = "list", value_enum)]
    list: Option<ListTarget>,

    /// Show all kavithais or a specific kavithai by index.
    #[arg(long = "show", value_enum, conflicts_with = "list")]
    show: Option<ShowTarget>,

    /// Index of the kavithai to show (used with --show index).
    #[arg(long = "index", allow_negative_numbers = true)]
    index: Option<i64>,

    /// Filter by author name.
    #[arg(short = 'a', long)]
    author: Option<String>,

    /// Filter by book title.
    #[arg(short = 'b', long)]
    book: Option<String>,

    /// Filter by kavithai title.
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Filter by book category.
    #[arg(short = 'c', long)]
    category: Option<String>,

    /// Directory of author JSON files (overrides TAMILKAVI_DATA_DIR).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print poem results as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListTarget {
    Authors,
    Books,
    Titles,
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShowTarget {
    All,
    Index,
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Logging(LoggingError),
    Query(QueryError),
    Output(io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Logging(_) => EXIT_CONFIG,
            Self::Query(QueryError::NotLoaded) => EXIT_NOT_LOADED,
            Self::Query(QueryError::OutOfRange { .. }) => EXIT_OUT_OF_RANGE,
            Self::Output(_) => EXIT_USAGE,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Query(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write help: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Query(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<QueryError> for CliError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let mut config = KaviConfig::from_env()?;
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let library = Library::load(&JsonDirSource::new(&config.data_dir));
    info!(
        "event=cli_start module=cli loaded={} data_dir={}",
        library.is_loaded(),
        config.data_dir.display()
    );

    if let Some(target) = cli.list {
        list(&library, target)?;
        return Ok(ExitCode::SUCCESS);
    }

    match cli.show {
        Some(ShowTarget::All) => {
            let placements = library.placements()?;
            if cli.json {
                println!("{:#}", render::placements_json(&placements));
            } else {
                println!("Showing all {} Kavithais:", placements.len());
                placements.iter().for_each(render::print_indexed_poem);
            }
            return Ok(ExitCode::SUCCESS);
        }
        Some(ShowTarget::Index) => {
            let Some(index) = cli.index else {
                eprintln!("Error: --show index requires --index argument.");
                print_help()?;
                return Ok(ExitCode::from(EXIT_USAGE));
            };
            let placement = library.placement_at(index)?;
            if cli.json {
                println!("{:#}", render::placements_json(&[placement]));
            } else {
                render::print_indexed_poem(&placement);
            }
            return Ok(ExitCode::SUCCESS);
        }
        None => {}
    }

    let filters = Filters {
        author: cli.author.clone(),
        book: cli.book.clone(),
        category: cli.category.clone(),
        title: cli.title.clone(),
    };
    if filters.is_empty() {
        print_help()?;
        println!("\nNo filters or commands specified.");
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    match filter::apply(&library, &filters)? {
        FilterOutcome::AuthorCard(author) => {
            render::print_author_card(author);
            Ok(ExitCode::SUCCESS)
        }
        FilterOutcome::Poems(placements) => {
            if cli.json {
                println!("{:#}", render::placements_json(&placements));
            } else {
                render::print_matches(&placements);
            }
            Ok(ExitCode::SUCCESS)
        }
        FilterOutcome::Rejected(message) => {
            println!("{message}");
            Ok(ExitCode::from(EXIT_USAGE))
        }
    }
}

fn list(library: &Library, target: ListTarget) -> Result<(), QueryError> {
    match target {
        ListTarget::Authors => {
            render::print_list("Available Authors:", &library.all_author_names()?)
        }
        ListTarget::Books => {
            render::print_list("Available Book Titles:", &library.all_book_titles()?)
        }
        ListTarget::Titles => {
            render::print_list("Available Kavithai Titles:", &library.all_titles()?)
        }
        ListTarget::Categories => {
            render::print_list("Available Book Categories:", &library.all_categories()?)
        }
    }
    Ok(())
}

fn print_help() -> io::Result<()> {
    Cli::command().print_help()
}
