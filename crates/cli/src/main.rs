//! # roster-cli
//!
//! Command-line interface for roster: turns the school spreadsheet export into
//! `students.json` and searches the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use roster_core::{
    error_report, extract, write_records, CollisionPolicy, ExtractOptions, Extraction,
    SearchField, StudentIndex, StudentRecord,
};
use roster_sheet::Book;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Spreadsheet read when `--input` is not given.
const DEFAULT_INPUT: &str = "school.xlsx";
/// Record file written when `--output` is not given.
const DEFAULT_OUTPUT: &str = "students.json";
/// Row errors shown before the rest are summarised.
const ERROR_LIMIT: usize = 10;

/// roster - student records from a school spreadsheet
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, long_about = None)]
#[command(about = "Extract student records from a school spreadsheet")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    extract: ExtractArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Extract records from the spreadsheet (default)
    Extract(ExtractArgs),
    /// Search an extracted record file
    Lookup(LookupArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Spreadsheet to read [default: school.xlsx beside the executable]
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// JSON file to write [default: students.json beside the executable]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Which column to read when two headers map to the same field
    #[arg(long, value_name = "POLICY", default_value = "first")]
    on_collision: CollisionArg,
}

#[derive(Args)]
struct LookupArgs {
    /// Admin number, class, or part of a name (prefix with `class:` to force a class search)
    query: String,

    /// Record file to search [default: students.json beside the executable]
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Restrict the search to one kind of field
    #[arg(short, long, default_value = "auto")]
    field: FieldArg,
}

/// Header collision policy.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum CollisionArg {
    /// Keep the leftmost column (default)
    #[default]
    First,
    /// Keep the rightmost column
    Last,
    /// Abort the run
    Reject,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::First => CollisionPolicy::FirstWins,
            CollisionArg::Last => CollisionPolicy::LastWins,
            CollisionArg::Reject => CollisionPolicy::Reject,
        }
    }
}

/// Lookup field.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum FieldArg {
    /// Admin number, then class, then partial match (default)
    #[default]
    Auto,
    /// Exact admin number
    Admin,
    /// Registration class
    Class,
    /// First, last or full name
    Name,
}

impl From<FieldArg> for SearchField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Auto => SearchField::Auto,
            FieldArg::Admin => SearchField::Admin,
            FieldArg::Class => SearchField::Class,
            FieldArg::Name => SearchField::Name,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Extract(cli.extract)) {
        Command::Extract(args) => run_extract(args),
        Command::Lookup(args) => run_lookup(args),
    }
}

/// Filter used when `RUST_LOG` is unset.
///
/// With no `-v` the pipeline's stage progress (sheets inspected, normalised
/// and mapped columns) still shows; everything else is limited to warnings.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,roster_core=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Directory holding the running executable; default paths resolve here.
fn exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

fn resolve(path: Option<PathBuf>, default: &str) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(exe_dir()?.join(default)),
    }
}

/// Run the extraction and write the record file.
fn run_extract(args: ExtractArgs) -> Result<()> {
    let input = resolve(args.input, DEFAULT_INPUT)?;
    let output = resolve(args.output, DEFAULT_OUTPUT)?;
    let options = ExtractOptions::default().with_collision_policy(args.on_collision.into());

    info!(input = %input.display(), output = %output.display(), "starting extraction");
    println!("{} {}", "Reading".cyan().bold(), input.display());

    let book = Book::from_path(&input)
        .with_context(|| format!("Failed to read workbook: {}", input.display()))?;

    let extraction = extract(&book, &options)
        .with_context(|| format!("Failed to extract students from {}", input.display()))?;

    print_collisions(&extraction);
    print_errors(&extraction);

    write_records(&output, &extraction.records)
        .with_context(|| format!("Failed to write records: {}", output.display()))?;

    print_summary(&extraction, &output);

    Ok(())
}

fn print_collisions(extraction: &Extraction) {
    for collision in extraction.columns.collisions() {
        println!(
            "{} '{}' and '{}' both map to {}",
            "Warning:".yellow().bold(),
            collision.first.1,
            collision.second.1,
            collision.column
        );
    }
}

fn print_errors(extraction: &Extraction) {
    if extraction.errors.is_empty() {
        return;
    }

    println!("{}", "Row errors:".red().bold());
    for line in error_report(&extraction.errors, ERROR_LIMIT) {
        println!("  {line}");
    }
}

fn print_summary(extraction: &Extraction, output: &Path) {
    println!();
    println!("{}", "Summary".green().bold());
    println!("  Sheet used:       {}", extraction.sheet_name);
    println!(
        "  Sheets inspected: {} of {}",
        extraction.sheets_inspected, extraction.sheet_count
    );
    println!(
        "  Records written:  {} -> {}",
        extraction.written().to_string().green(),
        output.display()
    );

    let skipped = extraction.skipped().to_string();
    if extraction.skipped() > 0 {
        println!("  Rows skipped:     {}", skipped.yellow());
    } else {
        println!("  Rows skipped:     {skipped}");
    }
}

/// Search the record file and print one line per match.
fn run_lookup(args: LookupArgs) -> Result<()> {
    let data = resolve(args.data, DEFAULT_OUTPUT)?;

    let index = StudentIndex::load(&data)
        .with_context(|| format!("Failed to load records: {}", data.display()))?;
    info!(records = index.len(), "loaded record file");

    let matches = index.search(&args.query, args.field.into());
    for record in &matches {
        print_record(record);
    }

    let noun = if matches.len() == 1 { "result" } else { "results" };
    println!("{} {noun}", matches.len().to_string().bold());

    Ok(())
}

fn print_record(record: &StudentRecord) {
    println!(
        "{}  {} {}  {}  {}",
        record.admin_no.cyan().bold(),
        record.first_name,
        record.last_name,
        record.registration_class,
        record.photo.dimmed()
    );
}
