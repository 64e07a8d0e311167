use anyhow::{bail, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use colored::Colorize;
use docscout::{
    export_csv, search_in_folder, Capabilities, DocumentExtractor, MatchFlags, PatternMatcher,
    QueryHistory, SearchConfig, SearchMatch,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a file or a folder for a regex pattern
    Search(Box<SearchArgs>),

    /// Show the saved query history
    Queries {
        /// Path of the query history file
        #[arg(long, default_value = "saved_queries.json")]
        file: PathBuf,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true)))]
struct SearchArgs {
    /// Pattern to search for
    pattern: String,

    /// Search a single file, printing matches with byte offsets
    #[arg(short, long, group = "target")]
    file: Option<PathBuf>,

    /// Search every file under a directory
    #[arg(short, long, group = "target")]
    dir: Option<PathBuf>,

    /// Case-insensitive matching
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// ^ and $ match at line boundaries
    #[arg(short = 'm', long)]
    multiline: bool,

    /// . matches newlines too
    #[arg(long = "dotall")]
    dot_all: bool,

    /// Match the pattern as a literal whole word
    #[arg(short = 'w', long)]
    word: bool,

    /// File extensions to include, comma separated (e.g. txt,csv,docx)
    #[arg(short = 'e', long, requires = "dir")]
    extensions: Option<String>,

    /// Glob patterns for paths to skip (repeatable)
    #[arg(long, requires = "dir")]
    ignore: Vec<String>,

    /// Disable the DOCX/PDF/XLSX handlers and treat every file as text
    #[arg(long)]
    plain: bool,

    /// Write folder-search results to a CSV file
    #[arg(long, requires = "dir")]
    export: Option<PathBuf>,

    /// Print matches as JSON lines
    #[arg(long)]
    json: bool,

    /// Append this pattern to the query history
    #[arg(long)]
    save_query: bool,

    /// Path of the query history file
    #[arg(long, default_value = "saved_queries.json")]
    queries_file: PathBuf,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => run_search(*args),
        Commands::Queries { file } => {
            let history = QueryHistory::load_from(&file)?;
            if history.is_empty() {
                println!("No saved queries");
            } else {
                for pattern in history.patterns() {
                    println!("{pattern}");
                }
            }
            Ok(())
        }
    }
}

fn run_search(args: SearchArgs) -> Result<()> {
    debug!("Searching for pattern {:?}", args.pattern);
    let flags = MatchFlags {
        case_insensitive: args.ignore_case,
        multiline: args.multiline,
        dot_all: args.dot_all,
    };

    if args.save_query {
        let mut history = QueryHistory::load_from(&args.queries_file)?;
        if history.add(args.pattern.clone()) {
            history.save_to(&args.queries_file)?;
        }
    }

    if let Some(file) = args.file.clone() {
        return search_file(&file, &args, flags);
    }

    let root = args.dir.clone().expect("clap guarantees a search target");
    let cli_config = SearchConfig {
        pattern: args.pattern.clone(),
        root_path: root,
        flags,
        whole_word: args.word,
        file_extensions: args.extensions.as_ref().map(|e| {
            e.split(',')
                .map(|s| s.trim().to_string())
                .collect::<Vec<_>>()
        }),
        ignore_patterns: args.ignore.clone(),
        capabilities: capabilities_for(&args),
        ..Default::default()
    };
    let config = SearchConfig::load_from(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
        .merge_with_cli(cli_config);

    let mut stream = search_in_folder(&config)?;
    let mut matches = Vec::new();
    for record in stream.by_ref() {
        if args.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            print_record(&record);
        }
        matches.push(record);
    }

    for skipped in stream.skipped() {
        eprintln!(
            "{} skipped {}: {}",
            "warning:".yellow().bold(),
            skipped.path.display(),
            skipped.reason
        );
    }

    if let Some(out) = &args.export {
        export_csv(&matches, out)?;
        println!("Exported {} results to {}", matches.len(), out.display());
    }

    if !args.json {
        println!("\nFound {} matches", matches.len());
    }
    Ok(())
}

/// Buffer-mode search of a single file's extracted text.
fn search_file(path: &Path, args: &SearchArgs, flags: MatchFlags) -> Result<()> {
    let matcher = if args.word {
        PatternMatcher::whole_word(&args.pattern, flags)?
    } else {
        PatternMatcher::new(&args.pattern, flags)?
    };

    let extractor = DocumentExtractor::new(capabilities_for(args));
    let content = match extractor.extract(path) {
        Ok(content) => content,
        Err(err) => bail!("{err}"),
    };

    let spans = matcher.find_matches(&content);
    for span in &spans {
        if args.json {
            println!("{}", serde_json::to_string(span)?);
        } else {
            println!(
                "{}: {}",
                format!("{}-{}", span.start, span.end).green(),
                span.text
            );
        }
    }

    if !args.json {
        println!("\nFound {} matches", spans.len());
    }
    Ok(())
}

fn capabilities_for(args: &SearchArgs) -> Capabilities {
    if args.plain {
        Capabilities::text_only()
    } else {
        Capabilities::all()
    }
}

fn print_record(record: &SearchMatch) {
    println!(
        "{}:{}: {}",
        record.file_path.display().to_string().blue(),
        record.line_number.to_string().green(),
        record.line_content
    );
}
