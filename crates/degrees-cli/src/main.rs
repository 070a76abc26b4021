//! CLI binary for degrees: how many movies separate two actors?

mod prompt;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use degrees_core::config::DegreesConfig;
use degrees_core::graph::{Graph, PersonId};
use degrees_nav::render::{format_connection, step_views};
use degrees_nav::search::{SearchOptions, SearchReport, shortest_path_with};
use prompt::Prompter;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "degrees", about = "Degrees of separation between actors")]
struct Cli {
    /// Project root holding .degrees/config.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Dataset directory with people.csv, movies.csv and stars.csv
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Give up after expanding this many search nodes
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    /// Defaults to `interactive`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest connection between two named persons
    Path {
        /// Source person's name
        source: String,
        /// Target person's name
        target: String,
    },

    /// Prompt for pairs of names until end of input
    Interactive,

    /// Show dataset statistics
    Info,
}

/// A loaded dataset plus the settings every command shares.
struct Session {
    graph: Graph,
    options: SearchOptions,
    format: Format,
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;

    let mut config = DegreesConfig::load(&project_root)?;
    if let Some(dir) = &cli.data {
        config.data.directory.clone_from(dir);
    }
    if cli.max_expansions.is_some() {
        config.search.max_expansions = cli.max_expansions;
    }
    config.validate()?;

    let session = Session {
        graph: load_graph(&config.data_dir(&project_root))?,
        options: SearchOptions {
            max_expansions: config.search.max_expansions,
        },
        format: cli.format,
    };

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Path { source, target } => cmd_path(&session, &source, &target),
        Commands::Interactive => cmd_interactive(&session),
        Commands::Info => cmd_info(&session),
    }
}

fn load_graph(data_dir: &Path) -> Result<Graph> {
    use indicatif::{ProgressBar, ProgressStyle};

    if !degrees_core::loader::dataset_exists(data_dir) {
        anyhow::bail!(
            "No dataset found in {}. Expected people.csv, movies.csv and stars.csv.",
            data_dir.display()
        );
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("invalid spinner template")?,
    );
    spinner.set_message(format!("Loading data from {}...", data_dir.display()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let graph = degrees_core::loader::load_dir(data_dir);
    spinner.finish_and_clear();
    graph
}

/// Prompts and disambiguation go to stderr so stdout carries only results.
fn terminal_prompter() -> Prompter<io::StdinLock<'static>, io::Stderr> {
    Prompter::new(io::stdin().lock(), io::stderr())
}

fn cmd_path(session: &Session, source: &str, target: &str) -> Result<()> {
    let mut prompter = terminal_prompter();
    run_path(session, source, target, &mut prompter, &mut io::stdout().lock())
}

fn run_path<R: BufRead, W: Write>(
    session: &Session,
    source: &str,
    target: &str,
    prompter: &mut Prompter<R, W>,
    out: &mut impl Write,
) -> Result<()> {
    let source = prompter
        .pick_person(&session.graph, source)?
        .context("Person not found.")?;
    let target = prompter
        .pick_person(&session.graph, target)?
        .context("Person not found.")?;

    let report = shortest_path_with(&session.graph, &source, &target, &session.options)?;
    write_report(session, &source, &target, &report, out)
}

fn cmd_interactive(session: &Session) -> Result<()> {
    let mut prompter = terminal_prompter();
    run_interactive(session, &mut prompter, &mut io::stdout().lock())
}

fn run_interactive<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
    out: &mut impl Write,
) -> Result<()> {
    loop {
        let Some(source) = read_person(session, prompter)? else {
            return Ok(());
        };
        let Some(target) = read_person(session, prompter)? else {
            return Ok(());
        };

        match shortest_path_with(&session.graph, &source, &target, &session.options) {
            Ok(report) => write_report(session, &source, &target, &report, out)?,
            Err(e) => eprintln!("Search failed: {}", e),
        }
    }
}

/// Prompt until a name resolves to a person. `None` at end of input.
fn read_person<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<PersonId>> {
    loop {
        let Some(name) = prompter.ask("Name: ")? else {
            return Ok(None);
        };
        if name.is_empty() {
            continue;
        }
        match prompter.pick_person(&session.graph, &name)? {
            Some(id) => return Ok(Some(id)),
            None => eprintln!("Person not found."),
        }
    }
}

fn write_report(
    session: &Session,
    source: &PersonId,
    target: &PersonId,
    report: &SearchReport,
    out: &mut impl Write,
) -> Result<()> {
    tracing::debug!(
        expanded = report.stats.expanded,
        discovered = report.stats.discovered,
        frontier_peak = report.stats.frontier_peak,
        "search finished"
    );

    match session.format {
        Format::Text => {
            write!(
                out,
                "{}",
                format_connection(&session.graph, source, &report.connection)
            )?;
        }
        Format::Json => {
            let steps = report
                .connection
                .path()
                .map(|path| step_views(&session.graph, source, path));
            let output = serde_json::json!({
                "source": source,
                "target": target,
                "connected": report.connection.is_connected(),
                "degrees": report.connection.degrees(),
                "path": report.connection.path(),
                "steps": steps,
                "stats": report.stats,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn cmd_info(session: &Session) -> Result<()> {
    let stats = session.graph.stats();
    match session.format {
        Format::Text => {
            println!("People: {}", stats.people);
            println!("Movies: {}", stats.movies);
            println!("Star links: {}", stats.stars);
            println!("Distinct names: {}", stats.names);
            println!("Ambiguous names: {}", stats.ambiguous_names);
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(())
}
