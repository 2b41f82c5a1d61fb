//! mailharvest CLI - search, scrape and export email addresses.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mailharvest::{
    export,
    sources::{DuckDuckGo, SerpApi},
    parse_page_urls, Aggregator, EmailRecord, HarvestOutcome, HarvestReport, Harvester,
    HttpFetcher, QuerySource, SearchQuery,
};

/// mailharvest - collect site titles and email addresses from search results
#[derive(Parser)]
#[command(name = "mailharvest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, fetch every result page and extract email addresses
    Search(SearchArgs),

    /// Extract email addresses from the given URLs directly
    Scrape(ScrapeArgs),

    /// List available query sources
    Sources,
}

#[derive(Parser)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Number of search results to request (1-100)
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=100))]
    num_results: u32,

    /// Query source to use
    #[arg(short, long, default_value = "serpapi")]
    source: SourceKind,

    /// SerpAPI key
    #[arg(long, env = "SERPAPI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(flatten)]
    scrape: ScrapeOptions,
}

#[derive(Parser)]
struct ScrapeArgs {
    /// Page URLs to scrape
    #[arg(required = true)]
    urls: Vec<String>,

    #[command(flatten)]
    scrape: ScrapeOptions,
}

#[derive(clap::Args)]
struct ScrapeOptions {
    /// Per-page timeout in seconds
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Number of pages fetched at once
    #[arg(short, long, default_value = "5")]
    concurrency: usize,

    /// Write the records as CSV to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceKind {
    /// Google results through SerpAPI (needs an API key)
    Serpapi,
    /// DuckDuckGo HTML results
    Ddg,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable listing
    Table,
    /// CSV with a header row
    Csv,
    /// JSON array of records
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Search(args) => run_search(args, cli.verbose).await,
        Commands::Scrape(args) => run_scrape(args, cli.verbose).await,
        Commands::Sources => list_sources(),
    }
}

fn list_sources() -> Result<()> {
    println!("Available query sources:\n");
    println!("    serpapi  - Google results via SerpAPI (set SERPAPI_API_KEY or --api-key)");
    println!("    ddg      - DuckDuckGo HTML results (no key needed)");
    println!();
    println!("Usage: mailharvest search \"dentists in valencia\" -n 20 -o emails.csv");
    Ok(())
}

fn build_aggregator(options: &ScrapeOptions) -> Result<Aggregator> {
    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(options.timeout))?;
    Ok(Aggregator::new(Arc::new(fetcher)).with_concurrency(options.concurrency))
}

async fn run_search(args: SearchArgs, verbose: bool) -> Result<()> {
    let source: Arc<dyn QuerySource> = match args.source {
        SourceKind::Serpapi => {
            let api_key = args
                .api_key
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| {
                    anyhow::anyhow!("SerpAPI needs an API key (--api-key or SERPAPI_API_KEY)")
                })?;
            Arc::new(SerpApi::new(api_key)?)
        }
        SourceKind::Ddg => Arc::new(DuckDuckGo::new()?),
    };

    let harvester = Harvester::new(source, build_aggregator(&args.scrape)?);
    let query = SearchQuery::new(&args.query).with_num_results(args.num_results);

    match harvester.run(&query).await? {
        HarvestOutcome::NoUrls => {
            anyhow::bail!(
                "Could not obtain any URLs from {} for \"{}\"",
                harvester.source_name(),
                args.query
            );
        }
        HarvestOutcome::NoEmails(report) => {
            eprintln!(
                "No email addresses found on {} pages ({} could not be fetched).",
                report.pages().len(),
                report.failed_count()
            );
            print_failures(&report, verbose);
            Ok(())
        }
        HarvestOutcome::Found(report) => finish(&report, &args.scrape, verbose),
    }
}

async fn run_scrape(args: ScrapeArgs, verbose: bool) -> Result<()> {
    let urls = parse_page_urls(&args.urls)?;
    let aggregator = build_aggregator(&args.scrape)?;
    let report = aggregator.collect(urls).await;

    if report.records().is_empty() {
        eprintln!(
            "No email addresses found on {} pages ({} could not be fetched).",
            report.pages().len(),
            report.failed_count()
        );
        print_failures(&report, verbose);
        return Ok(());
    }

    finish(&report, &args.scrape, verbose)
}

fn finish(report: &HarvestReport, options: &ScrapeOptions, verbose: bool) -> Result<()> {
    print_records(report.records(), options.format)?;

    if let Some(path) = &options.output {
        export::write_csv(path, report.records())?;
        eprintln!("Saved {} records to {}", report.records().len(), path.display());
    }

    eprintln!(
        "Scraping completed: {} records from {} pages ({} could not be fetched).",
        report.records().len(),
        report.scraped_count(),
        report.failed_count()
    );
    print_failures(report, verbose);
    Ok(())
}

fn print_records(records: &[EmailRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!();
            for (i, record) in records.iter().enumerate() {
                println!("{}. {}", i + 1, record.email);
                println!("   Site: {}", record.site_title);
            }
            println!();
        }
        OutputFormat::Csv => {
            print!("{}", export::to_csv(records));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
    }
    Ok(())
}

fn print_failures(report: &HarvestReport, verbose: bool) {
    if !verbose {
        return;
    }
    for (url, reason) in report.failures() {
        eprintln!("  failed: {} ({})", url, reason);
    }
}
