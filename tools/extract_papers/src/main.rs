use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use cvpr_contributors::utils::{
    make_conference_slug, parse_conference_slug, proceedings_url, DEFAULT_URL_TEMPLATE,
};
use cvpr_contributors::{aggregate, extract_papers, HttpFetcher, PageSource};

#[derive(Parser, Debug)]
#[command(name = "extract_papers")]
#[command(about = "Extract the paper list for one CVPR year and show what was found")]
struct Args {
    /// Conference year
    #[arg(short, long, conflicts_with = "slug")]
    year: Option<i32>,

    /// Conference slug instead of a year (e.g. CVPR2023)
    #[arg(short, long)]
    slug: Option<String>,

    /// Parse a saved copy of the page instead of fetching it
    #[arg(long)]
    file: Option<PathBuf>,

    /// Proceedings page URL, with {year} where the year goes
    #[arg(long, env = "CVPR_URL_TEMPLATE", default_value = DEFAULT_URL_TEMPLATE)]
    url_template: String,

    /// Dump papers and skipped entries as JSON
    #[arg(long)]
    json: bool,

    /// How many of the year's most frequent authors to list
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let year = resolve_year(&args)?;

    let html = match &args.file {
        Some(path) => {
            info!("Reading local file: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read local file: {}", path.display()))?
        }
        None => {
            let url = proceedings_url(&args.url_template, year);
            info!("Fetching {}", url);
            let fetcher = HttpFetcher::with_defaults().context("Failed to build HTTP client")?;
            fetcher.fetch(&url).context("Failed to fetch proceedings page")?
        }
    };

    let report = extract_papers(&html, year);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!("=== {} ===", make_conference_slug(year));
    for paper in &report.papers {
        println!("{}\n    {}", paper.title, paper.authors.join("; "));
    }
    for entry in &report.skipped {
        warn!("Skipped entry {} ({}): {:?}", entry.index, entry.reason, entry.title);
    }

    let tally = aggregate(&report.papers, year);
    info!(
        "{} of {} entries parsed, {} distinct authors, {} authorships",
        report.papers.len(),
        report.entries_found,
        tally.authors(),
        tally.occurrences()
    );

    println!();
    for (author, count) in tally.top(args.top) {
        println!("{:>4}  {}", count, author);
    }

    Ok(())
}

fn resolve_year(args: &Args) -> Result<i32> {
    match (&args.slug, args.year) {
        (Some(slug), _) => {
            parse_conference_slug(slug).with_context(|| format!("Not a CVPR slug: {}", slug))
        }
        (None, Some(year)) => Ok(year),
        (None, None) => anyhow::bail!("Pass either --year or --slug"),
    }
}
