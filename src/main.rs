use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use cvpr_contributors::config::{DEFAULT_LOG_DIR, DEFAULT_TOP_N, DEFAULT_YEARS};
use cvpr_contributors::fetch::BROWSER_USER_AGENT;
use cvpr_contributors::report::DEFAULT_REPORT_FILE;
use cvpr_contributors::utils::DEFAULT_URL_TEMPLATE;
use cvpr_contributors::{app, resolve_output_path, Observability, RunConfig, YearSet};

#[derive(Parser, Debug)]
#[command(name = "cvpr_contributors")]
#[command(about = "Rank the most prolific CVPR authors over several years and export them to Excel")]
struct Args {
    /// Conference years to include, comma separated
    #[arg(short, long, env = "CVPR_YEARS", value_delimiter = ',', default_values_t = DEFAULT_YEARS.to_vec())]
    years: Vec<i32>,

    /// Number of authors to keep
    #[arg(short = 'n', long = "top", env = "CVPR_TOP_N", default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Directory for the spreadsheet (default: current directory)
    #[arg(short, long, env = "CVPR_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Spreadsheet file name
    #[arg(long, env = "CVPR_OUTPUT_FILE", default_value = DEFAULT_REPORT_FILE)]
    output_file: String,

    /// Directory for the per-run log file
    #[arg(long, env = "CVPR_LOG_DIR", default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Proceedings page URL, with {year} where the year goes
    #[arg(long, env = "CVPR_URL_TEMPLATE", default_value = DEFAULT_URL_TEMPLATE)]
    url_template: String,

    /// Seconds to wait between page fetches
    #[arg(long, env = "CVPR_DELAY_SECS", default_value_t = 2)]
    delay_secs: u64,

    /// Request timeout in seconds
    #[arg(long, env = "CVPR_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Read pages from a local mirror instead of the network
    #[arg(long, env = "CVPR_LOCAL_DIR")]
    local_dir: Option<PathBuf>,

    /// Also print the ranked rows as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_config(&self) -> RunConfig {
        RunConfig {
            years: YearSet::new(self.years.iter().copied()),
            top_n: self.top_n,
            url_template: self.url_template.clone(),
            courtesy_delay: Duration::from_secs(self.delay_secs),
            request_timeout: Duration::from_secs(self.timeout_secs),
            user_agent: BROWSER_USER_AGENT.to_string(),
            output_path: resolve_output_path(self.output_dir.as_deref(), &self.output_file),
            log_dir: self.log_dir.clone(),
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = args.to_config();

    let observability = match Observability::init(&config.log_dir) {
        Ok(observability) => observability,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let code = app::exit_code(app::run(config, args.local_dir.as_deref(), args.json));

    observability.finish();
    code
}
