use std::fs::File;
use std::io;
use std::path::PathBuf;

use structopt::{clap::AppSettings, StructOpt};
use tokio::runtime;

pub mod collector;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod observer;
pub mod pagination;
pub mod record;
pub mod scraper;
pub mod writer;

pub use config::ScraperConfig;
pub use error::{Field, ScrapError};
pub use extractor::{extract, QuoteParser, RawQuote, SelectParser};
pub use fetcher::{Fetch, Fetched, HttpFetcher};
pub use observer::{LogObserver, NullObserver, Observer, Summary};
pub use pagination::{PageOutcome, State, StopReason};
pub use record::Record;
pub use scraper::{scrap_site, scrap_to_csv, Scraped};

/// Scrap every quote listing page into a csv file
#[derive(Debug, StructOpt)]
pub struct ScrapOpts {
    /// Path where the quotes csv file will be written
    #[structopt(parse(from_os_str), default_value = "quotes.csv")]
    pub output_file: PathBuf,
    /// Optional yaml configuration file
    #[structopt(parse(from_os_str), long)]
    pub config: Option<PathBuf>,
    /// Override the site root, pages are fetched from <base-url>/page/<N>/
    #[structopt(long)]
    pub base_url: Option<String>,
    /// Override the user agent sent with every request
    #[structopt(long)]
    pub user_agent: Option<String>,
    /// Override the delay in seconds between two pages
    #[structopt(long)]
    pub delay: Option<f32>,
    /// Print every collected quote once done
    #[structopt(long)]
    pub list: bool,
    /// When quiet no logs are outputted
    #[structopt(long, short)]
    pub quiet: bool,
}

impl TryFrom<&ScrapOpts> for ScraperConfig {
    type Error = anyhow::Error;

    fn try_from(opts: &ScrapOpts) -> Result<Self, Self::Error> {
        let mut conf = if let Some(file) = opts.config.as_ref().map(File::open) {
            serde_yaml::from_reader(file?)?
        } else {
            ScraperConfig::default()
        };
        if let Some(base_url) = &opts.base_url {
            conf.base_url = base_url.to_string();
        }
        if let Some(user_agent) = &opts.user_agent {
            conf.user_agent = user_agent.to_string();
        }
        if let Some(delay) = opts.delay {
            conf.delay = delay;
        }
        conf.validate()?;
        Ok(conf)
    }
}

#[derive(Debug, StructOpt)]
#[structopt()]
pub enum Command {
    #[structopt(name = "scrap")]
    Scrap(ScrapOpts),
    #[structopt(setting(AppSettings::Hidden))]
    Completion,
}

/// Paginated quotes scraper
#[derive(Debug, StructOpt)]
pub struct Opts {
    #[structopt(subcommand)]
    pub command: Command,
}

pub fn run_scrap(opts: ScrapOpts) -> anyhow::Result<()> {
    let conf = ScraperConfig::try_from(&opts)?;
    let fetcher = HttpFetcher::new(conf.clone())?;

    let delay = conf.delay()?;

    let rt = runtime::Builder::new_current_thread().enable_all().build()?;
    let (scraped, written) = rt.block_on(scrap_to_csv(
        &fetcher,
        &SelectParser,
        &mut LogObserver,
        delay,
        &opts.output_file,
    ));

    if opts.list {
        writer::list_records(io::stdout().lock(), &scraped.records)?;
    }

    Ok(written?)
}
