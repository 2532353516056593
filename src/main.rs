use std::{env, io};

use quotes_scraper::{run_scrap, Command, Opts};
use structopt::{clap::Shell, StructOpt};

fn main() -> anyhow::Result<()> {
    match Opts::from_args().command {
        Command::Scrap(opts) => {
            if !opts.quiet {
                if env::var_os("RUST_LOG").is_none() {
                    env::set_var("RUST_LOG", "quotes_scraper=info");
                }
                env_logger::init();
            }
            run_scrap(opts)
        }
        Command::Completion => {
            Opts::clap().gen_completions_to("quotes", Shell::Bash, &mut io::stdout());
            Ok(())
        }
    }
}
