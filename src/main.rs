mod app;
mod config;
mod error;
mod events;
mod logger;
mod share;
mod state;
mod ui;
mod unsplash;
mod zenquotes;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("quote-tui")
        .version(crate_version!())
        .about("A terminal user interface for daily quotes")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config).await
}
