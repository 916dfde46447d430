use std::io::{self, BufRead};

use color_eyre::Result;
use color_eyre::eyre::Context as _;

use crate::completer::Completer;
use crate::config::Config;

pub mod completer;
pub mod config;
pub mod dictionary;
pub mod prefix_index;
pub mod prefix_node;
pub mod result_formatters;


fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::new()?;
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level())
        .init();

    let index = dictionary::load(&config)?;
    let completer = Completer::new(&config, &index)?;

    if !config.text.is_empty() {
        let completion = completer.complete(&config.joined_text());
        return result_formatters::call(&config, &completion);
    }

    for line in io::stdin().lock().lines() {
        let line = line.wrap_err("reading stdin")?;
        let completion = completer.complete(line.trim_end_matches('\r'));
        result_formatters::call(&config, &completion)?;
    }

    Ok(())
}
