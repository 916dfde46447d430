use std::fs;
use std::time::Instant;

use color_eyre::Result;
use color_eyre::eyre::Context as _;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::prefix_index::PrefixIndex;

/// Reads the word list named by the config and indexes every word in it.
pub fn load(config: &Config) -> Result<PrefixIndex> {
    let content = fs::read_to_string(&config.dictionary)
        .wrap_err_with(|| format!("reading dictionary ({})", config.dictionary.display()))?;

    let now = Instant::now();
    let words: Vec<&str> = parse_words(&content).collect();

    let bar = if config.progress {
        eprintln!("Indexing {}", config.dictionary.display());
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {wide_bar} {pos}/{len} ({percent}%) [ETA: {eta_precise}]")
            .wrap_err("setting progress bar style")?,
    );

    let mut index = PrefixIndex::new();

    for (i, word) in words.iter().enumerate() {
        if i % 10_000 == 0 && i > 0 {
            bar.inc(10_000);
        }

        index.insert(word);
    }

    bar.finish();

    let took = now.elapsed();

    info!(
        words = index.len(),
        lines = words.len(),
        took = %humantime::format_duration(took),
        "indexed {}",
        config.dictionary.display()
    );
    debug!(nodes = index.nodes_count(), "prefix index size");

    if index.is_empty() {
        warn!("dictionary {} has no words", config.dictionary.display());
    }

    Ok(index)
}

/// Words of a newline-delimited list, trimmed, skipping blank lines.
pub fn parse_words(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|word| !word.is_empty())
}
