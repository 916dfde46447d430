pub mod json;
pub mod plain;

use color_eyre::Result;

use crate::completer::Completion;
use crate::config::{Config, OutputFormat};

pub fn call(config: &Config, completion: &Completion) -> Result<()> {
    let formatter = match config.output_format {
        OutputFormat::Plain => self::plain::call,
        OutputFormat::Json => self::json::call,
    };

    formatter(config, completion)
}
