use clap::Parser;
use echoes_lib::constants::{sample_items, DEBUG_MODE, MAX_ITEMS, PROCESSOR_NAME};

#[derive(Parser, Debug)]
#[command(name = "echoes")]
#[command(version = echoes_lib::constants::VERSION)]
#[command(about = "Formats a list of items and reports on the result", long_about = None)]
pub struct Args {
    /// Item to process (repeatable); replaces the built-in sample list
    #[arg(short, long = "item")]
    pub items: Vec<String>,

    /// Process an empty list
    #[arg(long, conflicts_with = "items")]
    pub empty: bool,

    /// Text passed to the validator
    #[arg(short, long, default_value = PROCESSOR_NAME)]
    pub probe: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    /// Parse a `--format` value
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `text` or `json`.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("Unknown format '{other}'. Use 'text' or 'json'")),
        }
    }
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub items: Vec<String>,
    pub probe: String,
    pub format: Format,
    pub verbose: bool,
}

impl RunConfig {
    /// Resolve parsed arguments into a run configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown or more than `MAX_ITEMS` items were given.
    pub fn from_args(args: Args) -> Result<Self, String> {
        let format = Format::parse(&args.format)?;

        if args.items.len() > MAX_ITEMS {
            return Err(format!(
                "Too many items: {} (at most {MAX_ITEMS} allowed)",
                args.items.len()
            ));
        }

        let items = if args.empty {
            vec![]
        } else if args.items.is_empty() {
            sample_items()
        } else {
            args.items
        };

        Ok(RunConfig {
            items,
            probe: args.probe,
            format,
            verbose: DEBUG_MODE && !args.quiet,
        })
    }
}
