use clap::Parser;
use echoes::cli::{Args, RunConfig};
use echoes::output::render;
use echoes_lib::processor::DataProcessor;
use echoes_lib::report::Report;
use echoes_lib::constants::PROCESSOR_NAME;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match RunConfig::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let processor = DataProcessor::new(PROCESSOR_NAME);
    if config.verbose {
        eprintln!("🧪 Processor '{}' ready", processor.name());
        eprintln!("📦 Formatting {} item(s)", config.items.len());
    }

    let report = Report::build(&processor, &config.items, &config.probe);
    if config.verbose {
        if report.succeeded() {
            eprintln!("✓ Formatted {} item(s)", report.count);
        } else {
            eprintln!("⚠️  Nothing to format");
        }
        eprintln!("🔎 Probe '{}' valid: {}", config.probe, report.is_valid);
    }

    println!("{}", render(&report, config.format));

    Ok(())
}
