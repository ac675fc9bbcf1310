mod analysis;
mod report;

use analysis::run_analysis;
use report::render_summary;
use rollcentre::{today_label, CalculatorConfig, JsonSheet, LogBook, LogRecord};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Log level comes from RUST_LOG, defaulting to warnings only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Usage: rollcentre [CONFIG.toml] [CHASSIS]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    let chassis = args.next().unwrap_or_else(|| "unassigned".to_owned());

    let summary = run_analysis(&config)?;
    println!("{}", render_summary(&summary));

    // Only save when a log location is configured.
    if let Some(path) = &config.log_path {
        let record = LogRecord::capture(chassis, today_label(), "", "", summary.setup);
        let mut book = LogBook::new(JsonSheet::new(path));
        let index = book.save(&record)?;
        println!("Saved as row {index} in {}", path.display());
    }

    Ok(())
}
