/*!
# diarium2dayone - Diarium to Day One converter

Reads a Diarium JSON export and writes a Day One JSON file that can be zipped
and imported into Day One.

## Usage

```
diarium2dayone <DIARIUM_JSON> <OUTPUT_JSON>
```

Media is picked up from `./diarium-json/media` when that directory exists.
Log verbosity follows `RUST_LOG` (default `info`).
*/

use chrono::Local;
use diarium2dayone::cli::CliArgs;
use diarium2dayone::config::Config;
use diarium2dayone::constants;
use diarium2dayone::errors::AppResult;
use diarium2dayone::ops;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

/// The main entry point for the diarium2dayone application.
///
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Runs the conversion with the default configuration
/// 4. Prints the summary
///
/// # Errors
///
/// Malformed JSON input, an unparseable entry date, or a failure to read the
/// input or write the output ends the run with a non-zero exit status. No output
/// file is written in that case.
fn main() -> AppResult<()> {
    // Obtain the run date once; sunrise/sunset times are anchored to it.
    let run_date = Local::now().date_naive();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let root_span = info_span!(
        constants::TRACING_ROOT_SPAN_NAME,
        service = constants::TRACING_SERVICE_NAME,
        correlation_id = %uuid::Uuid::new_v4()
    );
    let _guard = root_span.enter();

    info!("Starting {}", constants::APP_NAME);
    debug!("CLI arguments: {:?}", args);

    let config = Config::default();
    let report = ops::run_conversion(&config, &args.input, &args.output, run_date)?;

    println!(
        "Successfully converted {} entries → {}",
        report.entries_converted,
        args.output.display()
    );
    if let (Some(dir), Some(count)) = (&report.media_dir, report.media_files_in_dir) {
        println!("Found {} media files in {}", count, dir.display());
        println!("Attached {} media references", report.media_references);
    }

    Ok(())
}
