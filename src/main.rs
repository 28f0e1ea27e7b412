use anyhow::Context;
use clap::Parser;
use league_recap::config::Config;
use league_recap::diagnostics::{RecordingDiagnostics, CORRUPT_DATA, MISSING_DATA};
use league_recap::display::output::{
    display_error, display_info, display_success, display_summary, display_timeline,
    display_warning,
};
use league_recap::{logging, FileCorpus, TimelineAggregator};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "League Recap")]
#[command(about = "Build heatmap and timeline recap data from stored match timelines", long_about = None)]
struct Args {
    /// Player PUUID
    puuid: String,

    /// Display name used in the output (default: RECAP_PLAYER_NAME or "Player")
    #[arg(short, long)]
    name: Option<String>,

    /// Directory holding matches/ and matches/timelines/ (default: RECAP_DATA_DIR or Sneaky_data)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level filter, e.g. "debug" (RUST_LOG wins if set)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the result as JSON on stdout instead of tables
    #[arg(long)]
    json: bool,

    /// Also write the result as pretty JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(name) = args.name {
        config.player_name = name;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    logging::init(&config.log_level);

    display_info(&format!(
        "Aggregating timelines in {}",
        config.data_dir.display()
    ));

    let aggregator = TimelineAggregator::new(FileCorpus::new(&config.data_dir));
    let mut diagnostics = RecordingDiagnostics::forwarding();
    let result = aggregator.aggregate_with(&args.puuid, &config.player_name, &mut diagnostics);

    let missing = diagnostics.distinct(MISSING_DATA);
    let corrupt = diagnostics.distinct(CORRUPT_DATA);
    if missing + corrupt > 0 {
        display_warning(&format!(
            "Skipped {} unreadable timeline record(s) and {} match(es) without a match record",
            corrupt, missing
        ));
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        display_success(&format!("Wrote recap data to {}", path.display()));
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        display_summary(&result);
        display_timeline(&result);
    }

    Ok(())
}
