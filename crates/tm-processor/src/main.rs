use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tm_core::TextMillConfig;
use tm_processor::TextProcessor;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "textmill", version, about = "Read text, apply a transform pipeline, write the result")]
struct Cli {
    /// Pipeline configuration (JSON). Defaults to <config_dir>/textmill/config.json,
    /// then to the built-in pipeline.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the built-in configuration as JSON and exit
    #[arg(long)]
    print_default_config: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if cli.print_default_config {
        println!("{}", TextMillConfig::default().to_json_pretty()?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => TextMillConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TextMillConfig::load_or_default()?,
    };
    info!(
        sources = config.sources.len(),
        transforms = config.transforms.len(),
        outputs = config.outputs.len(),
        "starting run"
    );

    let mut processor = TextProcessor::from_config(&config)?;
    let report = processor.process()?;
    info!(stages = ?report.pipeline.stages_applied, "done");
    Ok(())
}
