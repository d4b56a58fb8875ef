use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use reid_core::clustering::domain::agglomerative_clusterer::AgglomerativeClusterer;
use reid_core::clustering::domain::cluster_config::ClusterConfig;
use reid_core::clustering::domain::linkage::Linkage;
use reid_core::io::domain::detection_reader::DetectionReader;
use reid_core::io::domain::group_writer::GroupWriter;
use reid_core::io::infrastructure::json_detection_reader::JsonDetectionReader;
use reid_core::io::infrastructure::json_group_writer::JsonGroupWriter;
use reid_core::pipeline::pipeline_logger::SummaryPipelineLogger;
use reid_core::pipeline::reidentify_use_case::ReidentifyUseCase;
use reid_core::shared::constants::{MAX_DISTANCE_THRESHOLD, MIN_DISTANCE_THRESHOLD};
use reid_core::similarity::domain::similarity_engine::SimilarityEngine;
use reid_core::similarity::infrastructure::cosine_similarity::CosineSimilarity;

/// Group person detections from multiple cameras into identities.
#[derive(Parser)]
#[command(name = "reid")]
struct Cli {
    /// JSON array of detections with `detection_id` and `feature`.
    input: PathBuf,

    /// Output file for the groups (stdout if omitted).
    output: Option<PathBuf>,

    /// Maximum average cosine distance for a merge (0.0-2.0, default 0.5).
    #[arg(long)]
    threshold: Option<f64>,

    /// Cluster linkage: average, single or complete (default average).
    #[arg(long)]
    linkage: Option<String>,

    /// JSON file with `threshold` and `linkage`; flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let config = build_config(&cli)?;

    let detections = JsonDetectionReader::new().read(&cli.input)?;
    log::info!(
        "Loaded {} detections from {}",
        detections.len(),
        cli.input.display()
    );

    let mut use_case = ReidentifyUseCase::new(
        SimilarityEngine::new(Box::new(CosineSimilarity::new())),
        AgglomerativeClusterer::new(config)?,
        Box::new(SummaryPipelineLogger::new()),
    );
    let result = use_case.execute(&detections)?;
    use_case.finish();

    let writer = JsonGroupWriter::new().with_pretty(cli.pretty);
    match cli.output {
        Some(ref path) => {
            writer.write(path, &result.groups)?;
            log::info!("Groups written to {}", path.display());
        }
        None => writer.write_to(io::stdout().lock(), &result.groups)?,
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<ClusterConfig, Box<dyn std::error::Error>> {
    let mut config = match cli.config {
        Some(ref path) => ClusterConfig::load(path)?,
        None => ClusterConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config = config.with_threshold(threshold);
    }
    if let Some(ref linkage) = cli.linkage {
        config = config.with_linkage(linkage.parse::<Linkage>()?);
    }
    config.validate()?;
    Ok(config)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if let Some(ref path) = cli.config {
        if !path.exists() {
            return Err(format!("Config file not found: {}", path.display()).into());
        }
    }
    if let Some(threshold) = cli.threshold {
        if !(MIN_DISTANCE_THRESHOLD..=MAX_DISTANCE_THRESHOLD).contains(&threshold) {
            return Err(format!(
                "Threshold must be between {MIN_DISTANCE_THRESHOLD:.1} and \
                 {MAX_DISTANCE_THRESHOLD:.1}, got {threshold}"
            )
            .into());
        }
    }
    Ok(())
}
