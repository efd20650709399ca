use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use plagiarism_detector::{check_texts, load_text, DetectorConfig, TextSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "plagiarism-detector",
    about = "Score how much of CANDIDATE also appears in REFERENCE"
)]
struct Cli {
    /// Reference document: a file path or an http(s) URL
    reference: String,

    /// Candidate document: a file path or an http(s) URL
    candidate: String,

    /// YAML configuration file
    #[arg(long, env = "PLAGIARISM_CONFIG")]
    config: Option<PathBuf>,

    /// Words per window
    #[arg(long, env = "PLAGIARISM_WINDOW_SIZE")]
    window_size: Option<usize>,

    /// Expected number of reference windows; sizes the filter
    #[arg(long, env = "PLAGIARISM_NUM_ITEMS")]
    num_items: Option<usize>,

    /// Target false-positive rate of the filter
    #[arg(long, env = "PLAGIARISM_FPR")]
    fpr: Option<f64>,

    /// Fingerprint and query windows on all cores
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Print every matched candidate window
    #[arg(long, default_value_t = false)]
    show_matches: bool,

    /// Print the full report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn detector_config(&self) -> Result<DetectorConfig> {
        let mut cfg = match &self.config {
            Some(path) => DetectorConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => DetectorConfig::default(),
        };
        if let Some(window_size) = self.window_size {
            cfg.compare = cfg.compare.with_window_size(window_size);
        }
        if let Some(num_items) = self.num_items {
            cfg.compare = cfg.compare.with_num_items(num_items);
        }
        if let Some(fpr) = self.fpr {
            cfg.compare = cfg.compare.with_false_positive_rate(fpr);
        }
        if self.parallel {
            cfg.compare = cfg.compare.with_parallel(true);
        }
        cfg.compare = cfg
            .compare
            .with_record_matches(self.show_matches || self.json);
        cfg.validate().context("invalid configuration")?;
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("PLAGIARISM_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = cli.detector_config()?;

    let reference_src = TextSource::from_arg(&cli.reference);
    let candidate_src = TextSource::from_arg(&cli.candidate);
    let reference = load_text(&reference_src)
        .with_context(|| format!("failed to load reference {reference_src}"))?;
    let candidate = load_text(&candidate_src)
        .with_context(|| format!("failed to load candidate {candidate_src}"))?;

    let report = check_texts(&reference, &candidate, &cfg).context("comparison failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Plagiarism score: {}%", report.score);
    if cli.show_matches {
        for window in &report.matched_windows {
            println!("  {window}");
        }
    }
    Ok(())
}
