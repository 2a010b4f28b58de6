use std::path::PathBuf;

use clap::Parser;
use mdtriage_ai::{Classifier, ZeroShotScorer};
use mdtriage_core::TriageConfig;

mod run;

/// Triage polymer-MD abstracts: one accept/priority decision per .txt file.
#[derive(Parser)]
#[command(name = "mdtriage", version)]
struct Cli {
    /// Directory containing abstract .txt files.
    input_dir: PathBuf,

    /// Directory containing model.onnx and tokenizer.json.
    #[arg(long, env = "MDTRIAGE_MODEL_DIR")]
    model_dir: PathBuf,

    /// Output CSV path.
    #[arg(short, long, default_value = "abstract_decisions.csv")]
    output: PathBuf,

    /// Maximum texts per scorer invocation.
    #[arg(long)]
    batch_size: Option<usize>,

    /// Minimum positive score to accept.
    #[arg(long)]
    accept_threshold: Option<f32>,

    /// Minimum positive-over-negative margin to accept.
    #[arg(long)]
    accept_margin: Option<f32>,

    /// Minimum composite score to prioritize.
    #[arg(long)]
    priority_threshold: Option<f32>,

    /// Minimum property-over-negative margin to prioritize.
    #[arg(long)]
    priority_margin: Option<f32>,
}

impl Cli {
    fn config(&self) -> TriageConfig {
        let mut config = TriageConfig::default();
        if let Some(v) = self.batch_size {
            config.batch_size = v;
        }
        if let Some(v) = self.accept_threshold {
            config.accept_threshold = v;
        }
        if let Some(v) = self.accept_margin {
            config.accept_margin = v;
        }
        if let Some(v) = self.priority_threshold {
            config.priority_threshold = v;
        }
        if let Some(v) = self.priority_margin {
            config.priority_margin = v;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let scorer = ZeroShotScorer::load(&cli.model_dir)?;
    let classifier = Classifier::new(scorer, cli.config())?;

    let stats = run::run_triage(classifier, &cli.input_dir, &cli.output)?;
    eprintln!(
        "Wrote {} rows to {} in {:.1}s ({} accepted, {} priority, {} failed)",
        stats.total,
        cli.output.display(),
        stats.elapsed_secs,
        stats.accepted,
        stats.priority,
        stats.failed,
    );
    Ok(())
}
