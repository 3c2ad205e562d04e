use anyhow::{Context as _, Result};
use clap::Parser;
use diacritics_extract::{Baseline, Config, run_with_config};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

/// Extract per-language diacritic mappings from CLDR exemplar characters.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long, env = "DIACRITICS_CONFIG")]
    config: Option<PathBuf>,

    /// Root of the cldr-json tree (contains main/ and supplemental/)
    #[arg(long, env = "DIACRITICS_CLDR_DIR")]
    cldr_dir: Option<PathBuf>,

    /// Continent/territory TSV
    #[arg(long, env = "DIACRITICS_CONTINENTS")]
    continents: Option<PathBuf>,

    /// Hand-validated language list (JSON, comments allowed)
    #[arg(long, env = "DIACRITICS_VALIDATED")]
    validated: Option<PathBuf>,

    /// Output template containing `//<%= contents %>`
    #[arg(long, env = "DIACRITICS_TEMPLATE")]
    template: Option<PathBuf>,

    /// Folder the language files are written to
    #[arg(long, env = "DIACRITICS_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// What each variant is compared against
    #[arg(long, value_enum, env = "DIACRITICS_BASELINE")]
    baseline: Option<Baseline>,

    /// Report what would be written without touching the output folder
    #[arg(long, env = "DIACRITICS_DRY_RUN")]
    dry_run: bool,

    /// Keep previously generated folders
    #[arg(long, env = "DIACRITICS_NO_PURGE")]
    no_purge: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).context("loading config")?,
            None => Config::default(),
        };
        if let Some(dir) = self.cldr_dir {
            config.cldr_dir = dir;
        }
        if let Some(path) = self.continents {
            config.continents = path;
        }
        if let Some(path) = self.validated {
            config.validated = path;
        }
        if let Some(path) = self.template {
            config.template = Some(path);
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(baseline) = self.baseline {
            config.baseline = baseline;
        }
        config.dry_run |= self.dry_run;
        if self.no_purge {
            config.purge = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = Cli::parse().into_config()?;
    tracing::info!(
        cldr = %config.cldr_dir.display(),
        output = %config.output_dir.display(),
        "starting extraction"
    );

    let report = run_with_config(&config).context("extraction aborted")?;
    for path in &report.written {
        let action = if config.dry_run { "would write" } else { "wrote" };
        tracing::info!(path = %path.display(), "{action}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
