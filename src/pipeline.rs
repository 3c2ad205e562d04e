// src/pipeline.rs
//
// One extraction run: purge → discover → load + build → deduplicate → write.
// Strictly sequential; tag order from the corpus is preserved throughout.

use crate::{
    config::{Config, ConfigError},
    context::Context,
    corpus::{CldrCorpus, Corpus, CorpusError},
    dedup::{Baseline, Decision, VariantDeduplicator},
    lang::LanguageTag,
    output::{OutputWriter, Template, WriteError, WriteOutcome},
    record::LanguageResult,
    reference::ReferenceError,
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),
    #[error("reference data error: {0}")]
    Reference(#[from] ReferenceError),
    #[error("output error: {0}")]
    Write(#[from] WriteError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub baseline: Baseline,
    /// Compute everything, touch nothing on disk.
    pub dry_run: bool,
    /// Remove previously generated folders first.
    pub purge: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            baseline: Baseline::default(),
            dry_run: false,
            purge: true,
        }
    }
}

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub discovered: usize,
    /// Tags without usable corpus data.
    pub skipped: Vec<LanguageTag>,
    pub records: usize,
    pub validated: usize,
    pub duplicates: usize,
    pub empty: usize,
    /// Files written, or that would be written in a dry run.
    pub written: Vec<PathBuf>,
    pub expected_collisions: usize,
    pub collisions: Vec<PathBuf>,
    /// Tags whose file could not be written for reasons other than a collision.
    pub failed: Vec<LanguageTag>,
    pub purged: Vec<PathBuf>,
}

/// Load and build a record for every tag of the corpus, in corpus order.
///
/// Tags whose locale data cannot be loaded are logged and skipped.
pub fn collect_records<C: Corpus>(
    ctx: &mut Context,
    corpus: &C,
    report: &mut RunReport,
) -> Result<Vec<LanguageResult>, ExtractError> {
    let tags = corpus.tags()?;
    report.discovered = tags.len();

    let mut results = Vec::with_capacity(tags.len());
    for tag in tags {
        if let Err(e) = ctx.load_locale(corpus, &tag) {
            warn!(tag = %tag, error = %e, "skipping language");
            report.skipped.push(tag);
            continue;
        }
        if let Some(record) = ctx.build_record(&tag) {
            results.push(LanguageResult { tag, record });
        }
    }
    report.records = results.len();
    Ok(results)
}

/// Run the whole extraction against an already loaded context.
pub fn run<C: Corpus>(
    ctx: &mut Context,
    corpus: &C,
    writer: &OutputWriter,
    options: RunOptions,
) -> Result<RunReport, ExtractError> {
    let mut report = RunReport::default();

    if options.purge && !options.dry_run {
        report.purged = writer.purge(&ctx.validated)?;
    }

    let results = collect_records(ctx, corpus, &mut report)?;

    let dedup = VariantDeduplicator::new(&ctx.validated, options.baseline);
    for (result, decision) in dedup.decide(&results) {
        match decision {
            Decision::SkipValidated => report.validated += 1,
            Decision::SkipDuplicate => report.duplicates += 1,
            Decision::SkipEmpty => report.empty += 1,
            Decision::Write if options.dry_run => {
                report.written.push(writer.path_for(&result.tag));
            }
            Decision::Write => match writer.write(&result.tag, &result.record) {
                Ok(WriteOutcome::Written(path)) => report.written.push(path),
                Ok(WriteOutcome::ExpectedCollision(_)) => report.expected_collisions += 1,
                Err(WriteError::Collision { path }) => {
                    let (_, stem) = result.tag.output_location();
                    error!(
                        tag = %result.tag,
                        path = %path.display(),
                        "{stem} file already exists"
                    );
                    report.collisions.push(path);
                }
                Err(e) => {
                    error!(tag = %result.tag, error = %e, "failed to write language file");
                    report.failed.push(result.tag.clone());
                }
            },
        }
    }

    info!(
        discovered = report.discovered,
        skipped = report.skipped.len(),
        validated = report.validated,
        duplicates = report.duplicates,
        empty = report.empty,
        written = report.written.len(),
        collisions = report.collisions.len(),
        dry_run = options.dry_run,
        "extraction finished"
    );
    Ok(report)
}

/// Run against the cldr-json tree and output folder named by `config`.
pub fn run_with_config(config: &Config) -> Result<RunReport, ExtractError> {
    let corpus = CldrCorpus::new(&config.cldr_dir);
    let template = match &config.template {
        Some(path) => Template::load(path)?,
        None => Template::default(),
    };
    let writer = OutputWriter::new(&config.output_dir, template);
    let mut ctx = Context::load(config, &corpus)?;
    run(&mut ctx, &corpus, &writer, config.options())
}
