//! Variant deduplication.
//!
//! A variant (`de-AT`) is only worth a file when it says something its
//! language does not. Each variant is compared with a *baseline* record and
//! suppressed when the two are structurally equal.
//!
//! Two baselines are available:
//!
//! * [`Baseline::Grouped`] compares a variant with its nearest processed
//!   non-variant ancestor (`sr-Latn-BA` → `sr-Latn`, `de-AT` → `de`). Result
//!   order does not matter.
//! * [`Baseline::Discovery`] keeps a rolling snapshot of the last non-variant
//!   record seen. It is only correct when every root comes immediately before
//!   its variants in `results`, which [`CldrCorpus`](crate::corpus::CldrCorpus)
//!   guarantees by sorting its directory listing.

use crate::{
    reference::ValidatedSet,
    record::{LanguageRecord, LanguageResult},
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    #[default]
    Grouped,
    Discovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Write,
    /// The tag, or the language of a variant, is curated by hand.
    SkipValidated,
    /// Identical to its baseline.
    SkipDuplicate,
    /// No diacritics.
    SkipEmpty,
}

/// Results paired with their decision, in input order.
pub type Decisions<'r> = Vec<(&'r LanguageResult, Decision)>;

pub struct VariantDeduplicator<'a> {
    validated: &'a ValidatedSet,
    baseline: Baseline,
}

impl<'a> VariantDeduplicator<'a> {
    pub fn new(validated: &'a ValidatedSet, baseline: Baseline) -> Self {
        Self {
            validated,
            baseline,
        }
    }

    /// One decision per result, in input order.
    pub fn decide<'r>(&self, results: &'r [LanguageResult]) -> Decisions<'r> {
        match self.baseline {
            Baseline::Grouped => self.decide_grouped(results),
            Baseline::Discovery => self.decide_discovery(results),
        }
    }

    fn decide_grouped<'r>(&self, results: &'r [LanguageResult]) -> Decisions<'r> {
        let roots: HashMap<&str, &LanguageRecord> = results
            .iter()
            .filter(|r| !r.tag.is_variant())
            .map(|r| (r.tag.as_str(), &r.record))
            .collect();

        results
            .iter()
            .map(|result| {
                let baseline = result
                    .tag
                    .is_variant()
                    .then(|| result.tag.ancestors().find_map(|a| roots.get(a).copied()))
                    .flatten();
                (result, self.classify(result, baseline))
            })
            .collect()
    }

    fn decide_discovery<'r>(&self, results: &'r [LanguageResult]) -> Decisions<'r> {
        // the first result is assumed not to be a variant
        let mut snapshot = results.first().map(|r| &r.record);

        results
            .iter()
            .map(|result| {
                if !result.tag.is_variant() {
                    snapshot = Some(&result.record);
                }
                let baseline = if result.tag.is_variant() { snapshot } else { None };
                (result, self.classify(result, baseline))
            })
            .collect()
    }

    /// `baseline` is `Some` only for variants that have one.
    fn classify(&self, result: &LanguageResult, baseline: Option<&LanguageRecord>) -> Decision {
        let tag = &result.tag;
        let decision = if self.validated.contains(tag.as_str())
            || (tag.is_variant() && self.validated.contains(tag.root()))
        {
            Decision::SkipValidated
        } else if baseline.is_some_and(|b| *b == result.record) {
            Decision::SkipDuplicate
        } else if !result.record.has_data() {
            Decision::SkipEmpty
        } else {
            Decision::Write
        };
        debug!(tag = %tag, ?decision, "variant check");
        decision
    }
}
