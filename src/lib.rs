pub mod alphabet;
pub mod config;
pub mod context;
pub mod corpus;
pub mod dedup;
pub mod diacritic;
pub mod lang;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod reference;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use alphabet::extract_alphabet;
pub use config::Config;
pub use context::Context;
pub use corpus::{CldrCorpus, Corpus, MemoryCorpus};
pub use dedup::{Baseline, Decision, Decisions, VariantDeduplicator};
pub use diacritic::{DiacriticMapping, DiacriticTable, resolve};
pub use lang::{Continent, ContinentIndex, LanguageTag};
pub use output::{OutputWriter, Template};
pub use pipeline::{ExtractError, RunOptions, RunReport, run, run_with_config};
pub use record::{LanguageRecord, LanguageResult, Metadata};
pub use reference::ValidatedSet;
