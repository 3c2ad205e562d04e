pub mod casing;
pub mod continent;
pub mod tag;

pub use casing::{CaseMap, LocaleCase, to_locale_lowercase, to_locale_uppercase};
pub use continent::{Continent, ContinentIndex, ContinentList};
pub use tag::LanguageTag;
