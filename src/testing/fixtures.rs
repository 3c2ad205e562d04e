//! A small CLDR-shaped corpus shared by the cross-module tests.
//!
//! Tags are listed in sorted order, as `CldrCorpus` reports them:
//!
//! | tag          | expected outcome                              |
//! |--------------|-----------------------------------------------|
//! | `bs`         | written, clusters ignored                     |
//! | `de`         | written                                       |
//! | `de-AT`      | duplicate of `de`                             |
//! | `de-CH`      | written (no `ß`, own native name)             |
//! | `en`         | empty                                         |
//! | `en-GB`      | empty                                         |
//! | `es`         | validated                                     |
//! | `es-MX`      | validated (through `es`)                      |
//! | `fr`         | written                                       |
//! | `fr-CA`      | written (own native name)                     |
//! | `sr`         | empty (Cyrillic has no decomposable letters)  |
//! | `sr-Latn`    | written to `sr/sr.json`                       |
//! | `sr-Latn-BA` | duplicate of `sr-Latn`                        |
//! | `tr`         | written                                       |
//! | `zz`         | skipped, no exemplar characters               |

use crate::{
    context::Context,
    corpus::{DisplayNames, LanguageData, LanguageInfo, MemoryCorpus},
    lang::{Continent, ContinentIndex},
    reference::ValidatedSet,
};

pub const BS: &str = "[a b c č ć d {dž} đ e f g h i j k l {lj} m n {nj} o p r s š t u v z ž]";
pub const DE: &str = "[a ä b c d e f g h i j k l m n o ö p q r s ß t u ü v w x y z]";
pub const DE_CH: &str = "[a ä b c d e f g h i j k l m n o ö p q r s t u ü v w x y z]";
pub const EN: &str = "[a b c d e f g h i j k l m n o p q r s t u v w x y z]";
pub const ES: &str = "[a á b c d e é f g h i í j k l m n ñ o ó p q r s t u ú ü v w x y z]";
pub const FR: &str = "[a à â æ b c ç d e é è ê ë f g h i î ï j k l m n o ô œ p q r s t u ù û ü v w x y ÿ z]";
pub const SR: &str = "[а б в г д ђ е ж з и ј к л љ м н њ о п р с т ћ у ф х ц ч џ ш]";
pub const SR_LATN: &str = "[a b c č ć d {dž} đ e f g h i j k l {lj} m n {nj} o p r s š t u v z ž]";
pub const TR: &str = "[a b c ç d e f g ğ h ı i j k l m n o ö p r s ş t u ü v y z]";

pub const CONTINENTS_TSV: &str = "\
AF\tSN
AS\tTR
EU\tAT
EU\tBA
EU\tBE
EU\tCH
EU\tDE
EU\tES
EU\tFR
EU\tGB
EU\tRS
EU\tTR
NA\tCA
NA\tMX
NA\tUS
SA\tAR
SA\tBR
";

pub const VALIDATED_JSON: &str = r#"
// reviewed by hand, never regenerated
[
  "es" /* Spanish */
]
"#;

fn info(scripts: &[&str], territories: &[&str]) -> LanguageInfo {
    LanguageInfo {
        scripts: scripts.iter().map(|s| s.to_string()).collect(),
        territories: territories.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn language_data() -> LanguageData {
    [
        ("bs", info(&["Latn"], &["BA"])),
        ("de", info(&["Latn"], &["DE", "AT", "CH", "BE"])),
        ("de-alt-secondary", info(&[], &["BR", "US"])),
        ("en", info(&["Latn"], &["US", "GB", "CA"])),
        ("es", info(&["Latn"], &["ES", "MX", "AR"])),
        ("fr", info(&["Latn"], &["FR", "BE", "CH", "CA", "SN"])),
        ("sr", info(&["Cyrl", "Latn"], &["RS", "BA"])),
        ("tr", info(&["Latn"], &["TR"])),
    ]
    .into_iter()
    .collect()
}

pub fn english_names() -> DisplayNames {
    [
        ("bs", "Bosnian"),
        ("de", "German"),
        ("en", "English"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("sr", "Serbian"),
        ("tr", "Turkish"),
    ]
    .into_iter()
    .collect()
}

pub fn continent_index() -> ContinentIndex {
    CONTINENTS_TSV
        .lines()
        .filter_map(|line| line.split_once('\t'))
        .filter_map(|(code, territory)| Continent::from_code(code).map(|c| (c, territory)))
        .collect()
}

pub fn validated() -> ValidatedSet {
    ["es"].into_iter().collect()
}

pub fn corpus() -> MemoryCorpus {
    MemoryCorpus::new(language_data(), english_names())
        .with_locale("bs", Some(BS), Some("bosanski"))
        .with_locale("de", Some(DE), Some("Deutsch"))
        .with_locale("de-AT", Some(DE), Some("Deutsch"))
        .with_locale("de-CH", Some(DE_CH), Some("Schweizer Hochdeutsch"))
        .with_locale("en", Some(EN), Some("English"))
        .with_locale("en-GB", Some(EN), Some("British English"))
        .with_locale("es", Some(ES), Some("español"))
        .with_locale("es-MX", Some(ES), Some("español de México"))
        .with_locale("fr", Some(FR), Some("français"))
        .with_locale("fr-CA", Some(FR), Some("français canadien"))
        .with_locale("sr", Some(SR), Some("српски"))
        .with_locale("sr-Latn", Some(SR_LATN), Some("srpski"))
        .with_locale("sr-Latn-BA", Some(SR_LATN), Some("srpski"))
        .with_locale("tr", Some(TR), Some("Türkçe"))
        .with_locale("zz", None, None)
}

pub fn context() -> Context {
    Context::new(continent_index(), validated(), language_data(), english_names())
}
