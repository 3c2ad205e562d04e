mod prop_tests {
    use crate::{
        Baseline, Decision, DiacriticTable, LanguageRecord, LanguageResult, LanguageTag,
        Metadata, ValidatedSet, VariantDeduplicator, extract_alphabet, resolve,
        unicode::{base_letters, decompose, is_combining_mark},
    };
    use proptest::prelude::*;
    use unicode_normalization::UnicodeNormalization;

    const MARKS: [char; 9] = [
        '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0308}', '\u{030A}', '\u{030C}',
        '\u{0327}', '\u{0328}',
    ];

    const ACCENTED: [&str; 8] = ["á", "é", "í", "ó", "ú", "ñ", "ü", "ç"];

    fn result(tag: &str, chars: &[&str]) -> LanguageResult {
        LanguageResult {
            tag: LanguageTag::new(tag),
            record: LanguageRecord::new(Metadata::default(), DiacriticTable::from_alphabet(chars)),
        }
    }

    proptest! {
        #[test]
        fn ascii_exemplars_yield_nothing(s in "[a-zA-Z ]{0,64}") {
            let exemplars = format!("[{s}]");
            prop_assert!(extract_alphabet(&exemplars, "en").is_empty());
        }

        #[test]
        fn ascii_is_never_a_diacritic(c in "[ -~]") {
            prop_assert!(resolve(&c).is_none());
        }

        // Canonical singletons (U+2126 OHM SIGN → Ω) decompose without a mark
        // but to a different letter, so they are left out.
        #[test]
        fn undecomposable_chars_are_rejected(c in any::<char>()) {
            let entry = c.to_string();
            let nfd = decompose(&entry);
            prop_assume!(!nfd.chars().any(is_combining_mark) && nfd == entry.as_str());
            prop_assert!(resolve(&entry).is_none());
        }

        #[test]
        fn clusters_never_resolve(inner in "[^{}]{1,8}") {
            let token = format!("{{{inner}}}");
            prop_assert!(resolve(&token).is_none());
        }

        #[test]
        fn base_letters_idempotent(s in ".{0,64}") {
            let once = base_letters(&s);
            let twice = base_letters(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn accented_letter_maps_to_its_base(
            base in "[a-zA-Z]",
            mark in prop::sample::select(MARKS.to_vec()),
        ) {
            let entry: String = format!("{base}{mark}").nfc().collect();
            let mapping = resolve(&entry);
            prop_assert_eq!(mapping.map(|m| m.base), Some(base));
        }

        #[test]
        fn tag_structure(tag in "[a-z]{2,3}(-[A-Za-z0-9]{2,4}){0,3}") {
            let tag = LanguageTag::new(tag);
            let variant = tag.as_str().contains('-') && tag.as_str() != "sr-Latn";
            prop_assert_eq!(tag.is_variant(), variant);
            prop_assert!(!tag.language().contains('-'));
            prop_assert!(tag.as_str().starts_with(tag.language()));
            for ancestor in tag.ancestors() {
                prop_assert!(ancestor.len() < tag.as_str().len());
                prop_assert!(tag.as_str().starts_with(ancestor));
                prop_assert!(!ancestor.ends_with('-'));
            }
        }

        #[test]
        fn identical_variant_is_duplicate(
            chars in prop::sample::subsequence(ACCENTED.to_vec(), 1..=8),
        ) {
            let results = [result("xx", &chars), result("xx-YY", &chars)];
            let validated = ValidatedSet::default();
            for baseline in [Baseline::Grouped, Baseline::Discovery] {
                let decisions: Vec<Decision> = VariantDeduplicator::new(&validated, baseline)
                    .decide(&results)
                    .into_iter()
                    .map(|(_, d)| d)
                    .collect();
                prop_assert_eq!(decisions, vec![Decision::Write, Decision::SkipDuplicate]);
            }
        }

        #[test]
        fn variant_with_extra_letter_is_written(
            chars in prop::sample::subsequence(ACCENTED.to_vec(), 0..=8),
        ) {
            let mut extended = chars.clone();
            extended.push("ř");
            let results = [result("xx", &chars), result("xx-YY", &extended)];
            let validated = ValidatedSet::default();
            for baseline in [Baseline::Grouped, Baseline::Discovery] {
                let dedup = VariantDeduplicator::new(&validated, baseline);
                let (_, decision) = dedup.decide(&results)[1];
                prop_assert_eq!(decision, Decision::Write);
            }
        }
    }
}
