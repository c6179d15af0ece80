use mojifix_repair::{CellOutcome, CellPass, Repairer, SimilarityCache, decode_url, similarity};
use proptest::prelude::*;

proptest! {
    #[test]
    fn repair_never_panics_and_applies_table(text in "\\PC{0,40}") {
        let repairer = Repairer::default();
        let repaired = repairer.repair(&text);
        for entry in repairer.table().entries() {
            // a pattern can only survive if a later entry re-created it
            if repaired.contains(entry.from.as_str()) {
                let later = repairer
                    .table()
                    .entries()
                    .iter()
                    .skip_while(|e| e.from != entry.from)
                    .skip(1)
                    .any(|e| e.to.contains(entry.from.as_str()));
                prop_assert!(later, "pattern {:?} left in {:?}", entry.from, repaired);
            }
        }
    }

    #[test]
    fn decode_url_is_idempotent_without_escapes(text in "[^%]{0,40}") {
        let once = decode_url(&text).into_owned();
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(decode_url(&once), once.as_str());
    }

    #[test]
    fn ratio_stays_in_unit_interval(a in "\\PC{0,30}", b in "\\PC{0,30}") {
        let r = similarity::ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&r));
        prop_assert!(similarity::length_bound(&a, &b) >= r);
    }

    #[test]
    fn cache_never_answers_at_or_below_threshold(
        keys in prop::collection::vec("[a-z/:.]{1,24}", 1..8),
        candidate in "[a-z/:.]{1,24}",
    ) {
        let mut cache = SimilarityCache::default();
        for key in &keys {
            cache.insert(key.clone(), format!("value:{key}"));
        }
        let best = keys
            .iter()
            .map(|k| similarity::ratio(&candidate, k))
            .fold(0.0_f64, f64::max);
        if best <= cache.threshold() {
            prop_assert_eq!(cache.find_similar(&candidate), None);
        } else {
            prop_assert!(cache.find_similar(&candidate).is_some());
        }
    }

    #[test]
    fn ascii_without_escapes_is_a_no_op(text in "[ -$&-~]{1,40}") {
        let mut pass = CellPass::default();
        prop_assert_eq!(pass.process(&text), CellOutcome::Unchanged);
        prop_assert!(pass.cache().is_empty());
    }
}
