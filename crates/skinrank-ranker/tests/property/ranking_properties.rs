use proptest::prelude::*;
use skinrank_ranker::{builtin_table, rank, ConditionEntry, KnowledgeTable, SymptomQuery};
use std::collections::BTreeSet;

const VOCAB: &[&str] = &[
    "redness", "scaling", "itching", "thick patches", "dryness", "red patches",
    "flaking", "ring-shaped rash", "peeling", "rash", "burning", "facial redness",
    "bumps", "sensitivity", "unknowntoken",
];

fn arb_symptom() -> impl Strategy<Value = String> {
    prop::sample::select(VOCAB).prop_map(str::to_string)
}

fn arb_query() -> impl Strategy<Value = SymptomQuery> {
    prop::collection::vec(arb_symptom(), 0..8).prop_map(SymptomQuery::from_tokens)
}

fn arb_table() -> impl Strategy<Value = KnowledgeTable> {
    prop::collection::vec(
        (prop::collection::vec(arb_symptom(), 0..5), 0.0f64..=1.0),
        1..8,
    )
    .prop_map(|rows| {
        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(i, (symptoms, severity))| {
                let refs: Vec<&str> = symptoms.iter().map(String::as_str).collect();
                ConditionEntry::new(format!("Condition {i}"), &refs, severity, "")
            })
            .collect();
        KnowledgeTable::new(entries)
    })
}

// ── Every entry appears exactly once ───────────────────────────────────────

proptest! {
    #[test]
    fn result_has_full_cardinality(table in arb_table(), query in arb_query()) {
        let results = rank(&query, &table);
        prop_assert_eq!(results.len(), table.len());

        let names: BTreeSet<&str> = results.iter().map(|r| r.name()).collect();
        prop_assert_eq!(names.len(), table.len(), "duplicate or dropped entry");
    }

    #[test]
    fn results_sorted_descending(table in arb_table(), query in arb_query()) {
        let results = rank(&query, &table);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}

// ── Scores and fractions stay in [0, 1] ───────────────────────────────────

proptest! {
    #[test]
    fn scores_are_bounded(table in arb_table(), query in arb_query()) {
        for r in rank(&query, &table) {
            let fraction = r.match_fraction();
            prop_assert!((0.0..=1.0).contains(&fraction), "fraction {} out of range", fraction);
            prop_assert!(r.score >= 0.0 && r.score <= 1.0 + 1e-12, "score {} out of range", r.score);
            prop_assert!(r.match_count <= r.entry.symptom_set().len());
        }
    }

    #[test]
    fn empty_symptom_set_never_matches(query in arb_query(), severity in 0.0f64..=1.0) {
        let table = KnowledgeTable::new(vec![ConditionEntry::new("Empty", &[], severity, "")]);
        let results = rank(&query, &table);
        prop_assert_eq!(results[0].match_count, 0);
        prop_assert_eq!(results[0].match_fraction(), 0.0);
        prop_assert!((results[0].score - severity * 0.3).abs() < 1e-12);
    }
}

// ── Ranking is a pure function of its inputs ──────────────────────────────

proptest! {
    #[test]
    fn ranking_is_idempotent(table in arb_table(), query in arb_query()) {
        let first: Vec<(String, f64, usize)> = rank(&query, &table)
            .iter()
            .map(|r| (r.name().to_string(), r.score, r.match_count))
            .collect();
        let second: Vec<(String, f64, usize)> = rank(&query, &table)
            .iter()
            .map(|r| (r.name().to_string(), r.score, r.match_count))
            .collect();
        prop_assert_eq!(first, second);
    }
}

// ── Adding one of an entry's symptoms never lowers its score ──────────────

proptest! {
    #[test]
    fn adding_entry_symptom_is_monotone(query in arb_query(), pick in any::<prop::sample::Index>()) {
        let table = builtin_table();
        let before = rank(&query, table);

        let target = pick.get(table.entries());
        let symptom = pick.get(&target.symptoms).clone();
        let mut grown = query.clone();
        grown.insert(&symptom);
        let after = rank(&grown, table);

        let find = |results: &[skinrank_ranker::ScoredResult<'_>]| {
            results
                .iter()
                .find(|r| r.name() == target.name)
                .map(|r| (r.match_count, r.score))
        };
        let (count_before, score_before) = find(before.as_slice()).unwrap();
        let (count_after, score_after) = find(after.as_slice()).unwrap();

        prop_assert!(count_after >= count_before);
        prop_assert!(score_after >= score_before);
    }
}

// ── Unmatched queries fall back to severity order ─────────────────────────

proptest! {
    #[test]
    fn unmatched_query_orders_by_severity(tokens in prop::collection::vec("zz[a-z]{3,10}", 0..5)) {
        let table = builtin_table();
        let query = SymptomQuery::from_tokens(&tokens);
        let results = rank(&query, table);

        prop_assert!(results.iter().all(|r| r.match_count == 0));
        for pair in results.windows(2) {
            prop_assert!(pair[0].entry.severity >= pair[1].entry.severity);
        }
    }
}
