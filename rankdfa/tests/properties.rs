//! Property tests for the rank/unrank bijection (§8 of the design notes): round-trip, inverse
//! round-trip, monotone order and counting consistency, checked against randomly generated small
//! DFAs rather than hand-picked examples.

use num_bigint::BigUint;
use proptest::prelude::*;
use rankdfa::dfa::Dfa;

const NUM_STATES: usize = 4;
const NUM_SYMBOLS: usize = 2;

fn listing_from(delta: &[Vec<u32>], accepting: &[bool]) -> String {
    let mut lines = Vec::new();
    for (src, row) in delta.iter().enumerate() {
        for (sym, &dst) in row.iter().enumerate() {
            let code = sym as u32 + 1;
            lines.push(format!("{src}\t{dst}\t{code}\t{code}"));
        }
    }
    for (state, &acc) in accepting.iter().enumerate() {
        if acc {
            lines.push(state.to_string());
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

/// All words of length `0..=max_len` over a `num_symbols`-byte alphabet `{0, 1, ..., num_symbols - 1}`.
fn words_up_to(num_symbols: usize, max_len: u32) -> Vec<Vec<u8>> {
    let mut out = vec![Vec::new()];
    let mut current = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(current.len() * num_symbols);
        for w in &current {
            for s in 0..num_symbols {
                let mut w2 = w.clone();
                w2.push(s as u8);
                next.push(w2);
            }
        }
        out.extend(next.iter().cloned());
        current = next;
    }
    out
}

fn delta_strategy() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(
        prop::collection::vec(0u32..NUM_STATES as u32, NUM_SYMBOLS),
        NUM_STATES,
    )
}

fn accepting_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), NUM_STATES)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// `unrank(rank(w)) == w` for every word the DFA accepts within `max_len`.
    #[test]
    fn round_trip(
        delta in delta_strategy(),
        accepting in accepting_strategy(),
        max_len in 0u32..6,
    ) {
        let dfa = Dfa::new(&listing_from(&delta, &accepting), max_len).unwrap();
        for word in words_up_to(NUM_SYMBOLS, max_len) {
            if dfa.accepts(&word) {
                let rank = dfa.rank(&word).unwrap();
                prop_assert_eq!(dfa.unrank(&rank).unwrap(), word);
            }
        }
    }

    /// `rank(unrank(c)) == c` for every rank within the language's total count.
    #[test]
    fn inverse_round_trip(
        delta in delta_strategy(),
        accepting in accepting_strategy(),
        max_len in 0u32..6,
    ) {
        let dfa = Dfa::new(&listing_from(&delta, &accepting), max_len).unwrap();
        let total = dfa.num_words_in_language(0, max_len).unwrap();
        let mut c = BigUint::from(0u8);
        while c < total {
            let word = dfa.unrank(&c).unwrap();
            prop_assert_eq!(dfa.rank(&word).unwrap(), c.clone());
            c += 1u32;
        }
    }

    /// Among words of equal length, rank respects symbol-index lexicographic order.
    #[test]
    fn monotone_order(
        delta in delta_strategy(),
        accepting in accepting_strategy(),
        max_len in 1u32..6,
    ) {
        let dfa = Dfa::new(&listing_from(&delta, &accepting), max_len).unwrap();
        for len in 1..=max_len {
            let accepted: Vec<Vec<u8>> = words_up_to(NUM_SYMBOLS, len)
                .into_iter()
                .filter(|w| w.len() == len as usize && dfa.accepts(w))
                .collect();
            for w1 in &accepted {
                for w2 in &accepted {
                    let r1 = dfa.rank(w1).unwrap();
                    let r2 = dfa.rank(w2).unwrap();
                    prop_assert_eq!(w1 < w2, r1 < r2);
                }
            }
        }
    }

    /// `num_words_in_language` agrees with a brute-force count of accepted words.
    #[test]
    fn count_matches_brute_force(
        delta in delta_strategy(),
        accepting in accepting_strategy(),
        max_len in 0u32..6,
    ) {
        let dfa = Dfa::new(&listing_from(&delta, &accepting), max_len).unwrap();
        let expected = words_up_to(NUM_SYMBOLS, max_len)
            .into_iter()
            .filter(|w| dfa.accepts(w))
            .count();
        let counted = dfa.num_words_in_language(0, max_len).unwrap();
        prop_assert_eq!(counted, BigUint::from(expected as u64));
    }
}
