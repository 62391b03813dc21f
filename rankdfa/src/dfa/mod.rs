//! # Deterministic Finite Automaton ranker
//!
//! This module contains [`Dfa`], the core of this crate: a DFA paired with a precomputed counting
//! table that lets [`Dfa::rank`] and [`Dfa::unrank`] establish a length-stratified,
//! lexicographically-ordered bijection between nonnegative integers and the words of the DFA's
//! accepted language up to `max_len`.
//!
//! ## Example
//! A `Dfa` is built from an AT&T-format transition listing (§6.1 of the design notes) and a
//! `max_len` bound. The listing can come from a hand-written file, or from
//! [`crate::regex::att_fst_from_regex`] followed by [`crate::minimize::att_fst_minimize`].
//!
//! ```
//! use rankdfa::dfa::Dfa;
//!
//! // Two states (0 = start, 1 = accepting), one symbol (code 98 = byte 'a').
//! let listing = "0\t1\t98\t98\n1\t1\t98\t98\n1\n";
//! let dfa = Dfa::new(listing, 4).unwrap();
//! assert_eq!(dfa.rank(b"a").unwrap(), 0u32.into());
//! assert_eq!(dfa.unrank(&0u32.into()).unwrap(), b"a");
//! ```
//!
//! ## Operations
//! * [Parsing](Dfa::new) an AT&T listing into a ready-to-query DFA
//! * [Ranking](Dfa::rank) a word to its integer position in the length-stratified order
//! * [Unranking](Dfa::unrank) an integer back to its word
//! * [Counting](Dfa::num_words_in_language) the words accepted within a length window
//! * [Checking acceptance](Dfa::accepts) of a word without consulting the counting table

use crate::dfa::error::{AttParseError, CountError, RankError, UnrankError};
use num_bigint::BigUint;
use num_traits::Zero;
use std::collections::HashMap;

pub mod error;
mod count;
mod parse;

/// A DFA over a byte alphabet, augmented with the precomputed counting table that makes
/// [`rank`](Dfa::rank) and [`unrank`](Dfa::unrank) efficient. See the [module-level
/// documentation](crate::dfa) for more info.
#[derive(Debug, Clone)]
pub struct Dfa {
    /// `sigma[symbol_idx]` is the byte for that symbol index.
    sigma: Vec<u8>,
    /// Inverse of `sigma`: byte to symbol index.
    sigma_reverse: HashMap<u8, usize>,
    /// `delta[state][symbol_idx] = dst_state`. Dense, including the dead state's self-loops.
    delta: Vec<Vec<u32>>,
    accepting: Vec<bool>,
    start_state: u32,
    max_len: u32,
    /// `table[state][k]`: number of words of length exactly `k` accepted from `state`.
    table: Vec<Vec<BigUint>>,
}

impl Dfa {
    /// Parses an AT&T-format transition listing (§6.1) and builds a [`Dfa`] with its counting
    /// table precomputed up to `max_len`. A dead/sink state is synthesized automatically: any
    /// transition not present in the listing resolves there, and the dead state loops to itself
    /// on every symbol and is never accepting.
    pub fn new(att_text: &str, max_len: u32) -> Result<Self, AttParseError> {
        let parse::RawAtt {
            sigma,
            mut delta,
            accepting,
            start_state,
            num_states,
        } = parse::parse(att_text)?;

        for state in accepting.iter() {
            if *state >= num_states {
                return Err(AttParseError::AcceptingStateOutOfRange(*state, num_states));
            }
        }

        let num_symbols = sigma.len();
        let dead = num_states as usize;
        let total_states = dead + 1;

        // Append the dead state: non-accepting, every symbol loops back to itself.
        delta.push(vec![dead as u32; num_symbols]);
        debug_assert_eq!(delta.len(), total_states);

        let mut accepting_mask = vec![false; total_states];
        for state in accepting {
            accepting_mask[state as usize] = true;
        }

        let sigma_reverse = sigma
            .iter()
            .enumerate()
            .map(|(idx, &byte)| (byte, idx))
            .collect();

        log::debug!(
            "parsed AT&T listing: {total_states} states ({num_symbols} symbols), start={start_state}"
        );

        let table = count::build_table(&delta, &accepting_mask, max_len);

        Ok(Dfa {
            sigma,
            sigma_reverse,
            delta,
            accepting: accepting_mask,
            start_state,
            max_len,
            table,
        })
    }

    /// The maximum word length this DFA's counting table was built for.
    pub fn max_len(&self) -> u32 {
        self.max_len
    }

    /// The number of states, including the synthesized dead state.
    pub fn num_states(&self) -> usize {
        self.delta.len()
    }

    /// The alphabet of this DFA, as the bytes accepted (in symbol-index order, i.e. the order in
    /// which they first appeared in the AT&T listing this DFA was parsed from).
    pub fn alphabet(&self) -> &[u8] {
        &self.sigma
    }

    /// Checks whether `word` is accepted by this DFA, without touching the counting table. Unlike
    /// [`rank`](Dfa::rank), this has no length bound beyond avoiding overflow of the step count,
    /// and returns `false` (rather than an error) for out-of-alphabet bytes.
    pub fn accepts(&self, word: &[u8]) -> bool {
        let mut state = self.start_state as usize;
        for &byte in word {
            let Some(&sym) = self.sigma_reverse.get(&byte) else {
                return false;
            };
            state = self.delta[state][sym] as usize;
        }
        self.accepting[state]
    }

    /// Maps `word` to its unique nonnegative integer rank in the length-stratified,
    /// lexicographic order over this DFA's accepted language (§4.3).
    pub fn rank(&self, word: &[u8]) -> Result<BigUint, RankError> {
        let n = word.len();
        if n as u32 > self.max_len {
            return Err(RankError::LengthExceeded(n, self.max_len));
        }

        let mut symbols = Vec::with_capacity(n);
        for (i, &byte) in word.iter().enumerate() {
            let sym = self
                .sigma_reverse
                .get(&byte)
                .copied()
                .ok_or(RankError::SymbolOutOfAlphabet(byte, i))?;
            symbols.push(sym);
        }

        let mut state = self.start_state as usize;
        let mut c = BigUint::zero();
        for (i, &x) in symbols.iter().enumerate() {
            let remaining = n - i - 1;
            for j in 0..x {
                let dst = self.delta[state][j] as usize;
                c += &self.table[dst][remaining];
            }
            state = self.delta[state][x] as usize;
        }

        if !self.accepting[state] {
            return Err(RankError::NotInLanguage);
        }

        for k in 0..n {
            c += &self.table[self.start_state as usize][k];
        }

        Ok(c)
    }

    /// Maps an integer `rank` back to the word it was assigned by [`rank`](Dfa::rank) (§4.4).
    pub fn unrank(&self, rank: &BigUint) -> Result<Vec<u8>, UnrankError> {
        let start = self.start_state as usize;
        let mut c = rank.clone();

        let mut n = 1usize;
        loop {
            if n as u32 > self.max_len {
                return Err(UnrankError::RankOutOfRange);
            }
            let count_n = &self.table[start][n];
            if &c < count_n {
                break;
            }
            c -= count_n;
            n += 1;
        }

        let mut out = Vec::with_capacity(n);
        let mut state = start;
        for i in 0..n {
            let remaining = n - i - 1;
            let num_symbols = self.sigma.len();
            let mut a = 0usize;
            let mut next = self.delta[state][a] as usize;
            while &c >= &self.table[next][remaining] {
                c -= &self.table[next][remaining];
                a += 1;
                if a >= num_symbols {
                    return Err(UnrankError::RankOutOfRange);
                }
                next = self.delta[state][a] as usize;
            }
            out.push(self.sigma[a]);
            state = next;
        }

        debug_assert!(
            self.accepting[state],
            "unrank should always terminate in an accepting state for a valid rank"
        );

        Ok(out)
    }

    /// The number of words in the accepted language with length in `[min_len, max_len_query]`
    /// (§4.5). `max_len_query` must not exceed the `max_len` this DFA was built with.
    pub fn num_words_in_language(
        &self,
        min_len: u32,
        max_len_query: u32,
    ) -> Result<BigUint, CountError> {
        if max_len_query > self.max_len {
            return Err(CountError::LengthExceeded(max_len_query, self.max_len));
        }
        let start = self.start_state as usize;
        let sum = (min_len..=max_len_query)
            .map(|k| &self.table[start][k as usize])
            .fold(BigUint::zero(), |acc, count| acc + count);
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Regex ^(a|b){2}$, max_len = 3, alphabet {a=0x61 -> code 98, b=0x62 -> code 99}.
    // States: 0 (start), 1 (after one symbol), 2 (accepting, after two symbols), 3 (dead, implicit).
    const TWO_OF_AB: &str = "\
0\t1\t98\t98
0\t1\t99\t99
1\t2\t98\t98
1\t2\t99\t99
2
";

    #[test]
    fn concrete_scenario_two_of_ab() {
        let dfa = Dfa::new(TWO_OF_AB, 3).unwrap();
        assert_eq!(
            dfa.num_words_in_language(0, 3).unwrap(),
            BigUint::from(4u8)
        );
        assert_eq!(dfa.unrank(&BigUint::from(0u8)).unwrap(), b"aa");
        assert_eq!(dfa.unrank(&BigUint::from(1u8)).unwrap(), b"ab");
        assert_eq!(dfa.unrank(&BigUint::from(2u8)).unwrap(), b"ba");
        assert_eq!(dfa.unrank(&BigUint::from(3u8)).unwrap(), b"bb");
        assert_eq!(dfa.rank(b"bb").unwrap(), BigUint::from(3u8));
        assert_eq!(dfa.rank(b"ba").unwrap(), BigUint::from(2u8));
        assert_eq!(dfa.rank(b"b").unwrap_err(), RankError::NotInLanguage);
        assert_eq!(
            dfa.unrank(&BigUint::from(4u8)).unwrap_err(),
            UnrankError::RankOutOfRange
        );
    }

    // Regex ^a*$, max_len = 4, alphabet {a=0x61 -> code 98}. A single accepting state looping on
    // itself plus an explicit dead state is unnecessary here: state 0 both starts and accepts.
    const A_STAR: &str = "\
0\t0\t98\t98
0
";

    #[test]
    fn concrete_scenario_a_star() {
        let dfa = Dfa::new(A_STAR, 4).unwrap();
        assert_eq!(
            dfa.num_words_in_language(0, 4).unwrap(),
            BigUint::from(5u8)
        );
        assert_eq!(dfa.unrank(&BigUint::from(0u8)).unwrap(), b"");
        assert_eq!(dfa.unrank(&BigUint::from(1u8)).unwrap(), b"a");
        assert_eq!(dfa.unrank(&BigUint::from(4u8)).unwrap(), b"aaaa");
        assert_eq!(dfa.rank(b"aaa").unwrap(), BigUint::from(3u8));
    }

    #[test]
    fn empty_word_rank_requires_accepting_start() {
        let dfa = Dfa::new(TWO_OF_AB, 3).unwrap();
        assert_eq!(dfa.rank(b"").unwrap_err(), RankError::NotInLanguage);

        let dfa = Dfa::new(A_STAR, 4).unwrap();
        assert_eq!(dfa.rank(b"").unwrap(), BigUint::zero());
    }

    #[test]
    fn rank_rejects_out_of_alphabet_byte() {
        let dfa = Dfa::new(TWO_OF_AB, 3).unwrap();
        assert_eq!(
            dfa.rank(b"ac").unwrap_err(),
            RankError::SymbolOutOfAlphabet(b'c', 1)
        );
    }

    #[test]
    fn rank_rejects_length_exceeded() {
        let dfa = Dfa::new(TWO_OF_AB, 3).unwrap();
        assert_eq!(
            dfa.rank(b"aaaa").unwrap_err(),
            RankError::LengthExceeded(4, 3)
        );
    }

    #[test]
    fn round_trip_is_consistent_across_whole_language() {
        let dfa = Dfa::new(TWO_OF_AB, 3).unwrap();
        let total = dfa.num_words_in_language(0, 3).unwrap();
        let mut i = BigUint::zero();
        while i < total {
            let word = dfa.unrank(&i).unwrap();
            assert_eq!(dfa.rank(&word).unwrap(), i);
            assert!(dfa.accepts(&word));
            i += 1u8;
        }
    }
}
