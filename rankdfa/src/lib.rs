//! # rankdfa
//!
//! `rankdfa` is a Rust library for the length-stratified, lexicographically-ordered rank/unrank
//! bijection over the language a DFA accepts: the combinatorial core of format-transforming
//! encryption (FTE), where a ciphertext is encoded as the rank of a random accepted string and
//! decoded by unranking it back.
//!
//! ## Usage
//!
//! ```
//! use rankdfa::dfa::Dfa;
//!
//! // Two states (0 = start/accepting, 1 = dead), one symbol (code 98 = byte 'a').
//! let listing = "0\t0\t98\t98\n0\n";
//! let dfa = Dfa::new(listing, 8).unwrap();
//!
//! let rank = dfa.rank(b"aaa").unwrap();
//! assert_eq!(dfa.unrank(&rank).unwrap(), b"aaa");
//! ```
//!
//! A DFA can also be produced directly from a regular expression, then minimized, before being
//! handed to [`dfa::Dfa::new`]:
//!
//! ```
//! use rankdfa::{dfa::Dfa, regex::att_fst_from_regex};
//!
//! let listing = att_fst_from_regex("[0-9]{3}-[0-9]{4}").unwrap();
//! let dfa = Dfa::new(&listing, 8).unwrap();
//! assert!(dfa.accepts(b"555-1234"));
//! ```
//!
//! ## File format
//!
//! DFAs are described by the AT&T-format transition listing: a tab-separated `src\tdst\tsymbol\t
//! output` line per transition, and a single-field `state` line per accepting state. States and
//! symbols are numbered by first appearance; the state of the first transition line is the start
//! state. See [`dfa::Dfa::new`] for the full grammar and the dead-state convention.
//!
//! ## Operations
//!
//! This library currently supports:
//!
//! * [Parsing](dfa::Dfa::new) an AT&T listing into a ready-to-query [`Dfa`](dfa::Dfa)
//! * [Ranking](dfa::Dfa::rank) a word and [unranking](dfa::Dfa::unrank) an integer back to a word
//! * [Counting](dfa::Dfa::num_words_in_language) the words accepted within a length window
//! * [Compiling a regular expression](regex::att_fst_from_regex) straight to an AT&T listing
//! * [Minimizing](minimize::att_fst_minimize) an AT&T listing via the OpenFst command-line tools

pub mod dfa;
pub mod minimize;
pub mod regex;
