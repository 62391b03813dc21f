//! # Regex → AT&T DFA front end
//!
//! [`att_fst_from_regex`] compiles a regular expression straight to an AT&T-format transition
//! listing (§6.1), the same format [`crate::dfa::Dfa::new`] parses and [`crate::minimize`]
//! minimizes. The reference implementation this crate reimplements shelled out to RE2's internal
//! DFA dump for this step; here it's done in-process with a dense byte-oriented DFA instead (see
//! DESIGN.md for why), walked breadth-first from its start state so the emitted state numbers come
//! out contiguous from 0, which is what the parser in §4.1 expects.
//!
//! ```
//! use rankdfa::regex::att_fst_from_regex;
//! use rankdfa::dfa::Dfa;
//!
//! let listing = att_fst_from_regex("(a|b){2}").unwrap();
//! let dfa = Dfa::new(&listing, 3).unwrap();
//! assert!(dfa.accepts(b"ab"));
//! assert!(!dfa.accepts(b"a"));
//! ```

pub mod error;

pub use error::RegexCompileError;

use regex_automata::dfa::{dense, Automaton};
use regex_automata::{Anchored, Input};
use std::collections::{HashMap, VecDeque};

/// Default cap on the number of states a compiled regex may produce before
/// [`RegexCompileError::TooManyStates`] is raised. Generous enough for everyday FTE-format
/// regexes, small enough to fail fast on accidental state explosions (e.g. `.{0,64}` over a wide
/// character class).
pub const DEFAULT_STATE_CAP: usize = 1 << 16;

/// Compiles `pattern` to an AT&T-format DFA listing, using [`DEFAULT_STATE_CAP`] as the state
/// ceiling. See [`att_fst_from_regex_with_state_cap`] to configure the cap.
pub fn att_fst_from_regex(pattern: &str) -> Result<String, RegexCompileError> {
    att_fst_from_regex_with_state_cap(pattern, DEFAULT_STATE_CAP)
}

/// Compiles `pattern` to an AT&T-format DFA listing (§6.1 / §4.6).
///
/// The pattern is compiled with newline-permissive character classes (`.` and negated classes
/// match `\n`), single-line anchors (`^`/`$` bind to the whole input, not per-line) and
/// byte-oriented (non-UTF-8-requiring) matching, mirroring the flags the original reference
/// implementation configured its regex engine with. `state_cap` bounds the number of DFA states
/// the compiled automaton may have; exceeding it raises [`RegexCompileError::TooManyStates`]
/// instead of silently building an enormous table.
pub fn att_fst_from_regex_with_state_cap(
    pattern: &str,
    state_cap: usize,
) -> Result<String, RegexCompileError> {
    let dfa = dense::DFA::builder()
        .syntax(
            regex_automata::util::syntax::Config::new()
                .multi_line(false)
                .dot_matches_new_line(true)
                .unicode(false)
                .utf8(false),
        )
        .build(pattern)?;

    let start = dfa.start_state_forward(&Input::new("").anchored(Anchored::Yes))?;

    let mut index_of = HashMap::new();
    let mut order = Vec::new();
    index_of.insert(start, 0usize);
    order.push(start);
    let mut frontier = VecDeque::from([start]);

    let mut lines = Vec::new();

    while let Some(state) = frontier.pop_front() {
        let src_idx = index_of[&state];
        for byte in 0u16..=255 {
            let byte = byte as u8;
            let next = dfa.next_state(state, byte);
            if dfa.is_quit_state(next) {
                return Err(RegexCompileError::QuitState(byte));
            }
            if dfa.is_dead_state(next) {
                // Not emitted: the AT&T parser's own sink-state convention (§4.1) already
                // routes every undefined transition to a synthesized dead state.
                continue;
            }
            let dst_idx = *index_of.entry(next).or_insert_with(|| {
                let idx = order.len();
                order.push(next);
                frontier.push_back(next);
                idx
            });
            if order.len() > state_cap {
                return Err(RegexCompileError::TooManyStates(order.len(), state_cap));
            }
            let symbol_code = byte as u32 + 1;
            lines.push(format!("{src_idx}\t{dst_idx}\t{symbol_code}\t{symbol_code}"));
        }
    }

    for (idx, &state) in order.iter().enumerate() {
        let eoi = dfa.next_eoi_state(state);
        if dfa.is_match_state(eoi) {
            lines.push(idx.to_string());
        }
    }

    lines.push(String::new());
    log::debug!(
        "compiled regex to AT&T listing: {} states, pattern {pattern:?}",
        order.len()
    );
    Ok(lines.join("\n"))
}
