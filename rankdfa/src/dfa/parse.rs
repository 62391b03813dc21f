//! Parsing of the AT&T-format transition listing (§6.1 of the design notes) into the raw
//! ingredients of a [`Dfa`](crate::dfa::Dfa): a dense transition table, the set of accepting
//! states, the start state and the symbol-index alphabet map.
//!
//! The format is line-oriented and tab-separated, so unlike the grid-based DFA/NFA file format
//! this crate inherited, there's no need for a combinator parser here: splitting on `\t` and
//! parsing each field as an integer is enough.

use crate::dfa::error::AttParseError;
use std::collections::HashMap;

/// The raw result of parsing an AT&T listing, before the dead state has been synthesized and
/// before the transition table has been densified. See [`parse`].
pub(crate) struct RawAtt {
    /// `sigma[idx]` is the byte emitted/accepted for symbol index `idx`.
    pub sigma: Vec<u8>,
    /// `delta[state][symbol_idx] = dst_state`, dense over the discovered (non-dead) states.
    pub delta: Vec<Vec<u32>>,
    pub accepting: Vec<u32>,
    pub start_state: u32,
    /// Number of states discovered by the listing, not counting the dead state that the caller
    /// still needs to append.
    pub num_states: u32,
}

enum Record<'a> {
    Transition {
        src: u32,
        dst: u32,
        symbol: u32,
    },
    Accepting(u32),
    #[allow(dead_code)]
    Other(&'a str),
}

fn parse_line<'a>(line_no: usize, line: &'a str) -> Result<Option<Record<'a>>, AttParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = line.split('\t').collect();
    match fields.as_slice() {
        [src, dst, symbol, _output] => {
            let src = parse_u32(line_no, src)?;
            let dst = parse_u32(line_no, dst)?;
            let symbol = parse_u32(line_no, symbol)?;
            Ok(Some(Record::Transition { src, dst, symbol }))
        }
        [state] => Ok(Some(Record::Accepting(parse_u32(line_no, state)?))),
        _ => Err(AttParseError::MalformedLine(line_no, line.to_string())),
    }
}

fn parse_u32(line_no: usize, field: &str) -> Result<u32, AttParseError> {
    field
        .trim()
        .parse()
        .map_err(|_| AttParseError::NotAnInteger(line_no, field.to_string()))
}

/// Parses an AT&T transition listing (§6.1). This performs two passes over the input, as
/// specified: the first discovers the set of states and the alphabet (by first appearance), the
/// second fills in the dense transition table. The dead/sink state is *not* added here; that's
/// the caller's job (see [`crate::dfa::Dfa::new`]), since this function only knows about the
/// states and symbols the listing actually mentions.
pub(crate) fn parse(att_text: &str) -> Result<RawAtt, AttParseError> {
    let mut start_state = None;
    let mut max_state = None;
    let mut symbol_order = Vec::new();
    let mut symbol_seen = HashMap::new();
    let mut accepting = Vec::new();

    for (idx, line) in att_text.lines().enumerate() {
        let line_no = idx + 1;
        match parse_line(line_no, line)? {
            Some(Record::Transition { src, dst, symbol }) => {
                if start_state.is_none() {
                    start_state = Some(src);
                }
                max_state = Some(max_state.map_or(src.max(dst), |m: u32| m.max(src).max(dst)));
                symbol_seen.entry(symbol).or_insert_with(|| {
                    let idx = symbol_order.len();
                    symbol_order.push(symbol);
                    idx
                });
            }
            Some(Record::Accepting(state)) => accepting.push(state),
            Some(Record::Other(_)) | None => {}
        }
    }

    let start_state = start_state.ok_or(AttParseError::MissingStartState)?;
    // States are numbered densely from 0 by the AT&T producers this crate interoperates with
    // (see SPEC_FULL.md §4.1); num_states is one past the highest state number seen.
    let num_states = max_state.map_or(0, |m| m + 1);
    let num_symbols = symbol_order.len();

    for &state in &accepting {
        if state >= num_states {
            return Err(AttParseError::AcceptingStateOutOfRange(state, num_states));
        }
    }

    let sigma: Vec<u8> = symbol_order
        .iter()
        .map(|&code| (code.wrapping_sub(1)) as u8)
        .collect();
    let sigma_reverse: HashMap<u32, usize> = symbol_order
        .iter()
        .enumerate()
        .map(|(idx, &code)| (code, idx))
        .collect();

    // Every transition defaults to the dead state (index num_states, appended by the caller),
    // so we initialize to that and only overwrite cells the listing actually defines.
    let dead = num_states;
    let mut delta = vec![vec![dead; num_symbols]; num_states as usize];

    for (idx, line) in att_text.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(Record::Transition { src, dst, symbol }) = parse_line(line_no, line)? {
            let sym_idx = sigma_reverse[&symbol];
            delta[src as usize][sym_idx] = dst;
        }
    }

    Ok(RawAtt {
        sigma,
        delta,
        accepting,
        start_state,
        num_states,
    })
}
