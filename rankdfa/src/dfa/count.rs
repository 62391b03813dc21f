//! Construction of the counting table `T` (§4.2): `T[q][k]` is the number of words of length
//! exactly `k` accepted from state `q`. Built once, bottom-up in length order, and never mutated
//! afterwards.

use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;
use std::time::Instant;

/// Builds `T[0..num_states][0..=max_len]` for the given transition table and accepting-state set.
///
/// `delta[q][a]` must be a total function (every cell populated, including the dead state's
/// self-loops), and `num_states == delta.len()`.
pub(crate) fn build_table(
    delta: &[Vec<u32>],
    accepting: &[bool],
    max_len: u32,
) -> Vec<Vec<BigUint>> {
    let start = Instant::now();
    let num_states = delta.len();
    let num_symbols = delta.first().map_or(0, Vec::len);
    let mut t = vec![vec![BigUint::zero(); max_len as usize + 1]; num_states];

    for (q, row) in t.iter_mut().enumerate() {
        if accepting[q] {
            row[0] = BigUint::from(1u8);
        }
    }

    for k in 1..=max_len as usize {
        for q in 0..num_states {
            let mut sum = BigUint::zero();
            for a in 0..num_symbols {
                let dst = delta[q][a] as usize;
                sum += &t[dst][k - 1];
            }
            t[q][k] = sum;
        }
    }

    debug!(
        "built counting table: {num_states} states x {} lengths in {:?}",
        max_len + 1,
        start.elapsed()
    );

    t
}
