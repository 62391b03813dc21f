use thiserror::Error;

/// Errors raised while turning an AT&T-format transition listing into a [`Dfa`](crate::dfa::Dfa).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttParseError {
    #[error("line {0} is neither a 4-field transition record nor a 1-field accepting-state record: {1:?}")]
    MalformedLine(usize, String),
    #[error("line {0}: field {1:?} is not a valid non-negative integer")]
    NotAnInteger(usize, String),
    #[error("accepting state {0} is out of range (there are {1} states)")]
    AcceptingStateOutOfRange(u32, u32),
    #[error("the listing contains no transitions, so no start state could be determined")]
    MissingStartState,
}

/// Errors raised by [`Dfa::rank`](crate::dfa::Dfa::rank).
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum RankError {
    #[error("word has length {0}, which exceeds max_len {1}")]
    LengthExceeded(usize, u32),
    #[error("byte {0:#04x} at position {1} is not in the DFA's alphabet")]
    SymbolOutOfAlphabet(u8, usize),
    #[error("word is not accepted by the DFA")]
    NotInLanguage,
}

/// Errors raised by [`Dfa::unrank`](crate::dfa::Dfa::unrank).
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum UnrankError {
    #[error("rank is out of range for max_len")]
    RankOutOfRange,
}

/// Errors raised by [`Dfa::num_words_in_language`](crate::dfa::Dfa::num_words_in_language).
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CountError {
    #[error("requested length {0} exceeds the table's max_len {1}")]
    LengthExceeded(u32, u32),
}
