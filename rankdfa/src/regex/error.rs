use thiserror::Error;

/// Errors raised by [`att_fst_from_regex`](crate::regex::att_fst_from_regex).
#[derive(Debug, Error)]
pub enum RegexCompileError {
    #[error("failed to compile regex: {0}")]
    Build(#[from] regex_automata::dfa::dense::BuildError),
    #[error("regex compiled to {0} states, exceeding the configured cap of {1}")]
    TooManyStates(usize, usize),
    #[error("failed to compute start state: {0}")]
    StartState(#[from] regex_automata::util::start::StartError),
    #[error("compiled DFA entered a quit state while enumerating byte {0:#04x}")]
    QuitState(u8),
}
