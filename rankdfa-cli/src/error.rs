use rankdfa::dfa::error::{AttParseError, CountError, RankError, UnrankError};
use rankdfa::minimize::MinimizationError;
use rankdfa::regex::RegexCompileError;
use std::io;
use thiserror::Error;

/// The single error type every subcommand funnels into, so `main` can print one `Display` and
/// exit 1 regardless of which stage of the pipeline failed (§6.4/§7).
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {0}: {1}")]
    Read(String, #[source] io::Error),
    #[error("invalid big integer {0:?}")]
    NotABigUint(String),
    #[error(transparent)]
    AttParse(#[from] AttParseError),
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error(transparent)]
    Unrank(#[from] UnrankError),
    #[error(transparent)]
    Count(#[from] CountError),
    #[error(transparent)]
    RegexCompile(#[from] RegexCompileError),
    #[error(transparent)]
    Minimization(#[from] MinimizationError),
}
