use crate::error::CliError;
use clap::Args;
use rankdfa::regex::att_fst_from_regex_with_state_cap;

#[derive(Debug, Args)]
pub struct CompileRegexArgs {
    /// The regular expression to compile.
    pattern: String,
    /// Maximum number of DFA states to allow before failing.
    #[arg(long, default_value_t = rankdfa::regex::DEFAULT_STATE_CAP)]
    state_cap: usize,
}

pub fn run(args: &CompileRegexArgs) -> Result<(), CliError> {
    let listing = att_fst_from_regex_with_state_cap(&args.pattern, args.state_cap)?;
    print!("{listing}");
    Ok(())
}
