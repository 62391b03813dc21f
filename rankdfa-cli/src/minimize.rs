use crate::error::CliError;
use crate::io::read_input;
use clap::Args;
use rankdfa::minimize::att_fst_minimize;

#[derive(Debug, Args)]
pub struct MinimizeArgs {
    /// Path to an AT&T-format DFA listing, or `-` for stdin.
    dfa_file: String,
}

pub fn run(args: &MinimizeArgs) -> Result<(), CliError> {
    let listing = read_input(&args.dfa_file)?;
    let minimized = att_fst_minimize(&listing)?;
    print!("{minimized}");
    Ok(())
}
