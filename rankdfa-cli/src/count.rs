use crate::error::CliError;
use crate::io::read_input;
use clap::Args;
use rankdfa::dfa::Dfa;

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Path to an AT&T-format DFA listing, or `-` for stdin.
    dfa_file: String,
    /// Maximum word length the counting table is built up to.
    #[arg(long)]
    max_len: u32,
    /// Lower bound of the length window to count (inclusive). Defaults to 0.
    #[arg(long, default_value_t = 0)]
    min_len: u32,
}

pub fn run(args: &CountArgs) -> Result<(), CliError> {
    let listing = read_input(&args.dfa_file)?;
    let dfa = Dfa::new(&listing, args.max_len)?;
    let count = dfa.num_words_in_language(args.min_len, args.max_len)?;
    println!("{count}");
    Ok(())
}
