use crate::error::CliError;
use crate::io::read_input;
use clap::Args;
use rankdfa::dfa::Dfa;

#[derive(Debug, Args)]
pub struct RankArgs {
    /// Path to an AT&T-format DFA listing, or `-` for stdin.
    dfa_file: String,
    /// Maximum word length the counting table is built up to.
    #[arg(long)]
    max_len: u32,
    /// The word to rank.
    word: String,
}

pub fn run(args: &RankArgs) -> Result<(), CliError> {
    let listing = read_input(&args.dfa_file)?;
    let dfa = Dfa::new(&listing, args.max_len)?;
    let rank = dfa.rank(args.word.as_bytes())?;
    println!("{rank}");
    Ok(())
}
