use crate::error::CliError;
use crate::io::read_input;
use clap::Args;
use num_bigint::BigUint;
use rankdfa::dfa::Dfa;

#[derive(Debug, Args)]
pub struct UnrankArgs {
    /// Path to an AT&T-format DFA listing, or `-` for stdin.
    dfa_file: String,
    /// Maximum word length the counting table is built up to.
    #[arg(long)]
    max_len: u32,
    /// Print raw bytes as hex instead of a lossy UTF-8 string.
    #[arg(long)]
    hex: bool,
    /// The rank to unrank, as a decimal string.
    rank: String,
}

pub fn run(args: &UnrankArgs) -> Result<(), CliError> {
    let listing = read_input(&args.dfa_file)?;
    let dfa = Dfa::new(&listing, args.max_len)?;
    let rank: BigUint = args
        .rank
        .parse()
        .map_err(|_| CliError::NotABigUint(args.rank.clone()))?;
    let word = dfa.unrank(&rank)?;
    if args.hex {
        println!("{}", word.iter().map(|b| format!("{b:02x}")).collect::<String>());
    } else {
        println!("{}", String::from_utf8_lossy(&word));
    }
    Ok(())
}
