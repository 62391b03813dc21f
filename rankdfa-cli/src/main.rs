mod compile_regex;
mod count;
mod error;
mod io;
mod minimize;
mod rank;
mod unrank;

use clap::{Parser, Subcommand};

/// Rank, unrank and compile DFAs described by the AT&T transition-listing format.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Increase log verbosity; repeat for more (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the decimal rank of a word accepted by a DFA.
    Rank(rank::RankArgs),
    /// Print the word at a given rank.
    Unrank(unrank::UnrankArgs),
    /// Print the number of words a DFA accepts within a length window.
    Count(count::CountArgs),
    /// Compile a regular expression to an AT&T-format DFA listing.
    CompileRegex(compile_regex::CompileRegexArgs),
    /// Minimize an AT&T-format DFA listing via the OpenFst command-line tools.
    Minimize(minimize::MinimizeArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let result = match &cli.command {
        Command::Rank(args) => rank::run(args),
        Command::Unrank(args) => unrank::run(args),
        Command::Count(args) => count::run(args),
        Command::CompileRegex(args) => compile_regex::run(args),
        Command::Minimize(args) => minimize::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
