// Lineup Merge - list-only CLI
// Prints, per day, every act and the authors who listed it.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;

use lineup_merge::{logging, merge_files, write_lineup_report, MergeConfig, VocabularyPolicy};

#[derive(Parser, Debug)]
#[command(name = "lineup-merge", version, about = "Merge festival lineup lists from several authors")]
struct Cli {
    /// Author list files, merged in the order given
    #[arg(required = true, value_name = "LIST")]
    lists: Vec<PathBuf>,

    /// JSON config (aliases, typo tolerance, vocabulary policy)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the config's vocabulary policy
    #[arg(long, value_enum)]
    vocabulary: Option<VocabularyArg>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum VocabularyArg {
    Growing,
    FirstList,
}

impl From<VocabularyArg> for VocabularyPolicy {
    fn from(arg: VocabularyArg) -> Self {
        match arg {
            VocabularyArg::Growing => VocabularyPolicy::Growing,
            VocabularyArg::FirstList => VocabularyPolicy::FirstList,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => MergeConfig::from_file(path)?,
        None => MergeConfig::default(),
    };
    if let Some(policy) = cli.vocabulary {
        config.vocabulary = policy.into();
    }
    info!("lineup-merge {} ({} lists)", lineup_merge::VERSION, cli.lists.len());

    let merged = merge_files(&cli.lists, &config)?;
    write_lineup_report(&mut io::stdout().lock(), &merged)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_lists_is_usage_error() {
        let err = Cli::try_parse_from(["lineup-merge"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_lists_and_flags() {
        let cli = Cli::try_parse_from(["lineup-merge", "a.txt"]).unwrap();
        assert_eq!(cli.lists, vec![PathBuf::from("a.txt")]);
        assert!(cli.vocabulary.is_none());

        let cli = Cli::try_parse_from(["lineup-merge", "-vv", "--vocabulary", "first-list", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.lists.len(), 2);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.vocabulary, Some(VocabularyArg::FirstList)));
    }

    #[test]
    fn test_fixed_is_not_a_cli_policy() {
        let err = Cli::try_parse_from(["lineup-merge", "--vocabulary", "fixed", "a.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
