use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally", bin_name = "tally", version)]
#[command(about = "Keep a list of entries with quantities and a running total", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the stored list and config
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the list, the form and the total
    #[command(alias = "ls")]
    List,

    /// Add an entry
    #[command(alias = "n")]
    Add {
        /// Name of the entry
        name: String,

        /// Quantity (whole number)
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Change the name and quantity of an entry
    #[command(alias = "e")]
    Edit {
        /// Id of the entry, as shown by `list`
        id: u64,

        /// New name
        name: String,

        /// New quantity (whole number)
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Id of the entry, as shown by `list`
        id: u64,
    },

    /// Delete every entry and the stored list
    Clear,

    /// Print the total only
    Total,

    /// Start an interactive session reading from stdin
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (unit, slot-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tally").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_means_no_command() {
        assert_eq!(parse(&[]).command, None);
    }

    #[test]
    fn add_takes_name_and_raw_quantity() {
        assert_eq!(
            parse(&["add", "Eggs", "100"]).command,
            Some(Commands::Add {
                name: "Eggs".into(),
                quantity: "100".into()
            })
        );
    }

    #[test]
    fn negative_quantities_are_not_flags() {
        assert_eq!(
            parse(&["edit", "2", "Refund", "-30"]).command,
            Some(Commands::Edit {
                id: 2,
                name: "Refund".into(),
                quantity: "-30".into()
            })
        );
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&["rm", "3", "--data-dir", "/tmp/x", "-v"]);
        assert_eq!(cli.command, Some(Commands::Delete { id: 3 }));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn delete_requires_numeric_id() {
        assert!(Cli::try_parse_from(["tally", "delete", "eggs"]).is_err());
    }
}
