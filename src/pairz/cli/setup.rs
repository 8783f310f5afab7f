use clap::{Parser, Subcommand, ValueEnum};
use pairz::collection::SortField;

#[derive(Parser, Debug)]
#[command(
    name = "pairz",
    bin_name = "pairz",
    version,
    disable_help_subcommand = true,
    after_help = "Rows are addressed by the position printed in front of them (0, 1, 2...).\nPositions change after every add, sort or delete."
)]
#[command(about = "Keep a small, persistent list of Name=Value pairs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global list instead of the project one
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Name,
    Value,
}

impl From<SortKey> for SortField {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortField::Name,
            SortKey::Value => SortField::Value,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the list
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a Name=Value pair
    #[command(alias = "a", display_order = 2)]
    Add {
        /// The pair, e.g. Hello=World (words are joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },

    /// Sort the list by name or by value
    #[command(display_order = 3)]
    Sort {
        /// Field to sort on
        #[arg(value_enum)]
        field: SortKey,
    },

    /// Delete rows by position
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Positions of the rows (e.g. 0 2 or 1-3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Start an interactive session reading actions from stdin
    #[command(display_order = 5)]
    Shell,

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (e.g., storage-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print where the list is stored
    #[command(display_order = 11)]
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_args_means_no_command() {
        let cli = parse(&["pairz"]);
        assert!(cli.command.is_none());
        assert!(!cli.global);
    }

    #[test]
    fn add_joins_words() {
        let cli = parse(&["pairz", "add", "Name", "=", "Value"]);
        match cli.command {
            Some(Commands::Add { input }) => assert_eq!(input.join(" "), "Name = Value"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_accepts_leading_hyphen() {
        let cli = parse(&["pairz", "add", "-x=1"]);
        assert!(matches!(cli.command, Some(Commands::Add { .. })));
    }

    #[test]
    fn sort_takes_a_field() {
        let cli = parse(&["pairz", "sort", "value"]);
        match cli.command {
            Some(Commands::Sort { field }) => assert_eq!(SortField::from(field), SortField::Value),
            other => panic!("unexpected {:?}", other),
        }
        assert!(Cli::try_parse_from(["pairz", "sort", "size"]).is_err());
    }

    #[test]
    fn delete_alias_and_global_flag() {
        let cli = parse(&["pairz", "rm", "0", "2-3", "-g"]);
        assert!(cli.global);
        match cli.command {
            Some(Commands::Delete { indexes }) => assert_eq!(indexes, vec!["0", "2-3"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn delete_requires_positions() {
        assert!(Cli::try_parse_from(["pairz", "delete"]).is_err());
    }
}
