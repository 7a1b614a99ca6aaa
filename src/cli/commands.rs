// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API
    Serve,

    /// Generate random character passwords
    Random {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out special symbols
        #[arg(long)]
        no_special: bool,

        /// Exclude visually similar characters (i, l, 1, L, o, O)
        #[arg(long)]
        exclude_similar: bool,

        /// Number of passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Generate memorable word passphrases
    Memorable {
        /// Number of words
        #[arg(long, short)]
        words: Option<usize>,

        /// Separator between words
        #[arg(long, short, allow_hyphen_values = true)]
        separator: Option<String>,

        /// Number of passphrases to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Choose options interactively
    Interactive,
}
