use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "kata")]
#[command(about = "Small exercise solutions on the command line")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write logs to stderr as JSON")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read `<op> <int> <int>` from stdin and print the result (default)
    Calc,

    /// Print the longest common prefix of the given words
    Prefix {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print whether a number reads the same in both directions
    Palindrome {
        #[arg(allow_negative_numbers = true)]
        number: i32,
    },

    /// Convert a Roman numeral to an integer
    Roman { numeral: String },

    /// Run every case from a TOML batch file
    Batch {
        /// Path to the batch file
        #[arg(short, long, default_value = "kata-batch.toml")]
        config: String,

        /// Print one JSON object per case
        #[arg(long)]
        json: bool,
    },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Calc)
    }
}
