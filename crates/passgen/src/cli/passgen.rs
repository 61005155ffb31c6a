use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    commands::{generate, profile, OutputArgs, ProfileKind, WordArgs},
    CommandTree, Result,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Passgen {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate numeric PIN codes.
    Pin {
        #[clap(flatten)]
        output: OutputArgs,

        /// Number of digits.
        #[clap(short, long, default_value_t = 4, allow_negative_numbers = true)]
        length: i64,
    },
    /// Generate passwords from random characters.
    Random {
        #[clap(flatten)]
        output: OutputArgs,

        /// Number of characters.
        #[clap(short, long, default_value_t = 8, allow_negative_numbers = true)]
        length: i64,

        /// Include uppercase letters.
        #[clap(short = 'C', long)]
        capitalization: bool,

        /// Include numerical digits.
        #[clap(short = 'N', long)]
        numbers: bool,

        /// Include ASCII punctuation.
        #[clap(short = 'S', long)]
        symbols: bool,
    },
    /// Generate passwords by joining words.
    #[clap(alias = "words")]
    Memorable {
        #[clap(flatten)]
        output: OutputArgs,

        #[clap(flatten)]
        words: WordArgs,

        /// Number of words.
        #[clap(
            short = 'w',
            long = "words",
            default_value_t = 5,
            allow_negative_numbers = true
        )]
        word_count: i64,

        /// Separator between words.
        #[clap(short, long, default_value = "-", allow_hyphen_values = true)]
        separator: String,

        /// Convert words to uppercase.
        #[clap(short = 'C', long)]
        capitalize: bool,
    },
    /// Generate passwords using a profile file.
    Profile {
        #[clap(flatten)]
        output: OutputArgs,

        #[clap(flatten)]
        words: WordArgs,

        /// Profile file to load.
        file: PathBuf,
    },
    /// Write a default profile file.
    Init {
        /// Kind of generator.
        #[clap(short, long, default_value = "random")]
        kind: ProfileKind,

        /// Force overwrite if the file exists.
        #[clap(long)]
        force: bool,

        /// Profile file to write.
        file: PathBuf,
    },
}

/// Parse the command line arguments and run a command.
pub fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("PASSGEN_CLI_JSON").ok().is_some() {
        let cmd = Passgen::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        return Ok(());
    }

    let args = Passgen::parse();
    run_command(args.cmd)
}

/// Run a parsed command.
pub fn run_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Pin { output, length } => generate::pin(output, length)?,
        Command::Random {
            output,
            length,
            capitalization,
            numbers,
            symbols,
        } => generate::random(
            output,
            length,
            capitalization,
            numbers,
            symbols,
        )?,
        Command::Memorable {
            output,
            words,
            word_count,
            separator,
            capitalize,
        } => generate::memorable(
            output, words, word_count, separator, capitalize,
        )?,
        Command::Profile {
            output,
            words,
            file,
        } => profile::run(output, words, file)?,
        Command::Init { kind, force, file } => {
            profile::init(kind, force, file)?
        }
    }
    Ok(())
}
