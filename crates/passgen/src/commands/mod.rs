use clap::{Args, ValueEnum};
use passgen_cli_helpers::messages::info;
use passgen_password::{
    config::{MemorableConfig, PinConfig, RandomConfig},
    measure_entropy, GeneratorConfig, PasswordGenerator, WordFile,
    MESSAGE_PREFIX,
};
use std::{io::Write, path::PathBuf};

use crate::{Error, Result};

pub mod generate;
pub mod profile;

/// Options shared by the generation commands.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Number of passwords to generate.
    #[clap(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Print a strength estimate for each password.
    #[clap(long)]
    pub strength: bool,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            count: 1,
            strength: false,
        }
    }
}

/// Location of the word list for memorable passwords.
#[derive(Args, Debug, Clone, Default)]
pub struct WordArgs {
    /// Newline delimited word file.
    ///
    /// Defaults to the system dictionary.
    #[clap(short = 'f', long, env = "PASSGEN_WORDS", hide_env_values = true)]
    pub word_file: Option<PathBuf>,
}

impl WordArgs {
    /// Word file to read the vocabulary from.
    pub fn source(&self) -> WordFile {
        match &self.word_file {
            Some(path) => WordFile::new(path),
            None => WordFile::new(WordFile::SYSTEM_DICTIONARY),
        }
    }
}

/// Kind of profile written by the init command.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum ProfileKind {
    /// Numeric PIN codes.
    Pin,
    /// Random characters.
    Random,
    /// Words from a vocabulary.
    Memorable,
}

impl From<ProfileKind> for GeneratorConfig {
    fn from(value: ProfileKind) -> Self {
        match value {
            ProfileKind::Pin => PinConfig::default().into(),
            ProfileKind::Random => RandomConfig::default().into(),
            ProfileKind::Memorable => MemorableConfig::default().into(),
        }
    }
}

/// Attach the word file path to errors reading the word file.
pub(crate) fn word_file_error(
    source: &WordFile,
    error: passgen_password::Error,
) -> Error {
    match error {
        passgen_password::Error::Io(e) => {
            Error::WordFile(source.path().to_path_buf(), e)
        }
        _ => error.into(),
    }
}

/// Describe the strength of a password.
pub(crate) fn strength_line(password: &str) -> String {
    // Measure the secret, not the message around it
    let secret = password.strip_prefix(MESSAGE_PREFIX).unwrap_or(password);
    let entropy = measure_entropy(secret, &[]);
    format!(
        "strength: score {}/4, guesses 10^{:.1}",
        entropy.score() as u8,
        entropy.guesses_log10()
    )
}

/// Write generated passwords, one per line.
pub(crate) fn write_secrets(
    out: &mut impl Write,
    generator: &dyn PasswordGenerator,
    count: usize,
) -> Result<Vec<String>> {
    let secrets = generator.many(count);
    for secret in &secrets {
        writeln!(out, "{}", secret)?;
    }
    Ok(secrets)
}

/// Print generated passwords to stdout.
pub(crate) fn print_secrets(
    generator: &dyn PasswordGenerator,
    output: &OutputArgs,
) -> Result<()> {
    tracing::debug!(count = output.count, "commands::print_secrets");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..output.count {
        let secret = write_secrets(&mut out, generator, 1)?;
        if output.strength {
            if let Some(secret) = secret.first() {
                out.flush()?;
                info(strength_line(secret));
            }
        }
    }
    Ok(())
}
