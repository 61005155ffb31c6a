use passgen_cli_helpers::messages::success;
use passgen_password::{GeneratorConfig, VocabularySource};
use std::path::{Path, PathBuf};

use super::{print_secrets, word_file_error, OutputArgs, ProfileKind, WordArgs};
use crate::{Error, Result};

/// Load a generator profile from a TOML file.
pub fn load(path: &Path) -> Result<GeneratorConfig> {
    if !path.is_file() {
        return Err(Error::NotFile(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&contents)?;
    tracing::debug!(
        path = %path.display(),
        kind = config.kind(),
        "profile::load"
    );
    Ok(config)
}

/// Print passwords using the generator described by a profile.
pub fn run(output: OutputArgs, words: WordArgs, file: PathBuf) -> Result<()> {
    let config = load(&file)?;
    let source = words.source();
    let generator = config
        .build(Some(&source as &dyn VocabularySource))
        .map_err(|e| word_file_error(&source, e))?;
    print_secrets(generator.as_ref(), &output)
}

/// Write a default profile for a generator kind.
pub fn init(kind: ProfileKind, force: bool, file: PathBuf) -> Result<()> {
    if file.exists() && !force {
        return Err(Error::FileExists(file));
    }
    let config: GeneratorConfig = kind.into();
    let content = toml::to_string_pretty(&config)?;
    std::fs::write(&file, content.as_bytes())?;
    success(format!("wrote {} profile to {}", config.kind(), file.display()));
    Ok(())
}
